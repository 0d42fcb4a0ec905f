/*!
 * End-to-end orchestrator tests over the mock backend
 *
 * These tests drive the full validate -> translate -> post-edit ->
 * assemble pipeline without any network access.
 */

use std::sync::Arc;

use babelgate::catalog::ProviderKind;
use babelgate::errors::TranslationError;
use babelgate::translation::orchestrator::{Orchestrator, TranslationRequest};

use crate::common::mock_backend::MockBackend;

fn request_from_json(value: serde_json::Value) -> TranslationRequest {
    serde_json::from_value(value).unwrap()
}

fn basic_request() -> TranslationRequest {
    request_from_json(serde_json::json!({
        "text": "Hello",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "claude-3-haiku",
        "apiKeys": { "anthropic": "sk-ant-x" }
    }))
}

#[tokio::test]
async fn test_translate_basicRequest_shouldAssembleResult() {
    let backend = Arc::new(MockBackend::scripted(vec!["Bonjour"]));
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let outcome = orchestrator.run(&basic_request()).await.unwrap();

    assert_eq!(outcome.translated_text, "Bonjour");
    assert_eq!(outcome.provider, ProviderKind::Anthropic);
    assert_eq!(outcome.model, "claude-3-haiku");
    assert_eq!(outcome.token_count.input, 2);
    assert_eq!(outcome.token_count.output, 2);
    assert!(outcome.post_edited_text.is_none());
    assert!(outcome.post_edit_provider.is_none());

    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 1);
    let call = &tracker.calls[0];
    assert_eq!(call.provider, ProviderKind::Anthropic);
    assert_eq!(call.model, "claude-3-haiku");
    assert_eq!(call.api_key, "sk-ant-x");
    assert_eq!(call.text, "Hello");
    assert!(call.system_prompt.contains("from en to fr"));
    assert_eq!(call.glossary_text, "");
}

#[tokio::test]
async fn test_translate_withPostEditing_shouldRunTwoSequentialPasses() {
    let backend = Arc::new(MockBackend::scripted(vec!["Bonjour", "Bonjour!"]));
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "Hello",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "claude-3-haiku",
        "usePostEditing": true,
        "postEditModel": "gpt-3.5-turbo",
        "apiKeys": { "anthropic": "sk-ant-x", "openai": "sk-oai-x" }
    }));

    let outcome = orchestrator.run(&request).await.unwrap();

    assert_eq!(outcome.translated_text, "Bonjour");
    assert_eq!(outcome.post_edited_text.as_deref(), Some("Bonjour!"));
    assert_eq!(outcome.post_edit_provider, Some(ProviderKind::OpenAI));
    assert_eq!(outcome.post_edit_model.as_deref(), Some("gpt-3.5-turbo"));
    // Each pass carries its own token estimates
    assert_eq!(outcome.token_count.input, 2);
    assert_eq!(outcome.token_count.output, 2);
    assert_eq!(outcome.token_count.post_edit_input, Some(2));
    assert_eq!(outcome.token_count.post_edit_output, Some(2));

    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 2);
    // The post-edit pass consumes the first pass's output
    assert_eq!(tracker.calls[1].provider, ProviderKind::OpenAI);
    assert_eq!(tracker.calls[1].text, "Bonjour");
    assert!(tracker.calls[1].system_prompt.contains("reviewing and improving"));
}

#[tokio::test]
async fn test_translate_withGlossary_shouldPassFormattedGlossaryToBothPasses() {
    let backend = Arc::new(MockBackend::scripted(vec!["Le chat", "Le chat!"]));
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "The cat",
        "sourceLang": "en",
        "targetLang": "fr",
        "domain": "technical",
        "model": "claude-3-haiku",
        "usePostEditing": true,
        "postEditModel": "claude-3-opus",
        "glossary": { "cat": "chat" },
        "apiKeys": { "anthropic": "sk-ant-x" }
    }));

    orchestrator.run(&request).await.unwrap();

    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 2);
    for call in &tracker.calls {
        assert!(call.glossary_text.contains("- \"cat\" → \"chat\""));
        assert!(call.system_prompt.contains("technical content"));
    }
}

#[tokio::test]
async fn test_translate_missingText_shouldFailWithoutDispatch() {
    let backend = Arc::new(MockBackend::working());
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "claude-3-haiku",
        "apiKeys": { "anthropic": "sk-ant-x" }
    }));

    let err = orchestrator.run(&request).await.unwrap_err();
    assert!(matches!(err, TranslationError::MissingField("text")));
    assert!(err.is_validation());
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_translate_missingCredential_shouldFailWithoutDispatch() {
    let backend = Arc::new(MockBackend::working());
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "Hello",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "gpt-4",
        "apiKeys": { "anthropic": "sk-ant-x" }
    }));

    let err = orchestrator.run(&request).await.unwrap_err();
    assert!(matches!(err, TranslationError::MissingApiKey(ref p) if p == "openai"));
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_translate_postEditCredentialMissing_shouldFailBeforeAnyCall() {
    let backend = Arc::new(MockBackend::working());
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    // The first pass is fully funded; only the post-edit provider lacks a
    // key. The request must still fail with zero dispatches.
    let request = request_from_json(serde_json::json!({
        "text": "Hello",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "claude-3-haiku",
        "usePostEditing": true,
        "postEditModel": "gemini-1.5-pro-latest",
        "apiKeys": { "anthropic": "sk-ant-x" }
    }));

    let err = orchestrator.run(&request).await.unwrap_err();
    assert!(matches!(err, TranslationError::MissingApiKey(ref p) if p == "google"));
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_translate_postEditingWithoutModel_shouldFailValidation() {
    let backend = Arc::new(MockBackend::working());
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "Hello",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "claude-3-haiku",
        "usePostEditing": true,
        "apiKeys": { "anthropic": "sk-ant-x" }
    }));

    let err = orchestrator.run(&request).await.unwrap_err();
    assert!(matches!(err, TranslationError::MissingField("postEditModel")));
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_translate_unknownModel_shouldFailValidation() {
    let backend = Arc::new(MockBackend::working());
    let tracker = backend.tracker();
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "Hello",
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "llama3.2:3b",
        "apiKeys": { "anthropic": "sk-ant-x" }
    }));

    let err = orchestrator.run(&request).await.unwrap_err();
    assert!(matches!(err, TranslationError::UnsupportedProvider(_)));
    assert!(err.is_validation());
    assert_eq!(tracker.lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_translate_providerFailure_shouldSurfaceGenericError() {
    let backend = Arc::new(MockBackend::failing());
    let orchestrator = Orchestrator::new(backend);

    let err = orchestrator.run(&basic_request()).await.unwrap_err();
    assert!(matches!(err, TranslationError::Provider(ProviderKind::Anthropic)));
    assert!(!err.is_validation());
    assert_eq!(err.to_string(), "Failed to translate with anthropic");
}

#[tokio::test]
async fn test_translate_estimatedCost_shouldUsePriceTable() {
    let long_output = "x".repeat(4000);
    let backend = Arc::new(MockBackend::scripted(vec![long_output.as_str()]));
    let orchestrator = Orchestrator::new(backend);

    let request = request_from_json(serde_json::json!({
        "text": "y".repeat(4000),
        "sourceLang": "en",
        "targetLang": "fr",
        "model": "gpt-3.5-turbo",
        "apiKeys": { "openai": "sk-oai-x" }
    }));

    let outcome = orchestrator.run(&request).await.unwrap();
    assert_eq!(outcome.token_count.input, 1000);
    assert_eq!(outcome.token_count.output, 1000);
    assert_eq!(outcome.estimated_cost, 0.0030);
}
