/*!
 * Provider dispatch: selects the provider client for a resolved model and
 * normalizes the three response shapes into a single translated string.
 *
 * Exactly one network call is made per invocation. Provider failures are
 * logged here with context and re-surfaced as a generic error naming the
 * provider; provider-specific payloads never cross this boundary.
 */

use async_trait::async_trait;
use log::{debug, error};

use crate::catalog::{format_model_name, ProviderKind};
use crate::errors::TranslationError;
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::gemini::{Gemini, GeminiRequest};
use crate::providers::openai::{OpenAI, OpenAIRequest};
use crate::providers::Provider;
use crate::translation::prompts::compose_user_prompt;

/// Default upper bound on generated output per provider call.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;

/// Capability to turn one text into one translated string.
///
/// Implemented by the production provider backend and by test doubles, so
/// the orchestrator can be exercised without a network.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Perform a single translation call against the given provider.
    async fn translate(
        &self,
        provider: ProviderKind,
        model_id: &str,
        api_key: &str,
        text: &str,
        system_prompt: &str,
        glossary_text: &str,
    ) -> Result<String, TranslationError>;
}

/// Production backend that builds the matching provider client per call.
///
/// Stateless apart from the output cap: credentials arrive with each
/// request and are never retained.
#[derive(Debug)]
pub struct ProviderBackend {
    /// Cap on generated tokens per provider call
    max_output_tokens: u32,
}

impl Default for ProviderBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OUTPUT_TOKENS)
    }
}

impl ProviderBackend {
    /// Create a new provider backend with the given output cap.
    pub fn new(max_output_tokens: u32) -> Self {
        Self { max_output_tokens }
    }

    async fn translate_with_anthropic(
        &self,
        model_id: &str,
        api_key: &str,
        user_prompt: &str,
        system_prompt: &str,
    ) -> Result<String, TranslationError> {
        let client = Anthropic::new(api_key);
        let request = AnthropicRequest::new(model_id, self.max_output_tokens)
            .system(system_prompt)
            .add_message("user", user_prompt);

        let response = client.complete(request).await.map_err(|e| {
            error!("Anthropic API error: {}", e);
            TranslationError::Provider(ProviderKind::Anthropic)
        })?;

        Ok(Anthropic::extract_text_from_response(&response))
    }

    async fn translate_with_openai(
        &self,
        model_id: &str,
        api_key: &str,
        user_prompt: &str,
        system_prompt: &str,
    ) -> Result<String, TranslationError> {
        let client = OpenAI::new(api_key);
        let request = OpenAIRequest::new(model_id, self.max_output_tokens)
            .add_message("system", system_prompt)
            .add_message("user", user_prompt);

        let response = client.complete(request).await.map_err(|e| {
            error!("OpenAI API error: {}", e);
            TranslationError::Provider(ProviderKind::OpenAI)
        })?;

        Ok(OpenAI::extract_text_from_response(&response))
    }

    async fn translate_with_gemini(
        &self,
        model_id: &str,
        api_key: &str,
        user_prompt: &str,
        system_prompt: &str,
    ) -> Result<String, TranslationError> {
        let client = Gemini::new(api_key);
        // Gemini has no separate system role; everything goes in one prompt.
        let prompt = format!("{}\n\n{}", system_prompt, user_prompt);
        let model = format_model_name(model_id, ProviderKind::Google);
        let request = GeminiRequest::new(&model, &prompt).max_output_tokens(self.max_output_tokens);

        let response = client.generate(request).await.map_err(|e| {
            error!("Gemini API error: {}", e);
            TranslationError::Provider(ProviderKind::Google)
        })?;

        Ok(Gemini::extract_text_from_response(&response))
    }
}

#[async_trait]
impl TranslationBackend for ProviderBackend {
    async fn translate(
        &self,
        provider: ProviderKind,
        model_id: &str,
        api_key: &str,
        text: &str,
        system_prompt: &str,
        glossary_text: &str,
    ) -> Result<String, TranslationError> {
        debug!("Dispatching translation to {} with model {}", provider, model_id);

        let user_prompt = compose_user_prompt(glossary_text, text);

        match provider {
            ProviderKind::Anthropic => {
                self.translate_with_anthropic(model_id, api_key, &user_prompt, system_prompt)
                    .await
            }
            ProviderKind::OpenAI => {
                self.translate_with_openai(model_id, api_key, &user_prompt, system_prompt)
                    .await
            }
            ProviderKind::Google => {
                self.translate_with_gemini(model_id, api_key, &user_prompt, system_prompt)
                    .await
            }
            // Rejected during validation; kept as a guard for direct callers.
            ProviderKind::Unknown => {
                Err(TranslationError::UnsupportedProvider(model_id.to_string()))
            }
        }
    }
}
