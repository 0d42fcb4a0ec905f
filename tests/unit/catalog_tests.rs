/*!
 * Tests for the model catalog and provider resolution
 */

use babelgate::catalog::{
    all_models, find_model, format_model_name, models_for_provider, ProviderKind,
};

#[test]
fn test_providerResolution_shouldFollowPrefixOrder() {
    assert_eq!(ProviderKind::from_model_id("claude-3-5-sonnet"), ProviderKind::Anthropic);
    assert_eq!(ProviderKind::from_model_id("gpt-4-turbo"), ProviderKind::OpenAI);
    assert_eq!(ProviderKind::from_model_id("gemini-2.0-flash"), ProviderKind::Google);
    assert_eq!(ProviderKind::from_model_id("mistral-large"), ProviderKind::Unknown);
}

#[test]
fn test_providerResolution_shouldBeTotal() {
    // Never fails, whatever the input
    assert_eq!(ProviderKind::from_model_id(""), ProviderKind::Unknown);
    assert_eq!(ProviderKind::from_model_id("claude"), ProviderKind::Anthropic);
    assert_eq!(ProviderKind::from_model_id("gpt"), ProviderKind::OpenAI);
    assert_eq!(ProviderKind::from_model_id("gemini"), ProviderKind::Google);
}

#[test]
fn test_providerKind_display_shouldUseLowercaseTags() {
    assert_eq!(ProviderKind::Anthropic.to_string(), "anthropic");
    assert_eq!(ProviderKind::OpenAI.to_string(), "openai");
    assert_eq!(ProviderKind::Google.to_string(), "google");
    assert_eq!(ProviderKind::Unknown.to_string(), "unknown");
}

#[test]
fn test_providerKind_fromStr_shouldAcceptAliases() {
    assert_eq!("claude".parse::<ProviderKind>().unwrap(), ProviderKind::Anthropic);
    assert_eq!("GOOGLE".parse::<ProviderKind>().unwrap(), ProviderKind::Google);
    assert!("azure".parse::<ProviderKind>().is_err());
}

#[test]
fn test_catalog_shouldListFourteenModels() {
    assert_eq!(all_models().len(), 14);
    assert_eq!(models_for_provider(ProviderKind::Google).len(), 7);
}

#[test]
fn test_findModel_shouldExposeDisplayMetadata() {
    let model = find_model("claude-3-5-sonnet").unwrap();
    assert_eq!(model.name, "Claude 3.5 Sonnet");
    assert_eq!(model.tier, "premium");
    assert_eq!(model.context_window, 200_000);
    assert_eq!(model.provider, ProviderKind::Anthropic);
}

#[test]
fn test_formatModelName_shouldNormalizeGeminiIds() {
    assert_eq!(
        format_model_name("gemini-1.5-pro-latest", ProviderKind::Google),
        "gemini-1.5-pro"
    );
    assert_eq!(format_model_name("gemini-2.0-pro", ProviderKind::Google), "2.0-pro");
    assert_eq!(
        format_model_name("claude-3-opus", ProviderKind::Anthropic),
        "claude-3-opus"
    );
}
