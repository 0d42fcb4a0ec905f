/*!
 * Static model catalog and provider resolution.
 *
 * The catalog is defined once at process start and never mutated. Context
 * windows are informational only; input length is not enforced against them.
 */

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Translation provider behind a model id
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic Claude API
    Anthropic,
    /// OpenAI API
    OpenAI,
    /// Google Gemini API
    Google,
    /// Model id did not match any known provider
    Unknown,
}

impl ProviderKind {
    /// Resolve a provider from a model id by prefix.
    ///
    /// Pure and total: unrecognized ids map to `Unknown`, never an error.
    /// Callers must treat `Unknown` as a request-validation failure.
    pub fn from_model_id(model_id: &str) -> Self {
        if model_id.starts_with("claude") {
            Self::Anthropic
        } else if model_id.starts_with("gpt") {
            Self::OpenAI
        } else if model_id.starts_with("gemini") {
            Self::Google
        } else {
            Self::Unknown
        }
    }

    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Anthropic => "Anthropic",
            Self::OpenAI => "OpenAI",
            Self::Google => "Google",
            Self::Unknown => "Unknown",
        }
    }

    // @returns: Lowercase provider identifier, as used in API keys maps
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Anthropic => "anthropic".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Google => "google".to_string(),
            Self::Unknown => "unknown".to_string(),
        }
    }
}

// Implement Display trait for ProviderKind
impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for ProviderKind
impl std::str::FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "openai" | "gpt" => Ok(Self::OpenAI),
            "google" | "gemini" => Ok(Self::Google),
            _ => Err(anyhow::anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Immutable catalog entry for a known model
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model identifier, unique within a provider
    pub id: &'static str,

    /// Human-readable display name
    pub name: &'static str,

    /// Owning provider
    pub provider: ProviderKind,

    /// Free-form tier label
    pub tier: &'static str,

    /// Context window size in tokens (informational only)
    pub context_window: u32,
}

/// A translation domain offered for specialized prompts
#[derive(Debug, Serialize, Clone)]
pub struct TranslationDomain {
    /// Domain identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

/// A supported source/target language pairing
#[derive(Debug, Serialize, Clone)]
pub struct LanguagePair {
    /// Pair identifier, e.g. "en-fr"
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

/// All models known to the service, grouped by provider order:
/// Claude first, then OpenAI, then Gemini.
pub static MODEL_CATALOG: Lazy<Vec<ModelDescriptor>> = Lazy::new(|| {
    vec![
        // Claude models
        ModelDescriptor { id: "claude-3-5-sonnet", name: "Claude 3.5 Sonnet", provider: ProviderKind::Anthropic, tier: "premium", context_window: 200_000 },
        ModelDescriptor { id: "claude-3-opus", name: "Claude 3 Opus", provider: ProviderKind::Anthropic, tier: "professional", context_window: 180_000 },
        ModelDescriptor { id: "claude-3-sonnet", name: "Claude 3 Sonnet", provider: ProviderKind::Anthropic, tier: "standard", context_window: 180_000 },
        ModelDescriptor { id: "claude-3-haiku", name: "Claude 3 Haiku", provider: ProviderKind::Anthropic, tier: "basic", context_window: 180_000 },
        // OpenAI models
        ModelDescriptor { id: "gpt-4-turbo", name: "GPT-4 Turbo", provider: ProviderKind::OpenAI, tier: "premium", context_window: 128_000 },
        ModelDescriptor { id: "gpt-4", name: "GPT-4", provider: ProviderKind::OpenAI, tier: "professional", context_window: 8_192 },
        ModelDescriptor { id: "gpt-3.5-turbo", name: "GPT-3.5 Turbo", provider: ProviderKind::OpenAI, tier: "standard", context_window: 16_385 },
        // Gemini models
        ModelDescriptor { id: "gemini-2.0-pro", name: "Gemini 2.0 Pro", provider: ProviderKind::Google, tier: "premium+", context_window: 10_240 },
        ModelDescriptor { id: "gemini-2.0-flash", name: "Gemini 2.0 Flash", provider: ProviderKind::Google, tier: "premium", context_window: 10_240 },
        ModelDescriptor { id: "gemini-2.0-flash-lite", name: "Gemini 2.0 Flash Lite", provider: ProviderKind::Google, tier: "fast", context_window: 10_240 },
        ModelDescriptor { id: "gemini-1.5-pro-latest", name: "Gemini 1.5 Pro (Latest)", provider: ProviderKind::Google, tier: "advanced", context_window: 8_192 },
        ModelDescriptor { id: "gemini-1.5-flash-latest", name: "Gemini 1.5 Flash (Latest)", provider: ProviderKind::Google, tier: "standard", context_window: 8_192 },
        ModelDescriptor { id: "gemini-1.5-pro-001", name: "Gemini 1.5 Pro", provider: ProviderKind::Google, tier: "advanced", context_window: 8_192 },
        ModelDescriptor { id: "gemini-1.5-flash-001", name: "Gemini 1.5 Flash", provider: ProviderKind::Google, tier: "standard", context_window: 8_192 },
    ]
});

/// Translation domains offered for specialized prompt phrasing.
pub static TRANSLATION_DOMAINS: Lazy<Vec<TranslationDomain>> = Lazy::new(|| {
    vec![
        TranslationDomain { id: "general", name: "General" },
        TranslationDomain { id: "legal", name: "Legal" },
        TranslationDomain { id: "medical", name: "Medical" },
        TranslationDomain { id: "technical", name: "Technical" },
        TranslationDomain { id: "marketing", name: "Marketing" },
        TranslationDomain { id: "academic", name: "Academic" },
        TranslationDomain { id: "financial", name: "Financial" },
    ]
});

/// Language pairs offered by the client shell.
pub static LANGUAGE_PAIRS: Lazy<Vec<LanguagePair>> = Lazy::new(|| {
    vec![
        LanguagePair { id: "en-fr", name: "English → French" },
        LanguagePair { id: "en-fr-ca", name: "English → French Canadian" },
        LanguagePair { id: "en-es", name: "English → Spanish" },
        LanguagePair { id: "en-de", name: "English → German" },
        LanguagePair { id: "en-it", name: "English → Italian" },
        LanguagePair { id: "en-pt", name: "English → Portuguese" },
        LanguagePair { id: "en-ja", name: "English → Japanese" },
        LanguagePair { id: "en-zh", name: "English → Chinese" },
        LanguagePair { id: "fr-en", name: "French → English" },
        LanguagePair { id: "es-en", name: "Spanish → English" },
        LanguagePair { id: "de-en", name: "German → English" },
        LanguagePair { id: "it-en", name: "Italian → English" },
        LanguagePair { id: "pt-en", name: "Portuguese → English" },
        LanguagePair { id: "ja-en", name: "Japanese → English" },
        LanguagePair { id: "zh-en", name: "Chinese → English" },
    ]
});

/// Get all catalog entries.
pub fn all_models() -> &'static [ModelDescriptor] {
    &MODEL_CATALOG
}

/// Get catalog entries for one provider.
pub fn models_for_provider(provider: ProviderKind) -> Vec<&'static ModelDescriptor> {
    MODEL_CATALOG.iter().filter(|m| m.provider == provider).collect()
}

/// Look up a catalog entry by model id.
pub fn find_model(model_id: &str) -> Option<&'static ModelDescriptor> {
    MODEL_CATALOG.iter().find(|m| m.id == model_id)
}

/// Format a model id for API calls.
///
/// Anthropic and OpenAI ids are used as-is. Gemini ids follow the naming
/// conventions of the Google API:
/// - ids carrying a `latest` tag are sent without the `-latest` suffix
/// - Gemini 2.0 ids are sent without the `gemini-` prefix
/// - everything else is sent unchanged
pub fn format_model_name(model_id: &str, provider: ProviderKind) -> String {
    if provider != ProviderKind::Google {
        return model_id.to_string();
    }

    if model_id.contains("latest") {
        model_id.replace("-latest", "")
    } else if model_id.contains("-2.0-") {
        model_id.replace("gemini-", "")
    } else {
        model_id.to_string()
    }
}
