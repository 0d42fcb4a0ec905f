/*!
 * Translation orchestrator: the strictly sequential request pipeline.
 *
 * Steps run in a fixed order with no branching back:
 * validate -> translate -> post-edit (optional) -> assemble. Any failure
 * aborts the remaining steps; no partial result is ever returned and
 * nothing is retried. The post-edit call consumes the first pass's output,
 * so the two provider calls are never issued concurrently.
 */

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::ProviderKind;
use crate::errors::TranslationError;
use crate::pricing::estimate_cost;
use crate::providers::is_plausible_api_key;
use crate::translation::dispatch::TranslationBackend;
use crate::translation::prompts::{build_system_prompt, format_glossary};
use crate::translation::tokens::estimate_token_count;

fn default_domain() -> String {
    "general".to_string()
}

/// A translation request as received on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Text to translate
    #[serde(default)]
    pub text: String,

    /// Source language tag (opaque at this layer)
    #[serde(default)]
    pub source_lang: String,

    /// Target language tag (opaque at this layer)
    #[serde(default)]
    pub target_lang: String,

    /// Domain label used for prompt phrasing
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Model id for the translation pass
    #[serde(default)]
    pub model: String,

    /// Whether to run a post-editing pass
    #[serde(default)]
    pub use_post_editing: bool,

    /// Model id for the post-editing pass
    #[serde(default)]
    pub post_edit_model: Option<String>,

    /// Term -> preferred translation mapping
    #[serde(default)]
    pub glossary: BTreeMap<String, String>,

    /// Provider tag -> credential mapping, injected per request
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
}

/// Estimated token usage for a completed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCount {
    /// Estimated input tokens for the translation pass
    pub input: usize,

    /// Estimated output tokens for the translation pass
    pub output: usize,

    /// Estimated input tokens for the post-editing pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_edit_input: Option<usize>,

    /// Estimated output tokens for the post-editing pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_edit_output: Option<usize>,
}

/// The assembled result of a translation request.
///
/// Constructed once per request; immutable after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    /// Output of the translation pass
    pub translated_text: String,

    /// Provider that served the translation pass
    pub provider: ProviderKind,

    /// Model that served the translation pass
    pub model: String,

    /// Estimated token usage
    pub token_count: TokenCount,

    /// Output of the post-editing pass, when one ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_edited_text: Option<String>,

    /// Provider that served the post-editing pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_edit_provider: Option<ProviderKind>,

    /// Model that served the post-editing pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_edit_model: Option<String>,

    /// Estimated dollar cost of all passes (4 decimal places)
    pub estimated_cost: f64,
}

/// Resolved credentials for a validated request.
struct ValidatedRequest<'a> {
    provider: ProviderKind,
    api_key: &'a str,
    post_edit: Option<PostEditPlan<'a>>,
}

/// Post-editing pass resolved during validation.
struct PostEditPlan<'a> {
    model: &'a str,
    provider: ProviderKind,
    api_key: &'a str,
}

/// Runs translation requests against an injected backend.
pub struct Orchestrator {
    backend: Arc<dyn TranslationBackend>,
}

impl Orchestrator {
    /// Create an orchestrator over the given backend.
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// Run a request through the full pipeline.
    pub async fn run(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationOutcome, TranslationError> {
        let validated = Self::validate(request)?;

        // Prompts and glossary text are built once and shared by both passes.
        let glossary_text = format_glossary(&request.glossary);
        let system_prompt = build_system_prompt(
            &request.domain,
            &request.source_lang,
            &request.target_lang,
            false,
        );

        info!(
            "Translating {} -> {} with {} ({})",
            request.source_lang, request.target_lang, request.model, validated.provider
        );

        let translated_text = self
            .backend
            .translate(
                validated.provider,
                &request.model,
                validated.api_key,
                &request.text,
                &system_prompt,
                &glossary_text,
            )
            .await?;

        let mut token_count = TokenCount {
            input: estimate_token_count(&request.text),
            output: estimate_token_count(&translated_text),
            post_edit_input: None,
            post_edit_output: None,
        };

        let mut post_edited_text = None;
        let mut post_edit_provider = None;
        let mut post_edit_model = None;

        if let Some(plan) = &validated.post_edit {
            let post_edit_prompt = build_system_prompt(
                &request.domain,
                &request.source_lang,
                &request.target_lang,
                true,
            );

            info!("Post-editing with {} ({})", plan.model, plan.provider);

            // The post-edit pass revises the first pass's output.
            let improved = self
                .backend
                .translate(
                    plan.provider,
                    plan.model,
                    plan.api_key,
                    &translated_text,
                    &post_edit_prompt,
                    &glossary_text,
                )
                .await?;

            token_count.post_edit_input = Some(estimate_token_count(&translated_text));
            token_count.post_edit_output = Some(estimate_token_count(&improved));
            post_edited_text = Some(improved);
            post_edit_provider = Some(plan.provider);
            post_edit_model = Some(plan.model.to_string());
        }

        let estimated_cost = estimate_cost(
            &request.model,
            token_count.input,
            token_count.output,
            post_edit_model.as_deref().map(|m| {
                (
                    m,
                    token_count.post_edit_input.unwrap_or(0),
                    token_count.post_edit_output.unwrap_or(0),
                )
            }),
        );

        Ok(TranslationOutcome {
            translated_text,
            provider: validated.provider,
            model: request.model.clone(),
            token_count,
            post_edited_text,
            post_edit_provider,
            post_edit_model,
            estimated_cost,
        })
    }

    /// Validate a request before any network call is made.
    ///
    /// Post-editing credentials are checked here too: a request that would
    /// fail on its second pass must not burn a first provider call.
    fn validate(request: &TranslationRequest) -> Result<ValidatedRequest<'_>, TranslationError> {
        if request.text.trim().is_empty() {
            return Err(TranslationError::MissingField("text"));
        }
        if request.source_lang.trim().is_empty() {
            return Err(TranslationError::MissingField("sourceLang"));
        }
        if request.target_lang.trim().is_empty() {
            return Err(TranslationError::MissingField("targetLang"));
        }
        if request.model.trim().is_empty() {
            return Err(TranslationError::MissingField("model"));
        }

        let provider = ProviderKind::from_model_id(&request.model);
        if provider == ProviderKind::Unknown {
            return Err(TranslationError::UnsupportedProvider(request.model.clone()));
        }

        let api_key = Self::credential_for(request, provider)?;

        let post_edit = if request.use_post_editing {
            let model = request
                .post_edit_model
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .ok_or(TranslationError::MissingField("postEditModel"))?;

            let pe_provider = ProviderKind::from_model_id(model);
            if pe_provider == ProviderKind::Unknown {
                return Err(TranslationError::UnsupportedProvider(model.to_string()));
            }

            Some(PostEditPlan {
                model,
                provider: pe_provider,
                api_key: Self::credential_for(request, pe_provider)?,
            })
        } else {
            None
        };

        Ok(ValidatedRequest {
            provider,
            api_key,
            post_edit,
        })
    }

    /// Look up the credential for a provider in the request's key map.
    fn credential_for(
        request: &TranslationRequest,
        provider: ProviderKind,
    ) -> Result<&str, TranslationError> {
        let key = request
            .api_keys
            .get(&provider.to_lowercase_string())
            .map(String::as_str)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| TranslationError::MissingApiKey(provider.to_string()))?;

        if !is_plausible_api_key(provider, key) {
            debug!("API key for {} does not match the expected shape", provider);
        }

        Ok(key)
    }
}
