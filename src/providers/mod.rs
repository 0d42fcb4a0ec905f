/*!
 * Provider implementations for the supported LLM services.
 *
 * This module contains client implementations for the three providers the
 * gateway can dispatch to:
 * - Anthropic: Claude messages API
 * - OpenAI: chat completions API
 * - Gemini: Google generative language API
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::catalog::ProviderKind;
use crate::errors::ProviderError;

/// Common trait for all LLM provider clients
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the dispatch layer.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Extract text from the provider response
    fn extract_text(response: &Self::Response) -> String;
}

/// Check whether a credential looks like a real key for the provider.
///
/// Shape check only; used for a diagnostic log line, never to reject a
/// request. The provider remains the authority on key validity.
pub fn is_plausible_api_key(provider: ProviderKind, key: &str) -> bool {
    match provider {
        ProviderKind::Anthropic => key.starts_with("sk-ant-") && key.len() > 20,
        ProviderKind::OpenAI => key.starts_with("sk-") && key.len() > 20,
        // Google API keys carry no standard prefix
        ProviderKind::Google => key.len() > 10,
        ProviderKind::Unknown => false,
    }
}

pub mod anthropic;
pub mod gemini;
pub mod openai;
