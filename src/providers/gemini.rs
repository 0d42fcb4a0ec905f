use std::time::Duration;
use serde::{Serialize, Deserialize};
use async_trait::async_trait;
use reqwest::Client;
use log::error;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Gemini client for the Google generative language API
///
/// Gemini has no separate system role at this API surface; callers fold
/// the system prompt into the single content prompt before dispatch.
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication (sent as a query parameter)
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
}

/// Gemini content generation request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Model name, already normalized for the Google API
    #[serde(skip)]
    model: String,

    /// The content to generate from
    contents: Vec<GeminiContent>,

    /// Generation parameters
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// A content block in a Gemini request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Parts making up the content
    pub parts: Vec<GeminiPart>,

    /// Role of the content producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A single part of a content block
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text payload
    pub text: String,
}

/// Generation parameters
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Gemini content generation response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A single generation candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Generated content
    pub content: GeminiContent,

    /// Why generation stopped
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GeminiRequest {
    /// Create a new generation request with a single text prompt
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt.into() }],
                role: None,
            }],
            generation_config: None,
        }
    }

    /// Cap the number of generated tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config = Some(GenerationConfig { max_output_tokens });
        self
    }

    /// Model name this request targets
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Gemini {
    /// Create a new Gemini client against the public API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, "")
    }

    /// Create a new Gemini client with a custom endpoint
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Issue a single generate call
    pub async fn generate(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        self.complete(request).await
    }

    /// Extract text from a Gemini response
    ///
    /// Joins the text parts of the first candidate, or returns an empty
    /// string when the response carried none.
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl Provider for Gemini {
    type Request = GeminiRequest;
    type Response = GeminiResponse;

    /// Complete a content generation request
    async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com".to_string()
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        };
        let api_url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base,
            request.model(),
            self.api_key
        );

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to send request to Gemini API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let gemini_response = response.json::<GeminiResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Gemini API response: {}", e)))?;

        Ok(gemini_response)
    }

    fn extract_text(response: &Self::Response) -> String {
        Self::extract_text_from_response(response)
    }
}
