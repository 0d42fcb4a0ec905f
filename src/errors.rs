/*!
 * Error types for the babelgate service.
 *
 * This module contains custom error types for different parts of the service,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

use crate::catalog::ProviderKind;

/// Errors that can occur when talking to a provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while serving a translation request
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A required request field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No credential was supplied for a provider the request needs
    #[error("API key for {0} is missing")]
    MissingApiKey(String),

    /// The model id does not resolve to a known provider
    #[error("Unsupported provider for model: {0}")]
    UnsupportedProvider(String),

    /// A provider call failed; details are logged, not propagated
    #[error("Failed to translate with {0}")]
    Provider(ProviderKind),
}

impl TranslationError {
    /// Whether this error is the client's fault (a validation failure)
    /// rather than a downstream provider failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Provider(_))
    }
}

/// Errors that can occur while exporting a document
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The request carried no HTML to convert
    #[error("Missing required field: html")]
    MissingHtml,

    /// Packaging the document archive failed
    #[error("Failed to package document: {0}")]
    Packaging(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a configuration file operation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation handling
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from document export
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
