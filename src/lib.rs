/*!
 * # babelgate - LLM translation gateway
 *
 * A Rust service that routes user-submitted text to third-party LLM
 * providers for translation, with optional post-editing and document
 * export.
 *
 * ## Features
 *
 * - Dispatch to three LLM providers behind one contract:
 *   - Anthropic Claude (messages API)
 *   - OpenAI (chat completions API)
 *   - Google Gemini (generative language API)
 * - Optional post-editing pass through a second model
 * - Glossary injection for terminology enforcement
 * - Deterministic token and cost estimation
 * - Minimal DOCX export of translated HTML
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `catalog`: Static model catalog and provider resolution
 * - `pricing`: Price table and cost estimation
 * - `providers`: Client implementations for the LLM providers:
 *   - `providers::anthropic`: Anthropic API client
 *   - `providers::openai`: OpenAI API client
 *   - `providers::gemini`: Google Gemini API client
 * - `translation`: The translation core:
 *   - `translation::prompts`: System prompt and glossary construction
 *   - `translation::tokens`: Token estimation heuristics
 *   - `translation::dispatch`: Provider dispatch and normalization
 *   - `translation::orchestrator`: The sequential request pipeline
 * - `server`: HTTP boundary (actix-web routes)
 * - `docx`: Minimal DOCX packaging
 * - `errors`: Custom error types for the service
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod catalog;
pub mod docx;
pub mod errors;
pub mod pricing;
pub mod providers;
pub mod server;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::{ModelDescriptor, ProviderKind};
pub use errors::{AppError, ConversionError, ProviderError, TranslationError};
pub use translation::{Orchestrator, ProviderBackend, TranslationOutcome, TranslationRequest};
