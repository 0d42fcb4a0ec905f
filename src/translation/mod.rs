/*!
 * Translation core: prompt construction, token estimation, provider
 * dispatch, and the request orchestrator.
 */

pub mod dispatch;
pub mod orchestrator;
pub mod prompts;
pub mod tokens;

pub use dispatch::{ProviderBackend, TranslationBackend};
pub use orchestrator::{Orchestrator, TokenCount, TranslationOutcome, TranslationRequest};
