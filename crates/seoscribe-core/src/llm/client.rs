//! CompletionClient trait definition.
//!
//! The single seam between the generation service and the network. Uses
//! native async fn in traits (RPITIT) so implementations stay zero-cost.

use seoscribe_types::llm::CompletionError;

/// A backend that turns one prompt into one generated text.
///
/// Implementations perform exactly one attempt per call: no retries, no
/// backoff. The system instruction, model and sampling settings belong to
/// the implementation. The HTTP implementation lives in `seoscribe-infra`.
pub trait CompletionClient: Send + Sync {
    /// Human-readable backend name (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier requests are sent with.
    fn model(&self) -> &str;

    /// Send `prompt` as the user message and return the first choice's text.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
