//! CompletionClient trait definition.
//!
//! This is the capability the workflow consumes: send a text prompt,
//! get raw model output back, or a typed error on transport/auth/quota
//! failure. Implementations live in outreach-infra (e.g., `GeminiClient`);
//! tests substitute a deterministic stub with no network access.

use outreach_types::llm::{CompletionError, CompletionRequest, CompletionResponse};

/// Trait for LLM completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Dynamic
/// dispatch goes through [`crate::llm::BoxCompletionClient`].
pub trait CompletionClient: Send + Sync {
    /// Human-readable backend name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}
