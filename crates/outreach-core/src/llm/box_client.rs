//! BoxCompletionClient -- object-safe dynamic dispatch wrapper for CompletionClient.
//!
//! Follows the blanket-impl pattern:
//! 1. Define an object-safe `CompletionClientDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionClientDyn` for all `T: CompletionClient`
//! 3. `BoxCompletionClient` wraps `Box<dyn CompletionClientDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use outreach_types::llm::{CompletionError, CompletionRequest, CompletionResponse};

use super::client::CompletionClient;

/// Object-safe version of [`CompletionClient`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn CompletionClientDyn`).
/// A blanket implementation is provided for all types implementing `CompletionClient`.
pub trait CompletionClientDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionResponse, CompletionError>> + Send + 'a>>;
}

/// Blanket implementation: any `CompletionClient` automatically implements
/// `CompletionClientDyn`.
impl<T: CompletionClient> CompletionClientDyn for T {
    fn name(&self) -> &str {
        CompletionClient::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionResponse, CompletionError>> + Send + 'a>>
    {
        Box::pin(self.complete(request))
    }
}

/// Type-erased completion client for runtime backend selection.
///
/// Wraps any `CompletionClient` implementation behind dynamic dispatch so
/// application state can hold the production Gemini backend or a
/// deterministic test stub interchangeably.
pub struct BoxCompletionClient {
    inner: Box<dyn CompletionClientDyn>,
}

impl BoxCompletionClient {
    /// Wrap a concrete client in the type-erased container.
    pub fn new<T: CompletionClient + 'static>(client: T) -> Self {
        Self {
            inner: Box::new(client),
        }
    }

    /// Backend name of the wrapped client.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send a completion request to the wrapped client.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.inner.complete_boxed(request).await
    }
}
