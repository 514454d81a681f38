//! BoxCompletionClient -- object-safe dynamic dispatch wrapper for CompletionClient.
//!
//! 1. `CompletionClientDyn` is an object-safe mirror with a boxed future
//! 2. Blanket-impl `CompletionClientDyn` for all `T: CompletionClient`
//! 3. `BoxCompletionClient` wraps `Box<dyn CompletionClientDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use seoscribe_types::llm::CompletionError;

use super::client::CompletionClient;

/// Object-safe version of [`CompletionClient`] with a boxed future.
pub trait CompletionClientDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>>;
}

impl<T: CompletionClient> CompletionClientDyn for T {
    fn name(&self) -> &str {
        CompletionClient::name(self)
    }

    fn model(&self) -> &str {
        CompletionClient::model(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>> {
        Box::pin(self.complete(prompt))
    }
}

/// Type-erased completion client.
///
/// Lets the application pick a backend at runtime (the HTTP client in
/// production, an in-memory fake in tests) without making every consumer
/// generic.
pub struct BoxCompletionClient {
    inner: Box<dyn CompletionClientDyn>,
}

impl BoxCompletionClient {
    pub fn new<T: CompletionClient + 'static>(client: T) -> Self {
        Self {
            inner: Box::new(client),
        }
    }
}

impl CompletionClient for BoxCompletionClient {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.inner.complete_boxed(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl CompletionClient for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            Ok(prompt.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_box_delegates() {
        let boxed = BoxCompletionClient::new(Echo);
        assert_eq!(CompletionClient::name(&boxed), "echo");
        assert_eq!(CompletionClient::model(&boxed), "echo-1");
        assert_eq!(boxed.complete("hi").await.unwrap(), "HI");
    }
}
