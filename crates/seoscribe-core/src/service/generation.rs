//! Content-generation service.
//!
//! Wires the prompt builder, a [`CompletionClient`] and the stats/file-name
//! helpers into the two user actions: "generate content" and "test the API".
//!
//! This service lives in `seoscribe-core` and depends only on
//! `seoscribe-types` and the `CompletionClient` trait -- never on the
//! concrete HTTP client.

use chrono::Utc;

use seoscribe_types::content::{GeneratedContent, GenerationRequest};
use seoscribe_types::error::GenerationError;
use seoscribe_types::llm::CompletionError;

use crate::llm::client::CompletionClient;
use crate::output::content_file_name;
use crate::prompt::{PromptBuilder, TEST_PROMPT};
use crate::stats::content_stats;

/// Service running content generation against one completion client.
///
/// Holds no mutable state; every call is independent.
pub struct GenerationService<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> GenerationService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generate content for a request.
    ///
    /// An empty (or whitespace-only) topic fails with
    /// [`GenerationError::EmptyTopic`] before the client is touched. A topic
    /// that passes is used verbatim in the prompt.
    /// Otherwise the client is called exactly once and its failure, if any,
    /// is returned unchanged.
    #[tracing::instrument(
        name = "generate_content",
        skip(self, request),
        fields(
            platform = %request.platform,
            language = %request.language,
            client = %self.client.name(),
            model = %self.client.model(),
        )
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        if !request.has_topic() {
            tracing::debug!("rejecting request with empty topic");
            return Err(GenerationError::EmptyTopic);
        }

        let prompt = PromptBuilder::build(request);
        tracing::debug!(prompt_chars = prompt.chars().count(), "prompt built");

        let text = self
            .client
            .complete(&prompt)
            .await
            .inspect_err(|e| tracing::warn!(kind = %e.kind(), "content generation failed: {e}"))?;

        let stats = content_stats(&text);
        tracing::info!(
            words = stats.words,
            characters = stats.characters,
            lines = stats.lines,
            "content generated"
        );

        Ok(GeneratedContent {
            file_name: content_file_name(&request.topic),
            topic: request.topic.clone(),
            text,
            stats,
            model: self.client.model().to_string(),
            generated_at: Utc::now(),
        })
    }

    /// Send the fixed connectivity prompt and return the reply.
    #[tracing::instrument(
        name = "test_connection",
        skip(self),
        fields(client = %self.client.name(), model = %self.client.model())
    )]
    pub async fn test_connection(&self) -> Result<String, CompletionError> {
        let reply = self.client.complete(TEST_PROMPT).await?;
        tracing::info!("connectivity check succeeded");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use seoscribe_types::content::Platform;

    // --- Mock client ---

    struct MockClient {
        result: Result<String, CompletionError>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl MockClient {
        fn ok(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(error: CompletionError) -> Self {
            Self {
                result: Err(error),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    impl CompletionClient for MockClient {
        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }

        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_empty_topic_is_never_dispatched() {
        let service = GenerationService::new(MockClient::ok("unused"));

        for topic in ["", "   ", "\n\t"] {
            let err = service.generate(&GenerationRequest::new(topic)).await.unwrap_err();
            assert_eq!(err, GenerationError::EmptyTopic);
        }
        assert_eq!(service.client().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_success() {
        let service = GenerationService::new(MockClient::ok("one two three\nfour five"));
        let request = GenerationRequest {
            platform: Platform::Blog,
            ..GenerationRequest::new("mental health")
        };

        let content = service.generate(&request).await.unwrap();

        assert_eq!(content.topic, "mental health");
        assert_eq!(content.text, "one two three\nfour five");
        assert_eq!(content.stats.words, 5);
        assert_eq!(content.stats.lines, 2);
        assert_eq!(content.file_name, "content_mental_health.txt");
        assert_eq!(content.model, "mock-model");
        assert_eq!(service.client().calls.load(Ordering::SeqCst), 1);

        let prompt = service.client().last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("'mental health'"));
        assert!(prompt.contains("- Platform: Blog"));
    }

    #[tokio::test]
    async fn test_padded_topic_reaches_prompt_verbatim() {
        let service = GenerationService::new(MockClient::ok("text"));

        let content = service
            .generate(&GenerationRequest::new("  mental health "))
            .await
            .unwrap();

        let prompt = service.client().last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("'  mental health '"));
        assert_eq!(content.topic, "  mental health ");
        assert_eq!(content.file_name, "content_mental_health.txt");
    }

    #[tokio::test]
    async fn test_client_error_propagates_unchanged() {
        let error = CompletionError::Http {
            status: 429,
            body: "slow down".to_string(),
        };
        let service = GenerationService::new(MockClient::failing(error.clone()));

        let err = service.generate(&GenerationRequest::new("x")).await.unwrap_err();

        assert_eq!(err, GenerationError::Completion(error));
        assert_eq!(service.client().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_connection_uses_fixed_prompt() {
        let service = GenerationService::new(MockClient::ok("OK"));

        let reply = service.test_connection().await.unwrap();

        assert_eq!(reply, "OK");
        assert_eq!(
            service.client().last_prompt.lock().unwrap().as_deref(),
            Some(TEST_PROMPT)
        );
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let service = GenerationService::new(MockClient::failing(CompletionError::Timeout));
        assert_eq!(service.test_connection().await.unwrap_err(), CompletionError::Timeout);
    }
}
