//! OpenAI-compatible chat-completion client.
//!
//! Sends one `POST {base_url}/chat/completions` per call with bearer
//! authentication and classifies the outcome into a [`CompletionError`]:
//!
//! - request did not finish within the timeout -> `Timeout`
//! - DNS/TLS/connect/reset failures -> `Connection`
//! - non-2xx status -> `Http { status, body }`
//! - 2xx with an envelope that has no first-choice text -> `Unexpected`
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use seoscribe_core::llm::client::CompletionClient;
use seoscribe_core::prompt::SYSTEM_PROMPT;
use seoscribe_observe::genai_attrs::{
    GEN_AI_RESPONSE_FINISH_REASONS, GEN_AI_RESPONSE_MODEL, OP_CHAT, PROVIDER_OPENAI,
};
use seoscribe_types::config::CompletionSettings;
use seoscribe_types::llm::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionError,
};

/// Chat-completion client for OpenAI and API-compatible endpoints.
///
/// # API Key Security
///
/// Does NOT derive Debug. The key lives in a [`SecretString`] and is only
/// exposed while building the `Authorization` header.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: SecretString,
    settings: CompletionSettings,
}

impl OpenAiChatClient {
    /// Create a client for `settings`, applying its timeout to every request.
    pub fn new(api_key: SecretString, settings: CompletionSettings) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| CompletionError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }

    fn to_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }
}

/// Classify a transport-level reqwest failure.
fn classify_transport_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        CompletionError::Timeout
    } else if err.is_connect() || err.is_request() || err.is_body() {
        CompletionError::Connection(error_chain(&err))
    } else {
        CompletionError::Unexpected(error_chain(&err))
    }
}

/// Render an error with its sources; reqwest's top-level message alone
/// rarely names the DNS or TLS cause.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl CompletionClient for OpenAiChatClient {
    fn name(&self) -> &str {
        PROVIDER_OPENAI
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    #[tracing::instrument(
        name = "chat_completion",
        skip(self, prompt),
        fields(
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = PROVIDER_OPENAI,
            gen_ai.request.model = %self.settings.model,
            gen_ai.request.temperature = self.settings.temperature,
            gen_ai.request.max_tokens = self.settings.max_tokens,
            gen_ai.response.model = tracing::field::Empty,
            gen_ai.response.finish_reasons = tracing::field::Empty,
        )
    )]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = self.to_request(prompt);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(classify_transport_error)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "completion endpoint returned an error status");
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::Unexpected(format!("failed to parse response: {e}")))?;

        let span = tracing::Span::current();
        if let Some(model) = envelope.model.as_deref() {
            span.record(GEN_AI_RESPONSE_MODEL, model);
        }
        if let Some(reason) = envelope.choices.first().and_then(|c| c.finish_reason.as_deref()) {
            span.record(GEN_AI_RESPONSE_FINISH_REASONS, reason);
        }

        envelope
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| {
                CompletionError::Unexpected(
                    "response has no message content in choices[0]".to_string(),
                )
            })
    }
}
