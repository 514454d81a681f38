//! Chat-completion wire types and the completion error taxonomy.
//!
//! The request/response structs model the OpenAI chat completions envelope
//! as far as this crate uses it: two messages in, the first choice's message
//! text out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in a chat-completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A single message in a chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// JSON body POSTed to `{base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Success envelope returned by the completion endpoint.
///
/// Fields this crate does not read (`id`, `usage`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the envelope carries one.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }
}

/// Discriminant of a [`CompletionError`], useful for logging and matching
/// without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    Timeout,
    ConnectionError,
    HttpError,
    UnexpectedError,
}

impl fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionErrorKind::Timeout => write!(f, "timeout"),
            CompletionErrorKind::ConnectionError => write!(f, "connection_error"),
            CompletionErrorKind::HttpError => write!(f, "http_error"),
            CompletionErrorKind::UnexpectedError => write!(f, "unexpected_error"),
        }
    }
}

/// Classified failure of a single completion call.
///
/// Every variant is terminal for the call; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl CompletionError {
    pub fn kind(&self) -> CompletionErrorKind {
        match self {
            CompletionError::Timeout => CompletionErrorKind::Timeout,
            CompletionError::Connection(_) => CompletionErrorKind::ConnectionError,
            CompletionError::Http { .. } => CompletionErrorKind::HttpError,
            CompletionError::Unexpected(_) => CompletionErrorKind::UnexpectedError,
        }
    }

    /// HTTP status code, for `Http` failures only.
    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The endpoint rejected the credential (HTTP 401).
    pub fn is_invalid_credential(&self) -> bool {
        self.status() == Some(401)
    }

    /// The endpoint throttled the caller (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 2000,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 2000);
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_first_text() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"Hello"}}]}"#).unwrap();
        assert_eq!(resp.first_text(), Some("Hello"));
    }

    #[test]
    fn test_response_without_choices_fails_to_parse() {
        let result = serde_json::from_str::<ChatCompletionResponse>(r#"{"id":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_empty_choices_has_no_text() {
        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(resp.first_text(), None);
    }

    #[test]
    fn test_error_kind_and_status() {
        let err = CompletionError::Http {
            status: 401,
            body: "nope".to_string(),
        };
        assert_eq!(err.kind(), CompletionErrorKind::HttpError);
        assert!(err.is_invalid_credential());
        assert!(!err.is_rate_limited());
        assert_eq!(err.to_string(), "HTTP 401: nope");

        assert_eq!(CompletionError::Timeout.status(), None);
        assert_eq!(
            CompletionError::Connection("dns".into()).kind(),
            CompletionErrorKind::ConnectionError
        );
    }
}
