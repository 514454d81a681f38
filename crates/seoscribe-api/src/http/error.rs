//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use seoscribe_types::error::GenerationError;
use seoscribe_types::llm::CompletionError;

use crate::http::response::{ApiResponse, RequestContext};
use crate::notice::FailureNotice;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Generation failed, either before dispatch or at the completion endpoint.
    Generation(GenerationError),
    /// Malformed request body.
    Validation(String),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl From<CompletionError> for AppError {
    fn from(e: CompletionError) -> Self {
        AppError::Generation(GenerationError::Completion(e))
    }
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    /// Upstream failures are gateway errors except 429, which passes through.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) | AppError::Generation(GenerationError::EmptyTopic) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Generation(GenerationError::Completion(e)) => match e {
                CompletionError::Http { status: 401, .. } => {
                    (StatusCode::BAD_GATEWAY, "INVALID_CREDENTIAL")
                }
                CompletionError::Http { status: 429, .. } => {
                    (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED")
                }
                CompletionError::Http { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_HTTP_ERROR"),
                CompletionError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
                CompletionError::Connection(_) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE")
                }
                CompletionError::Unexpected(_) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_UNEXPECTED")
                }
            },
        }
    }

    /// Attach the failing request's id and timing.
    pub fn in_request(self, ctx: &RequestContext) -> RequestError {
        RequestError {
            error: self,
            request_id: ctx.request_id.clone(),
            response_time_ms: ctx.elapsed_ms(),
        }
    }
}

/// An [`AppError`] bound to the request it ended; this is what handlers
/// return.
#[derive(Debug)]
pub struct RequestError {
    pub error: AppError,
    pub request_id: String,
    pub response_time_ms: u64,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, code) = self.error.status_and_code();

        let (message, details) = match &self.error {
            AppError::Validation(msg) => (msg.clone(), None),
            AppError::Generation(err) => {
                let notice = FailureNotice::for_generation(err);
                let details = (!notice.hints.is_empty() || notice.detail.is_some()).then(|| {
                    json!({
                        "kind": match err {
                            GenerationError::EmptyTopic => "empty_topic".to_string(),
                            GenerationError::Completion(e) => e.kind().to_string(),
                        },
                        "hints": notice.hints,
                        "detail": notice.detail,
                    })
                });
                (notice.headline, details)
            }
        };

        if status.is_server_error() {
            tracing::warn!(
                %status,
                code,
                request_id = %self.request_id,
                "request failed: {message}"
            );
        }

        let body = ApiResponse::error(
            code,
            &message,
            details,
            self.request_id,
            self.response_time_ms,
        );
        (status, Json(body)).into_response()
    }
}
