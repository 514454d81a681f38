//! JSON envelope shared by every endpoint except `/health`:
//! ```json
//! {
//!   "data": { ... },
//!   "meta": { "request_id": "...", "timestamp": "...", "response_time_ms": 5 },
//!   "errors": [],
//!   "_links": { "self": "..." }
//! }
//! ```

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;

/// Request id and start time of one API call.
///
/// Created when a handler starts; both the success and the error envelope
/// report the same id and the time elapsed since.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    started: Instant,
}

impl RequestContext {
    pub fn start() -> Self {
        Self {
            request_id: uuid::Uuid::now_v7().to_string(),
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// `data` on success, `errors` on failure, `meta` always.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    pub meta: ApiMeta,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,

    #[serde(rename = "_links", skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Unique request identifier (UUID v7).
    pub request_id: String,
    /// RFC 3339.
    pub timestamp: String,
    pub response_time_ms: u64,
}

/// One entry of `errors`.
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// Stable code such as `VALIDATION_ERROR`.
    pub code: String,
    /// The failure notice headline.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiMeta {
    fn now(request_id: String, response_time_ms: u64) -> Self {
        Self {
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            response_time_ms,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, request_id: String, response_time_ms: u64) -> Self {
        Self {
            data: Some(data),
            meta: ApiMeta::now(request_id, response_time_ms),
            errors: Vec::new(),
            links: HashMap::new(),
        }
    }

    /// Add an entry under `_links`.
    pub fn with_link(mut self, rel: &str, href: &str) -> Self {
        self.links.insert(rel.to_string(), href.to_string());
        self
    }
}

impl ApiResponse<()> {
    /// Single-error envelope.
    pub fn error(
        code: &str,
        message: &str,
        details: Option<serde_json::Value>,
        request_id: String,
        response_time_ms: u64,
    ) -> Self {
        Self {
            data: None,
            meta: ApiMeta::now(request_id, response_time_ms),
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
                details,
            }],
            links: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(serde_json::json!({"reply": "OK"}), "req-1".into(), 7)
            .with_link("self", "/api/v1/test");
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["data"]["reply"], "OK");
        assert_eq!(value["meta"]["request_id"], "req-1");
        assert_eq!(value["meta"]["response_time_ms"], 7);
        assert_eq!(value["_links"]["self"], "/api/v1/test");
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let value =
            serde_json::to_value(ApiResponse::error("X", "boom", None, "req-2".into(), 3)).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["meta"]["request_id"], "req-2");
        assert_eq!(value["meta"]["response_time_ms"], 3);
        assert_eq!(value["errors"][0]["code"], "X");
        assert!(value["errors"][0].get("details").is_none());
    }
}
