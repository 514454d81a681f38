//! Connectivity check endpoint.
//!
//! POST /api/v1/test - Send the fixed test prompt and return the reply.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::http::error::{AppError, RequestError};
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TestReply {
    pub reply: String,
    pub model: String,
}

/// POST /api/v1/test
pub async fn test_connection(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TestReply>>, RequestError> {
    let ctx = RequestContext::start();

    let reply = state
        .generation_service
        .test_connection()
        .await
        .map_err(|e| AppError::from(e).in_request(&ctx))?;

    let data = TestReply {
        reply,
        model: state.config.completion.model.clone(),
    };

    Ok(Json(
        ApiResponse::success(data, ctx.request_id.clone(), ctx.elapsed_ms())
            .with_link("self", "/api/v1/test"),
    ))
}
