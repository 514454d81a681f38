//! Content generation endpoint.
//!
//! POST /api/v1/generate - Generate content for a `GenerationRequest`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use seoscribe_types::content::{GeneratedContent, GenerationRequest};

use crate::http::error::{AppError, RequestError};
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

/// POST /api/v1/generate - Run one generation.
///
/// Only `topic` is required in the body; every selection falls back to its
/// default. An empty topic is a 400 and never reaches the completion API.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GeneratedContent>>, RequestError> {
    let ctx = RequestContext::start();

    let Json(request) =
        body.map_err(|e| AppError::Validation(e.body_text()).in_request(&ctx))?;

    let content = state
        .generation_service
        .generate(&request)
        .await
        .map_err(|e| AppError::from(e).in_request(&ctx))?;

    let resp = ApiResponse::success(content, ctx.request_id.clone(), ctx.elapsed_ms())
        .with_link("self", "/api/v1/generate");

    Ok(Json(resp))
}
