//! HTTP/REST API layer for seoscribe.
//!
//! Axum-based REST API at `/api/v1/` with an envelope response format and
//! permissive CORS.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
