//! Shared domain types for seoscribe.
//!
//! Generation requests and results, chat-completion wire types, error enums
//! and configuration. No I/O here: only serde, chrono and thiserror.

pub mod config;
pub mod content;
pub mod error;
pub mod llm;
