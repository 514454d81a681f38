//! Infrastructure for seoscribe: the HTTP completion client, configuration
//! and credential loading, and content persistence.

pub mod config;
pub mod filesystem;
pub mod llm;
pub mod secret;
