//! Business logic for seoscribe.
//!
//! Prompt construction, content statistics, output file naming and the
//! generation service. Defines the `CompletionClient` port that the
//! infrastructure layer implements; depends only on `seoscribe-types`.

pub mod llm;
pub mod output;
pub mod prompt;
pub mod service;
pub mod stats;
