use thiserror::Error;

use crate::llm::CompletionError;

/// Errors from a content-generation submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Rejected before dispatch; the completion endpoint was never called.
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Errors resolving the API credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("{0} is not set (add it to the environment or a .env file)")]
    Missing(String),

    #[error("{0} is set but empty")]
    Empty(String),
}

/// Errors loading an explicitly requested configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
