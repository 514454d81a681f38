//! Environment variable credential source.
//!
//! The completion API key is read once at startup from `OPENAI_API_KEY`.
//! A `.env` file in the working directory (or any parent) is loaded first,
//! without overriding variables that are already set.

use secrecy::SecretString;

use seoscribe_types::error::CredentialError;

/// Environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Load `.env` into the process environment if one exists.
///
/// Returns the path that was loaded, if any.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Some(path)
        }
        Err(err) if err.not_found() => None,
        Err(err) => {
            tracing::warn!("Failed to load .env file: {err}");
            None
        }
    }
}

/// Resolve the API key from `OPENAI_API_KEY`.
///
/// A variable with invalid Unicode is treated as missing.
pub fn resolve_api_key() -> Result<SecretString, CredentialError> {
    api_key_from(API_KEY_ENV, std::env::var(API_KEY_ENV).ok())
}

fn api_key_from(name: &str, value: Option<String>) -> Result<SecretString, CredentialError> {
    match value {
        None => Err(CredentialError::Missing(name.to_string())),
        Some(v) if v.trim().is_empty() => Err(CredentialError::Empty(name.to_string())),
        Some(v) => Ok(SecretString::from(v.trim().to_string())),
    }
}
