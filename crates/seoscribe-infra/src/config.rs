//! Global configuration loader for seoscribe.
//!
//! Reads `config.toml` from the data directory (`~/.seoscribe/` by default)
//! or from an explicit `--config` path, then applies environment overrides.

use std::path::Path;

use seoscribe_types::config::GlobalConfig;
use seoscribe_types::error::ConfigError;

/// Overrides the completion base URL.
pub const BASE_URL_ENV: &str = "SEOSCRIBE_BASE_URL";

/// Overrides the completion model.
pub const MODEL_ENV: &str = "SEOSCRIBE_MODEL";

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Load configuration from a file the user named explicitly.
///
/// Unlike [`load_global_config`], a missing or malformed file is an error:
/// silently ignoring a path the user typed would hide mistakes.
pub async fn load_config_file(path: &Path) -> Result<GlobalConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Apply `SEOSCRIBE_BASE_URL` / `SEOSCRIBE_MODEL` on top of `config`.
pub fn apply_env_overrides(config: &mut GlobalConfig) {
    apply_overrides(
        config,
        std::env::var(BASE_URL_ENV).ok(),
        std::env::var(MODEL_ENV).ok(),
    );
}

fn apply_overrides(config: &mut GlobalConfig, base_url: Option<String>, model: Option<String>) {
    if let Some(base_url) = base_url.filter(|v| !v.trim().is_empty()) {
        tracing::debug!(%base_url, "base URL overridden from environment");
        config.completion.base_url = base_url;
    }
    if let Some(model) = model.filter(|v| !v.trim().is_empty()) {
        tracing::debug!(%model, "model overridden from environment");
        config.completion.model = model;
    }
}
