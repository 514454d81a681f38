//! Global configuration types for seoscribe.
//!
//! `GlobalConfig` represents the top-level `config.toml`. Every field has a
//! default, so an empty file (or no file at all) yields the stock OpenAI
//! settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub completion: CompletionSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

/// Settings for the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum output tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout_secs() -> u64 {
    60
}

impl CompletionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where saved content files go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.completion.base_url, "https://api.openai.com/v1");
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert!((config.completion.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.completion.max_tokens, 2000);
        assert_eq!(config.completion.timeout(), Duration::from_secs(60));
        assert_eq!(config.output.directory, PathBuf::from("."));
    }

    #[test]
    fn test_global_config_deserialize_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_global_config_deserialize_partial() {
        let toml_str = r#"
[completion]
model = "gpt-4o"
timeout_secs = 10

[output]
directory = "out"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.completion.timeout_secs, 10);
        assert_eq!(config.completion.max_tokens, 2000);
        assert_eq!(config.completion.base_url, "https://api.openai.com/v1");
        assert_eq!(config.output.directory, PathBuf::from("out"));
    }
}
