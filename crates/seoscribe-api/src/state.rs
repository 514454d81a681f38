//! Application state wiring the generation service to the production client.
//!
//! AppState holds the concrete service used by both CLI and REST API.
//! `GenerationService` is generic over the completion client; AppState pins it
//! to the type-erased [`BoxCompletionClient`] so tests can swap in fakes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use seoscribe_core::llm::box_client::BoxCompletionClient;
use seoscribe_core::service::generation::GenerationService;
use seoscribe_infra::config::{apply_env_overrides, load_config_file, load_global_config};
use seoscribe_infra::filesystem::resolve_data_dir;
use seoscribe_infra::llm::create_client;
use seoscribe_infra::secret::env::resolve_api_key;
use seoscribe_types::config::GlobalConfig;

pub type ConcreteGenerationService = GenerationService<BoxCompletionClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<ConcreteGenerationService>,
    pub config: Arc<GlobalConfig>,
}

impl AppState {
    /// Load configuration, resolve the API key and build the HTTP client.
    ///
    /// Fails when `OPENAI_API_KEY` is missing or blank, or when an explicit
    /// `--config` file cannot be loaded.
    pub async fn init(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = load_config(config_path).await?;
        let api_key = resolve_api_key().context("API key not configured")?;
        let client = create_client(api_key, config.completion.clone())
            .context("failed to create completion client")?;

        tracing::debug!(model = %config.completion.model, "application state initialized");
        Ok(Self::with_client(client, config))
    }

    /// Build state around an already constructed client.
    pub fn with_client(client: BoxCompletionClient, config: GlobalConfig) -> Self {
        Self {
            generation_service: Arc::new(GenerationService::new(client)),
            config: Arc::new(config),
        }
    }

    /// Directory `--save` writes to when `--output-dir` is not given.
    pub fn output_dir(&self) -> PathBuf {
        self.config.output.directory.clone()
    }
}

async fn load_config(config_path: Option<&Path>) -> anyhow::Result<GlobalConfig> {
    let mut config = match config_path {
        Some(path) => load_config_file(path).await?,
        None => load_global_config(&resolve_data_dir()).await,
    };
    apply_env_overrides(&mut config);
    Ok(config)
}
