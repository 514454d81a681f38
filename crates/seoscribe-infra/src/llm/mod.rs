//! Completion client implementations.

pub mod openai_compat;

use secrecy::SecretString;

use seoscribe_core::llm::box_client::BoxCompletionClient;
use seoscribe_types::config::CompletionSettings;
use seoscribe_types::llm::CompletionError;

use self::openai_compat::OpenAiChatClient;

/// Build the boxed production client for `settings`.
pub fn create_client(
    api_key: SecretString,
    settings: CompletionSettings,
) -> Result<BoxCompletionClient, CompletionError> {
    tracing::debug!(
        base_url = %settings.base_url,
        model = %settings.model,
        timeout_secs = settings.timeout_secs,
        "creating completion client"
    );
    Ok(BoxCompletionClient::new(OpenAiChatClient::new(api_key, settings)?))
}
