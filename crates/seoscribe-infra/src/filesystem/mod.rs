//! Filesystem adapters for seoscribe.
//!
//! Resolves the data directory and persists generated content as plain
//! UTF-8 text files.

use std::path::{Path, PathBuf};

use seoscribe_types::content::GeneratedContent;

/// Environment variable that relocates the data directory.
pub const DATA_DIR_ENV: &str = "SEOSCRIBE_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SEOSCRIBE_DATA_DIR` environment variable
/// 2. `~/.seoscribe`
/// 3. `.seoscribe` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".seoscribe");
    }

    PathBuf::from(".seoscribe")
}

/// Write `content.text` to `{dir}/{content.file_name}`.
///
/// Creates `dir` if needed and overwrites an existing file of the same name.
/// Returns the path written.
pub async fn save_content(dir: &Path, content: &GeneratedContent) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&content.file_name);
    tokio::fs::write(&path, content.text.as_bytes()).await?;
    tracing::info!(path = %path.display(), bytes = content.text.len(), "content saved");
    Ok(path)
}
