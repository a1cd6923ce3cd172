mod config;
pub mod store;

pub use config::{Config, SosConfig, SOS_WEBHOOK_ENV};
pub use store::{EntryStore, JsonStore, MemoryStore, StoreState};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/moodlog[-dev]/` based on MOODLOG_ENV.
///
/// Set MOODLOG_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MOODLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("moodlog-dev")
    } else {
        base_dir.join("moodlog")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
