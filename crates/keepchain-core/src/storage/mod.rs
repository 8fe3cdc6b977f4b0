mod config;
pub mod database;
mod store;

pub use config::{BodyConfig, CalendarConfig, Config, PromisesConfig, StreakConfig};
pub use database::Database;
pub use store::{MemoryStore, SqliteStore, StateStore, STATE_KEY};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/keepchain[-dev]/` based on KEEPCHAIN_ENV.
///
/// Set KEEPCHAIN_ENV=dev to use the development data directory, or
/// KEEPCHAIN_HOME to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("KEEPCHAIN_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("KEEPCHAIN_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("keepchain-dev")
            } else {
                base_dir.join("keepchain")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
