mod config;

pub use config::{Config, DisplayConfig, RefreshConfig, SourceConfig, TraceConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the config directory, creating it if needed.
///
/// `STUDENTHUB_CONFIG_DIR` wins when set. Otherwise `~/.config/studenthub/`,
/// or `~/.config/studenthub-dev/` when `STUDENTHUB_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDENTHUB_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDENTHUB_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studenthub-dev")
            } else {
                base_dir.join("studenthub")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::Directory {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
