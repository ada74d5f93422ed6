//! Global configuration loader for glyphid.
//!
//! Reads `config.toml` from the data directory (`~/.glyphid/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use glyphid_types::config::GlobalConfig;
use glyphid_types::error::{ConfigError, IdenticonError};
use glyphid_types::grid::GridSize;

/// File name of the global config inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path of the global config for a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but cannot be read or parsed (including an invalid
///   `default_grid_size`), logs a warning and returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let path = config_path(data_dir);
    match try_load_global_config(data_dir).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            GlobalConfig::default()
        }
        Err(err) => {
            tracing::warn!("{}: {err}, using defaults", path.display());
            GlobalConfig::default()
        }
    }
}

/// Strict variant of [`load_global_config`].
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn try_load_global_config(
    data_dir: &Path,
) -> Result<Option<GlobalConfig>, ConfigError> {
    let path = config_path(data_dir);
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::Read(err.to_string())),
    };

    toml::from_str::<GlobalConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

/// Resolve the grid size for a command.
///
/// Priority:
/// 1. Command-line override (validated, never coerced)
/// 2. `default_grid_size` from `config.toml`
pub fn resolve_grid_size(
    global_config: &GlobalConfig,
    cli_override: Option<usize>,
) -> Result<GridSize, IdenticonError> {
    match cli_override {
        Some(size) => GridSize::new(size),
        None => Ok(global_config.default_grid_size),
    }
}
