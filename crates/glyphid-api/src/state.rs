//! Application state wiring the identicon service and configuration.
//!
//! AppState pins the generic `IdenticonService` to the SHA-256 hasher.

use std::path::PathBuf;
use std::sync::Arc;

use glyphid_core::service::identicon::IdenticonService;
use glyphid_infra::Sha256IdenticonService;
use glyphid_infra::config::load_global_config;
use glyphid_infra::crypto::hash::Sha256NameHasher;
use glyphid_infra::filesystem::resolve_data_dir;
use glyphid_types::config::GlobalConfig;

/// Shared state for CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub identicon_service: Arc<Sha256IdenticonService>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load `config.toml`, wire the service.
    ///
    /// The data directory is not created; a missing config means defaults.
    pub async fn init() -> Self {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        tracing::debug!(
            data_dir = %data_dir.display(),
            default_grid_size = config.default_grid_size.get(),
            "loaded configuration"
        );

        Self {
            identicon_service: Arc::new(IdenticonService::new(Sha256NameHasher::new())),
            config,
            data_dir,
        }
    }
}
