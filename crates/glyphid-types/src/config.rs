//! Global configuration types for glyphid.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! default grid size and the sample set used by `glyphid compare`.

use serde::{Deserialize, Serialize};

use crate::grid::GridSize;

/// Workspace names used when no names are given to the comparison command.
///
/// A mix of near-identical names, common branch-style names and default-like
/// names.
pub const DEFAULT_SAMPLE_NAMES: [&str; 12] = [
    "project-alpha",
    "project-beta",
    "project-gamma",
    "project-delta",
    "main",
    "feature/auth",
    "feature/ui",
    "bugfix/crash",
    "untitled",
    "untitled-2",
    "workspace-1",
    "workspace-2",
];

/// Top-level configuration.
///
/// Loaded from `~/.glyphid/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Grid size used when none is given on the command line.
    #[serde(default)]
    pub default_grid_size: GridSize,

    /// Names rendered by `glyphid compare` when called without arguments.
    #[serde(default = "default_sample_names")]
    pub sample_names: Vec<String>,
}

fn default_sample_names() -> Vec<String> {
    DEFAULT_SAMPLE_NAMES.iter().map(|s| s.to_string()).collect()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_grid_size: GridSize::default(),
            sample_names: default_sample_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.default_grid_size.get(), 5);
        assert_eq!(config.sample_names.len(), 12);
        assert_eq!(config.sample_names[0], "project-alpha");
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
default_grid_size = 3
sample_names = ["main", "develop"]
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_grid_size, GridSize::SMALL);
        assert_eq!(config.sample_names, vec!["main", "develop"]);
    }

    #[test]
    fn test_global_config_rejects_even_grid_size() {
        let result = toml::from_str::<GlobalConfig>("default_grid_size = 4");
        assert!(result.is_err());
    }
}
