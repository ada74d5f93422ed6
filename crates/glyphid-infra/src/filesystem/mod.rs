//! Data directory layout for glyphid.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GLYPHID_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `GLYPHID_DATA_DIR` environment variable
/// 2. `~/.glyphid` in the user's home directory
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var_os(DATA_DIR_ENV), dirs::home_dir())
}

fn data_dir_from(env_override: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_override.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".glyphid");
    }

    // Last resort: current directory
    PathBuf::from(".glyphid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let dir = data_dir_from(
            Some(OsString::from("/tmp/glyphid-data")),
            Some(PathBuf::from("/home/dev")),
        );
        assert_eq!(dir, PathBuf::from("/tmp/glyphid-data"));
    }

    #[test]
    fn test_home_fallback() {
        let dir = data_dir_from(None, Some(PathBuf::from("/home/dev")));
        assert_eq!(dir, PathBuf::from("/home/dev/.glyphid"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let dir = data_dir_from(Some(OsString::new()), Some(PathBuf::from("/home/dev")));
        assert_eq!(dir, PathBuf::from("/home/dev/.glyphid"));
    }

    #[test]
    fn test_current_dir_last_resort() {
        assert_eq!(data_dir_from(None, None), PathBuf::from(".glyphid"));
    }

    #[test]
    fn test_resolve_data_dir_matches_environment() {
        let expected = data_dir_from(std::env::var_os(DATA_DIR_ENV), dirs::home_dir());
        assert_eq!(resolve_data_dir(), expected);
    }
}
