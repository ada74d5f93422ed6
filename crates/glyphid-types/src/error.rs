use thiserror::Error;

/// Errors related to identicon derivation.
///
/// Every variant is a rejected grid size; sizes are never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdenticonError {
    #[error("invalid grid size {0}: must be a positive odd integer")]
    InvalidGridSize(usize),

    #[error("grid size {size} exceeds maximum {max}")]
    GridSizeTooLarge { size: usize, max: usize },
}

impl IdenticonError {
    /// True for errors caused by a caller passing an unusable grid size.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            IdenticonError::InvalidGridSize(_) | IdenticonError::GridSizeTooLarge { .. }
        )
    }
}

/// Errors from loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
