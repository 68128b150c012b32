use thiserror::Error;

/// Failures while loading [`crate::config::GestureConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("failed to parse gesture config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid gesture config: {0}")]
    Invalid(String),
}
