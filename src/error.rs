use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
