//! Error types for the Rusmark ingest pipeline

use thiserror::Error;

/// Errors surfaced by the ingest layer.
///
/// The parser core is total and never produces these; only configuration
/// loading and filesystem work can fail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations
pub type AppResult<T> = Result<T, AppError>;
