//! Common error types for the Desire-QA viewer

use thiserror::Error;

/// Common result type for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the viewer library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Annotation document parse error (wraps serde_json::Error)
    #[error("Annotation parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
