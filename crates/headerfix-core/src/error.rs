// Rust guideline compliant 2026-02-06

//! Error types for the headerfix core library.

use thiserror::Error;

/// Result type alias for headerfix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for headerfix operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid UTF-8 text.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
