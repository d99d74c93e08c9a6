//! Error types for Shelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Backing file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backing file exists but is not a valid library
    #[error("Corrupt library file: {0}")]
    Corrupt(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Corrupt(err.to_string())
    }
}
