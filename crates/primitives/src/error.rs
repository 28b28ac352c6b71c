//! Error types for primitive values.

use thiserror::Error;

/// Errors raised while constructing primitive values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Byte input of the wrong length.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Malformed textual input.
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

/// Result type for primitive operations.
pub type PrimitiveResult<T> = std::result::Result<T, PrimitiveError>;
