//! Error types for script construction and decoding.

use neo_sdk_io::IoError;
use thiserror::Error;

/// Errors raised while building or reading scripts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// A byte that is not a NeoVM opcode.
    #[error("Unknown opcode: {0:#04x}")]
    UnknownOpCode(u8),

    /// A valid opcode that is not allowed at this position.
    #[error("Expected {expected} opcode, found {found:#04x}")]
    InvalidOpCode { expected: &'static str, found: u8 },

    /// A caller-supplied value outside the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation that cannot be encoded.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error(transparent)]
    Io(#[from] IoError),
}

impl VmError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }
}

/// Result type for VM operations.
pub type VmResult<T> = std::result::Result<T, VmError>;
