//! Error types for key handling, hashing and address encoding.

use neo_sdk_io::IoError;
use neo_sdk_primitives::PrimitiveError;
use neo_sdk_vm::VmError;
use thiserror::Error;

/// Errors raised by cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Checksum mismatch: {0}")]
    ChecksumMismatch(String),

    /// The operation is not available in the current state, e.g. signing
    /// with a watch-only key pair.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A cryptographic check failed.
    #[error("Security error: {0}")]
    Security(String),
}

impl CryptoError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::Security(message.into())
    }
}

impl From<VmError> for CryptoError {
    fn from(error: VmError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

impl From<IoError> for CryptoError {
    fn from(error: IoError) -> Self {
        Self::InvalidFormat(error.to_string())
    }
}

impl From<PrimitiveError> for CryptoError {
    fn from(error: PrimitiveError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;
