use neo_sdk_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while importing or exporting private keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Checksum mismatch: {0}")]
    ChecksumMismatch(String),

    /// NEP-2 decryption produced a key whose address does not match.
    #[error("The provided password is incorrect")]
    PasswordIncorrect,

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl WalletError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }
}

pub type WalletResult<T> = std::result::Result<T, WalletError>;
