use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Value {value} exceeds maximum {max}")]
    ExceedsMaximum { value: u64, max: u64 },
}

impl IoError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}

pub type IoResult<T> = Result<T, IoError>;
