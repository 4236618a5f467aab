//! Error types for domaincrypt

use thiserror::Error;

/// Main error type for cipher and domain list operations
#[derive(Error, Debug)]
pub enum DomainCryptError {
    /// Invalid constructor or function argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed base64, non-UTF-8 plaintext, or unparsable asset data
    #[error("Format error: {0}")]
    Format(String),

    /// Key or IV does not satisfy the cipher's size requirements
    #[error("Crypto configuration error: {0}")]
    CryptoConfiguration(String),

    /// Mutation attempted on a read-only domain list
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Requested asset absent from a bundle
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<base64::DecodeError> for DomainCryptError {
    fn from(err: base64::DecodeError) -> Self {
        DomainCryptError::Format(format!("invalid base64: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for DomainCryptError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DomainCryptError::Format(format!("invalid UTF-8: {}", err))
    }
}

impl From<serde_json::Error> for DomainCryptError {
    fn from(err: serde_json::Error) -> Self {
        DomainCryptError::Format(format!("invalid asset data: {}", err))
    }
}

/// Result type alias for domaincrypt operations
pub type Result<T> = std::result::Result<T, DomainCryptError>;
