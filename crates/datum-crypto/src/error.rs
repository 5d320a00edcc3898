//! Error types for digests.

use datum_encoding::EncodingError;
use thiserror::Error;

/// Errors from strict digest constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Input did not have exactly the digest's width.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Digest text was not valid hex.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

/// Result type for digest operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
