//! Error types for the Datum API.

use datum_core::CoreError;
use datum_crypto::CryptoError;
use datum_encoding::EncodingError;
use thiserror::Error;

/// Any failure from the component crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Arithmetic error.
    #[error("arithmetic error: {0}")]
    Core(#[from] CoreError),

    /// Encoding error.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Digest error.
    #[error("digest error: {0}")]
    Crypto(#[from] CryptoError),
}

/// Result type for Datum operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_digit(text: &str) -> Result<datum_encoding::HexNumeral> {
        Ok(datum_encoding::HexNumeral::new(text)?)
    }

    #[test]
    fn test_question_mark_lifts_component_errors() {
        assert_eq!(
            parse_digit(""),
            Err(Error::Encoding(EncodingError::Empty))
        );
        let err: Error = CoreError::DivisionByZero.into();
        assert_eq!(err.to_string(), "arithmetic error: division by zero");
    }
}
