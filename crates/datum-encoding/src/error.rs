//! Error types for the string codecs.

use datum_core::CoreError;
use thiserror::Error;

/// Errors raised by strict decoders and encoded-numeral arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A character outside the alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Numeral text must have at least one digit.
    #[error("empty input")]
    Empty,

    /// Byte-aligned hex must have an even number of characters.
    #[error("odd-length hex input: {0} characters")]
    OddLength(usize),

    /// Text decodes, but is not the unique spelling of its value.
    #[error("non-canonical encoding: {0}")]
    NonCanonical(String),

    /// Arithmetic on the decoded value failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
