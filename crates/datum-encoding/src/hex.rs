//! Hexadecimal: byte strings, fixed-width machine integers, and hex
//! numerals.
//!
//! Byte encoding writes two characters per byte with no separators.
//! Decoding accepts either letter case.

use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, Result};
use crate::numeral::{Base, Numeral};
use crate::positional::{Alphabet, HEX_LOWER};

/// Letter case for the digits `a-f`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

/// Byte order of encoded output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

/// Encode bytes in order.
pub fn encode(bytes: &[u8], case: LetterCase) -> String {
    match case {
        LetterCase::Lower => ::hex::encode(bytes),
        LetterCase::Upper => ::hex::encode_upper(bytes),
    }
}

/// Encode bytes, reversing them first when little-endian output is asked
/// for.
pub fn encode_ordered(bytes: &[u8], order: ByteOrder, case: LetterCase) -> String {
    match order {
        ByteOrder::Big => encode(bytes, case),
        ByteOrder::Little => {
            let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
            encode(&reversed, case)
        }
    }
}

/// Two characters, zero-padded.
pub fn write_u8(x: u8, case: LetterCase) -> String {
    encode(&[x], case)
}

/// Four characters, zero-padded.
pub fn write_u16(x: u16, order: ByteOrder, case: LetterCase) -> String {
    encode_ordered(&x.to_be_bytes(), order, case)
}

/// Eight characters, zero-padded.
pub fn write_u32(x: u32, order: ByteOrder, case: LetterCase) -> String {
    encode_ordered(&x.to_be_bytes(), order, case)
}

/// Sixteen characters, zero-padded.
pub fn write_u64(x: u64, order: ByteOrder, case: LetterCase) -> String {
    encode_ordered(&x.to_be_bytes(), order, case)
}

/// Strictly decode an even-length hex string.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    ::hex::decode(text).map_err(|e| match e {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => EncodingError::InvalidCharacter {
            character: c,
            position: index,
        },
        ::hex::FromHexError::OddLength | ::hex::FromHexError::InvalidStringLength => {
            EncodingError::OddLength(text.len())
        }
    })
}

/// Whether `text` decodes to bytes.
pub fn is_valid(text: &str) -> bool {
    text.len() % 2 == 0 && text.chars().all(|c| c.is_ascii_hexdigit())
}

/// A non-failing decode of hex text.
///
/// Holds the original text and, if it was well-formed, the decoded bytes.
/// Malformed text gives a view with no bytes, which is distinct from a view
/// whose bytes happen to be all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    text: &'a str,
    bytes: Option<Vec<u8>>,
}

impl<'a> View<'a> {
    pub fn new(text: &'a str) -> Self {
        let bytes = match decode(text) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::trace!(error = %e, "hex view holds no bytes");
                None
            }
        };
        Self { text, bytes }
    }

    pub fn is_valid(&self) -> bool {
        self.bytes.is_some()
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        self.bytes
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// Base 16 with lowercase canonical digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex;

impl Base for Hex {
    const ALPHABET: Alphabet = HEX_LOWER;
    const NAME: &'static str = "HexNumeral";
}

/// A natural spelled in lowercase hex with no leading zeros; zero is `"0"`.
pub type HexNumeral = Numeral<Hex>;
