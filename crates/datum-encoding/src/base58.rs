//! Base58: the base62 digits without the look-alikes `0`, `O`, `I`, `l`.
//!
//! Bytes are read as one big-endian natural and written in base 58, so the
//! encoding of `[0x00]` (and of `[]`) is `"1"`. Leading zero bytes carry no
//! value and are not preserved. Decoding returns the minimal big-endian
//! bytes of the value.

use datum_core::Natural;

use crate::error::{EncodingError, Result};
use crate::numeral::{Base, Numeral};
use crate::positional::{self, Alphabet, BASE58};

/// The digit characters, lowest value first.
pub const CHARACTERS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base 58.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58;

impl Base for Base58 {
    const ALPHABET: Alphabet = BASE58;
    const NAME: &'static str = "Base58String";
}

/// A natural spelled in base58; zero is `"1"`.
pub type Base58String = Numeral<Base58>;

/// Encode bytes as a big-endian natural.
pub fn encode(bytes: &[u8]) -> String {
    positional::write(&Natural::from_bytes_be(bytes), &BASE58)
}

pub fn encode_u64(x: u64) -> String {
    positional::write(&Natural::from(x), &BASE58)
}

/// Strictly decode canonical base58 text to minimal big-endian bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let value = positional::read(text, &BASE58)?;
    if !positional::is_canonical(text, &BASE58) {
        return Err(EncodingError::NonCanonical(text.to_string()));
    }
    Ok(value.to_bytes_be())
}

/// Whether `text` is canonical base58.
pub fn is_valid(text: &str) -> bool {
    positional::is_canonical(text, &BASE58)
}

/// A non-failing decode of base58 text.
///
/// Malformed or non-canonical text gives a view with no bytes. A view of
/// `"1"` holds `[0x00]`: bytes are available and their value is zero.
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
                tracing::trace!(error = %e, "base58 view holds no bytes");
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
