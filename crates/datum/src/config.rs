//! Text rendering configuration.

use datum_crypto::Digest;
use datum_encoding::hex::{self, ByteOrder, LetterCase};
use serde::{Deserialize, Serialize};

/// How bytes, machine integers and digests are rendered as hex.
///
/// `byte_order` is the order in which the *value* is written. Digests
/// store their least significant byte first, so `Big` prints them reversed
/// and `Little` prints them in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Case of the digits `a-f`.
    pub letter_case: LetterCase,
    /// Order in which bytes are written.
    pub byte_order: ByteOrder,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            letter_case: LetterCase::Lower,
            byte_order: ByteOrder::Big,
        }
    }
}

impl CodecConfig {
    pub fn encode_hex(&self, bytes: &[u8]) -> String {
        hex::encode_ordered(bytes, self.byte_order, self.letter_case)
    }

    /// Sixteen characters, zero-padded.
    pub fn encode_u64(&self, x: u64) -> String {
        hex::write_u64(x, self.byte_order, self.letter_case)
    }

    pub fn render_digest<const S: usize>(&self, digest: &Digest<S>) -> String {
        let order = match self.byte_order {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        };
        hex::encode_ordered(digest.as_bytes(), order, self.letter_case)
    }
}
