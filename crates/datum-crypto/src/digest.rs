//! Fixed-width digests.
//!
//! A `Digest<S>` stores `S` bytes exactly as a hash function emits them and
//! treats them as a little-endian unsigned integer for ordering. Text
//! rendering is big-endian, so [`Digest::to_hex`] prints the bytes in
//! reverse storage order. [`Digest::to_wire_hex`] prints them in storage
//! order, which is what most hashing tools show.
//!
//! The all-zero digest is the invalid sentinel: constructors that receive
//! the wrong number of bytes produce it, and [`Digest::is_valid`] reports
//! `false` for it and only for it.

use std::cmp::Ordering;
use std::fmt;

use datum_core::Natural;
use datum_encoding::hex::{self, ByteOrder, LetterCase};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CryptoError, Result};

/// `S` bytes of hash output.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest<const S: usize>([u8; S]);

impl<const S: usize> Digest<S> {
    /// Width in bytes.
    pub const SIZE: usize = S;

    /// The all-zero invalid digest.
    pub const fn zero() -> Self {
        Self([0u8; S])
    }

    pub const fn from_array(bytes: [u8; S]) -> Self {
        Self(bytes)
    }

    /// Copy `bytes` into a digest, or return the zero digest if the length
    /// is not `S`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match <[u8; S]>::try_from(bytes) {
            Ok(array) => Self(array),
            Err(_) => {
                tracing::debug!(
                    expected = S,
                    actual = bytes.len(),
                    "digest from wrong number of bytes"
                );
                Self::zero()
            }
        }
    }

    /// Like [`Digest::from_bytes`], but fails on a length mismatch.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        <[u8; S]>::try_from(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidLength {
                expected: S,
                actual: bytes.len(),
            })
    }

    /// Parse big-endian hex, as produced by [`Digest::to_hex`].
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = hex::decode(text)?;
        bytes.reverse();
        Self::try_from_slice(&bytes)
    }

    /// False exactly when every byte is zero.
    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|&b| b != 0)
    }

    pub const fn as_bytes(&self) -> &[u8; S] {
        &self.0
    }

    /// Big-endian lowercase hex of the little-endian value.
    pub fn to_hex(&self) -> String {
        hex::encode_ordered(&self.0, ByteOrder::Little, LetterCase::Lower)
    }

    /// Lowercase hex of the bytes in storage order.
    pub fn to_wire_hex(&self) -> String {
        hex::encode(&self.0, LetterCase::Lower)
    }

    /// The digest as a natural, reading the bytes little-endian.
    pub fn to_natural(&self) -> Natural {
        Natural::from_bytes_le(&self.0)
    }
}

impl<const S: usize> Default for Digest<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const S: usize> PartialOrd for Digest<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const S: usize> Ord for Digest<S> {
    /// Most significant byte is stored last.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl<const S: usize> fmt::Debug for Digest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digest{{{}}}", self.to_hex())
    }
}

impl<const S: usize> fmt::Display for Digest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const S: usize> AsRef<[u8]> for Digest<S> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const S: usize> From<[u8; S]> for Digest<S> {
    fn from(bytes: [u8; S]) -> Self {
        Self(bytes)
    }
}

impl<const S: usize> Serialize for Digest<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const S: usize> Deserialize<'de> for Digest<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_invalid() {
        assert!(!Digest::<32>::from_bytes(&[0u8; 32]).is_valid());
        assert!(!Digest::<20>::default().is_valid());
    }

    #[test]
    fn test_wrong_length_gives_sentinel() {
        let d = Digest::<4>::from_bytes(&[1, 2, 3]);
        assert_eq!(d, Digest::zero());
        assert!(!d.is_valid());
        assert_eq!(
            Digest::<4>::try_from_slice(&[1, 2, 3]),
            Err(CryptoError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_hex_is_big_endian() {
        let d = Digest::<4>::from_array([0x01, 0x02, 0x03, 0x04]);
        assert_eq!(d.to_hex(), "04030201");
        assert_eq!(d.to_wire_hex(), "01020304");
        assert_eq!(d.to_string(), "04030201");
        assert_eq!(format!("{d:?}"), "digest{04030201}");
        assert_eq!(Digest::<4>::from_hex("04030201").unwrap(), d);
    }

    #[test]
    fn test_from_hex_rejects() {
        assert!(matches!(
            Digest::<4>::from_hex("0403"),
            Err(CryptoError::InvalidLength { .. })
        ));
        assert!(matches!(
            Digest::<4>::from_hex("zz030201"),
            Err(CryptoError::Encoding(_))
        ));
    }

    #[test]
    fn test_ordering_is_little_endian() {
        // Last byte is most significant.
        let small = Digest::<2>::from_array([0xff, 0x00]);
        let large = Digest::<2>::from_array([0x00, 0x01]);
        assert!(small < large);
    }

    #[test]
    fn test_to_natural() {
        let d = Digest::<2>::from_array([0x34, 0x12]);
        assert_eq!(d.to_natural(), Natural::from(0x1234u64));
    }

    #[test]
    fn test_serde_as_hex() {
        let d = Digest::<2>::from_array([0x34, 0x12]);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"1234\"");
        assert_eq!(serde_json::from_str::<Digest<2>>(&json).unwrap(), d);
    }

    proptest! {
        #[test]
        fn prop_nonzero_is_valid(bytes in any::<[u8; 32]>()) {
            let d = Digest::<32>::from_bytes(&bytes);
            prop_assert_eq!(d.is_valid(), bytes.iter().any(|&b| b != 0));
        }

        #[test]
        fn prop_order_matches_natural(a in any::<[u8; 8]>(), b in any::<[u8; 8]>()) {
            let (x, y) = (Digest::from_array(a), Digest::from_array(b));
            prop_assert_eq!(x.cmp(&y), x.to_natural().cmp(&y.to_natural()));
        }
    }
}
