//! Concrete writers over the RustCrypto hash implementations.
//!
//! [`Hasher`] adapts any fixed-output `digest::Digest` into a [`Writer`]
//! producing `Digest<S>`. [`Composed`] feeds the output of one algorithm
//! into another, which is how the Bitcoin double hashes are built.

use std::fmt;
use std::marker::PhantomData;

use crate::digest::Digest;
use crate::hash::{calculate, OneWay, Writer};

/// A streaming writer backed by the algorithm `D`, whose output must be
/// `S` bytes wide.
pub struct Hasher<D, const S: usize> {
    state: D,
}

impl<D: ::digest::Digest, const S: usize> Default for Hasher<D, S> {
    fn default() -> Self {
        Self { state: D::new() }
    }
}

impl<D: ::digest::Digest + Clone, const S: usize> Clone for Hasher<D, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<D, const S: usize> fmt::Debug for Hasher<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hasher<{S}>")
    }
}

impl<D: ::digest::Digest, const S: usize> Writer for Hasher<D, S> {
    type Output = Digest<S>;

    fn write(&mut self, bytes: &[u8]) -> &mut Self {
        ::digest::Digest::update(&mut self.state, bytes);
        self
    }

    fn finalize(self) -> Digest<S> {
        debug_assert_eq!(<D as ::digest::Digest>::output_size(), S);
        let output = ::digest::Digest::finalize(self.state);
        Digest::from_bytes(output.as_slice())
    }
}

/// Streams input into `I`, then hashes that output once with `O`.
pub struct Composed<I, O, const S: usize> {
    inner: I,
    outer: PhantomData<O>,
}

impl<I: ::digest::Digest, O, const S: usize> Default for Composed<I, O, S> {
    fn default() -> Self {
        Self {
            inner: I::new(),
            outer: PhantomData,
        }
    }
}

impl<I: ::digest::Digest + Clone, O, const S: usize> Clone for Composed<I, O, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            outer: PhantomData,
        }
    }
}

impl<I, O, const S: usize> fmt::Debug for Composed<I, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Composed<{S}>")
    }
}

impl<I: ::digest::Digest, O: ::digest::Digest, const S: usize> Writer for Composed<I, O, S> {
    type Output = Digest<S>;

    fn write(&mut self, bytes: &[u8]) -> &mut Self {
        ::digest::Digest::update(&mut self.inner, bytes);
        self
    }

    fn finalize(self) -> Digest<S> {
        debug_assert_eq!(<O as ::digest::Digest>::output_size(), S);
        let first = ::digest::Digest::finalize(self.inner);
        let second = <O as ::digest::Digest>::digest(first);
        Digest::from_bytes(second.as_slice())
    }
}

pub type Sha2_224 = Hasher<sha2::Sha224, 28>;
pub type Sha2_256 = Hasher<sha2::Sha256, 32>;
pub type Sha2_384 = Hasher<sha2::Sha384, 48>;
pub type Sha2_512 = Hasher<sha2::Sha512, 64>;

pub type Sha3_224 = Hasher<sha3::Sha3_224, 28>;
pub type Sha3_256 = Hasher<sha3::Sha3_256, 32>;
pub type Sha3_384 = Hasher<sha3::Sha3_384, 48>;
pub type Sha3_512 = Hasher<sha3::Sha3_512, 64>;

pub type Ripemd128 = Hasher<ripemd::Ripemd128, 16>;
pub type Ripemd160 = Hasher<ripemd::Ripemd160, 20>;
pub type Ripemd256 = Hasher<ripemd::Ripemd256, 32>;
pub type Ripemd320 = Hasher<ripemd::Ripemd320, 40>;

/// RIPEMD-160 of SHA-256.
pub type Bitcoin160 = Composed<sha2::Sha256, ripemd::Ripemd160, 20>;
/// SHA-256 of SHA-256.
pub type Bitcoin256 = Composed<sha2::Sha256, sha2::Sha256, 32>;

impl OneWay for Sha2_224 {}
impl OneWay for Sha2_256 {}
impl OneWay for Sha2_384 {}
impl OneWay for Sha2_512 {}
impl OneWay for Sha3_224 {}
impl OneWay for Sha3_256 {}
impl OneWay for Sha3_384 {}
impl OneWay for Sha3_512 {}
impl OneWay for Ripemd128 {}
impl OneWay for Ripemd160 {}
impl OneWay for Ripemd256 {}
impl OneWay for Ripemd320 {}
impl OneWay for Bitcoin160 {}
impl OneWay for Bitcoin256 {}

pub fn sha2_224(bytes: &[u8]) -> Digest<28> {
    calculate::<Sha2_224>(bytes)
}

pub fn sha2_256(bytes: &[u8]) -> Digest<32> {
    calculate::<Sha2_256>(bytes)
}

pub fn sha2_384(bytes: &[u8]) -> Digest<48> {
    calculate::<Sha2_384>(bytes)
}

pub fn sha2_512(bytes: &[u8]) -> Digest<64> {
    calculate::<Sha2_512>(bytes)
}

pub fn sha3_224(bytes: &[u8]) -> Digest<28> {
    calculate::<Sha3_224>(bytes)
}

pub fn sha3_256(bytes: &[u8]) -> Digest<32> {
    calculate::<Sha3_256>(bytes)
}

pub fn sha3_384(bytes: &[u8]) -> Digest<48> {
    calculate::<Sha3_384>(bytes)
}

pub fn sha3_512(bytes: &[u8]) -> Digest<64> {
    calculate::<Sha3_512>(bytes)
}

pub fn ripemd_128(bytes: &[u8]) -> Digest<16> {
    calculate::<Ripemd128>(bytes)
}

pub fn ripemd_160(bytes: &[u8]) -> Digest<20> {
    calculate::<Ripemd160>(bytes)
}

pub fn ripemd_256(bytes: &[u8]) -> Digest<32> {
    calculate::<Ripemd256>(bytes)
}

pub fn ripemd_320(bytes: &[u8]) -> Digest<40> {
    calculate::<Ripemd320>(bytes)
}

/// Hash used for Bitcoin addresses.
pub fn bitcoin_160(bytes: &[u8]) -> Digest<20> {
    calculate::<Bitcoin160>(bytes)
}

/// Hash used for Bitcoin block and transaction ids.
pub fn bitcoin_256(bytes: &[u8]) -> Digest<32> {
    calculate::<Bitcoin256>(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashFunction;
    use datum_encoding::hex::{self, LetterCase};
    use proptest::prelude::*;

    #[test]
    fn test_sha2_256_empty() {
        assert_eq!(
            sha2_256(b"").to_wire_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha2_256_multiblock() {
        assert_eq!(
            sha2_256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").to_wire_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_ripemd_160_abc() {
        assert_eq!(
            ripemd_160(b"abc").to_wire_hex(),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
    }

    #[test]
    fn test_bitcoin_hashes() {
        assert_eq!(
            bitcoin_256(b"hello").to_wire_hex(),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
        assert_eq!(
            bitcoin_160(b"hello").to_wire_hex(),
            "b6a9c8c230722b7c748331a8b450f05566dc7d0f"
        );
    }

    #[test]
    fn test_display_is_reversed_wire() {
        let d = sha2_256(b"");
        let mut wire = d.as_bytes().to_vec();
        wire.reverse();
        assert_eq!(d.to_hex(), hex::encode(&wire, LetterCase::Lower));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(<Sha2_224 as Writer>::SIZE, 28);
        assert_eq!(<Sha2_512 as HashFunction>::SIZE, 64);
        assert_eq!(<Sha3_384 as HashFunction>::SIZE, 48);
        assert_eq!(<Ripemd128 as Writer>::SIZE, 16);
        assert_eq!(<Ripemd320 as HashFunction>::SIZE, 40);
        assert_eq!(<Bitcoin160 as HashFunction>::SIZE, 20);
        assert_eq!(<Bitcoin256 as Writer>::SIZE, 32);
    }

    #[test]
    fn test_hash_function_matches_free_function() {
        assert_eq!(<Sha3_256 as HashFunction>::hash(b"abc"), sha3_256(b"abc"));
        assert_eq!(<Bitcoin160 as HashFunction>::hash(b"abc"), bitcoin_160(b"abc"));
    }

    #[test]
    fn test_outputs_are_valid() {
        assert!(sha2_224(b"").is_valid());
        assert!(ripemd_256(b"").is_valid());
        assert!(sha2_384(b"x").is_valid());
    }

    #[test]
    fn test_composed_streams_inner_only() {
        let mut w = Bitcoin256::default();
        w.write(b"hel").write(b"lo");
        assert_eq!(w.finalize(), bitcoin_256(b"hello"));
        assert_ne!(bitcoin_256(b"hello"), sha2_256(b"hello"));
    }

    proptest! {
        #[test]
        fn prop_streaming_equals_one_shot(
            a in prop::collection::vec(any::<u8>(), 0..300),
            b in prop::collection::vec(any::<u8>(), 0..300),
        ) {
            let mut joined = a.clone();
            joined.extend_from_slice(&b);

            let mut w = Sha2_512::default();
            w.write(&a).write(&b);
            prop_assert_eq!(w.finalize(), sha2_512(&joined));

            let mut w = Ripemd160::default();
            w.write(&a).write(&b);
            prop_assert_eq!(w.finalize(), ripemd_160(&joined));

            let mut w = Bitcoin160::default();
            w.write(&a).write(&b);
            prop_assert_eq!(w.finalize(), bitcoin_160(&joined));
        }

        #[test]
        fn prop_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(sha3_512(&bytes), sha3_512(&bytes));
            prop_assert_eq!(ripemd_320(&bytes), ripemd_320(&bytes));
        }
    }
}
