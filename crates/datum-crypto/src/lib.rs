//! # Datum Crypto
//!
//! Fixed-width digests and the hashing capabilities that produce them.
//!
//! - [`Digest`] - `S` bytes of hash output, ordered and rendered as a
//!   little-endian number
//! - [`Writer`] - Incremental input, finalized into a digest
//! - [`HashFunction`] - One-shot hashing, available for every [`OneWay`]
//!   writer
//! - [`algorithms`] - SHA-2, SHA-3, RIPEMD, and the Bitcoin double hashes
//!
//! ```rust
//! use datum_crypto::{algorithms::Sha2_256, HashFunction, Writer};
//!
//! let mut writer = Sha2_256::default();
//! writer.write(b"ab").write(b"c");
//! assert_eq!(writer.finalize(), <Sha2_256 as HashFunction>::hash(b"abc"));
//! ```

pub mod algorithms;
pub mod digest;
pub mod error;
pub mod hash;

pub use algorithms::{
    bitcoin_160, bitcoin_256, ripemd_128, ripemd_160, ripemd_256, ripemd_320, sha2_224, sha2_256,
    sha2_384, sha2_512, sha3_224, sha3_256, sha3_384, sha3_512, Composed, Hasher,
};
pub use self::digest::Digest;
pub use error::{CryptoError, Result};
pub use hash::{calculate, DigestOutput, HashFunction, OneWay, Writer};

/// A 20-byte digest.
pub type Digest160 = Digest<20>;
/// A 32-byte digest.
pub type Digest256 = Digest<32>;
/// A 64-byte digest.
pub type Digest512 = Digest<64>;
