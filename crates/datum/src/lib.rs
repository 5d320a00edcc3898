//! # Datum
//!
//! Exact numeric values and the encodings and digests built on them.
//!
//! ## Overview
//!
//! - **Numerals**: [`Natural`] and [`Integer`] of unbounded size, with long
//!   division whose remainder is never negative
//! - **Fractions**: [`Fraction`] values always held in lowest terms
//! - **Encodings**: hex and base58 byte strings, and encoded strings that
//!   support arithmetic directly ([`HexNumeral`], [`Base58String`])
//! - **Digests**: fixed-width hash output ([`Digest`]) produced by the
//!   SHA-2, SHA-3, RIPEMD and Bitcoin hash functions
//!
//! ## Usage
//!
//! ```rust
//! use datum::{Base58String, CodecConfig, Fraction, Integer};
//! use datum::crypto::sha2_256;
//!
//! let half = Fraction::new(Integer::from(4i64), 8u64.into());
//! assert_eq!(half.to_string(), "1/2");
//!
//! let n: Base58String = "z".parse().unwrap();
//! assert_eq!(n.increment().as_str(), "21");
//!
//! let digest = sha2_256(b"");
//! assert_eq!(
//!     CodecConfig::default().render_digest(&digest),
//!     digest.to_hex(),
//! );
//! ```
//!
//! ## Re-exports
//!
//! - `datum::core` - Naturals, integers, division, GCD, fractions
//! - `datum::encoding` - Positional codecs, hex, base58
//! - `datum::crypto` - Digests, writers, hash functions

pub mod config;
pub mod error;

// Re-export component crates
pub use datum_core as core;
pub use datum_crypto as crypto;
pub use datum_encoding as encoding;

pub use config::CodecConfig;
pub use error::{Error, Result};

// Re-export commonly used types
pub use datum_core::{Divide, Division, Fraction, Integer, Natural};
pub use datum_crypto::{Digest, HashFunction, OneWay, Writer};
pub use datum_encoding::{Base58String, ByteOrder, HexNumeral, LetterCase};
