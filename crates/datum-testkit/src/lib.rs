//! # Datum Testkit
//!
//! Testing utilities for Datum.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Published hash outputs and codec spellings, checked
//!   against every build
//! - **Generators**: Proptest strategies for naturals, integers, fractions,
//!   byte strings and encoded numerals
//!
//! ## Golden Vectors
//!
//! ```rust
//! use datum_testkit::vectors::verify_hash_vectors;
//!
//! for (name, matches, actual) in verify_hash_vectors() {
//!     assert!(matches, "{name}: got {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use datum_core::Divide;
//! use datum_testkit::generators::DivisionParams;
//!
//! proptest! {
//!     #[test]
//!     fn remainder_is_never_negative(params: DivisionParams) {
//!         let d = params.dividend.divide(&params.divisor).unwrap();
//!         prop_assert!(!d.remainder.is_negative());
//!     }
//! }
//! ```

pub mod generators;
pub mod vectors;

pub use generators::DivisionParams;
pub use vectors::{
    codec_vectors, hash_vectors, verify_codec_vectors, verify_hash_vectors, Algorithm,
    CodecVector, HashVector,
};
