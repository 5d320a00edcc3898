//! # Datum Encoding
//!
//! String codecs that interoperate with the numeral kernel.
//!
//! - [`positional`] - Generic `Natural <-> digit string` conversion for any
//!   [`Alphabet`](positional::Alphabet)
//! - [`Numeral`] - An encoded string that is also a number, with arithmetic
//!   returning fresh values
//! - [`hex`] - Byte strings, fixed-width integers, hex numerals
//! - [`base58`] - Base58 byte strings and numerals
//!
//! Strict decoders (`decode`, `read`, `Numeral::new`) return
//! [`EncodingError`]. Each codec also has a `View`, which never fails and
//! simply holds no bytes when its text is malformed.
//!
//! ```rust
//! use datum_encoding::base58::{self, Base58String};
//!
//! assert_eq!(base58::encode(&[0x00]), "1");
//!
//! let a: Base58String = "21".parse().unwrap();
//! assert_eq!(a.increment().as_str(), "22");
//! ```

pub mod base58;
pub mod error;
pub mod hex;
pub mod numeral;
pub mod positional;

pub use base58::Base58String;
pub use error::{EncodingError, Result};
pub use hex::{ByteOrder, HexNumeral, LetterCase};
pub use numeral::{Base, Numeral};
pub use positional::Alphabet;
