//! # Datum Core
//!
//! The numeral kernel for Datum: unbounded naturals and integers, long
//! division with a single remainder convention, the extended Euclidean
//! algorithm, and fractions held in lowest terms.
//!
//! This crate performs no I/O. Storage, addition, multiplication and
//! comparison of raw digits come from `num-bigint`; division, GCD and
//! everything built on them are implemented here.
//!
//! ## Key Types
//!
//! - [`Natural`] - Non-negative integer of any size
//! - [`Integer`] - Signed integer of any size; `0` carries no sign
//! - [`Division`] - Quotient and remainder pair returned by [`Divide`]
//! - [`Fraction`] - Rational number, always reduced to lowest terms
//!
//! ## Division Convention
//!
//! Integer division is Euclidean: the remainder always satisfies
//! `0 <= r < |divisor|`, whatever the signs of the operands. See
//! [`integer`] for the case split.

#[macro_use]
mod macros;

pub mod division;
pub mod error;
pub mod euclid;
pub mod integer;
pub mod natural;
pub mod rational;

pub use division::{Divide, Division};
pub use error::{CoreError, Result};
pub use euclid::{extended_gcd, gcd, Euclid};
pub use integer::Integer;
pub use natural::Natural;
pub use rational::Fraction;
