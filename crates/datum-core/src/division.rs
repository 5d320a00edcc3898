//! The division seam shared by naturals and integers.

use crate::error::Result;

/// A quotient and remainder.
///
/// Always satisfies `dividend == divisor * quotient + remainder` with
/// `0 <= remainder < |divisor|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division<Q, R = Q> {
    pub quotient: Q,
    pub remainder: R,
}

/// Division with remainder.
pub trait Divide: Sized {
    /// Divide `self` by `divisor`.
    ///
    /// Fails with [`CoreError::DivisionByZero`](crate::CoreError::DivisionByZero)
    /// when `divisor` is zero.
    fn divide(&self, divisor: &Self) -> Result<Division<Self>>;
}
