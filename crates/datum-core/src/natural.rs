//! Unbounded natural numbers.

use std::fmt;
use std::num::NonZeroU32;
use std::ops::{Shl, Shr};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::division::{Divide, Division};
use crate::error::{CoreError, Result};

/// A non-negative integer of unbounded size.
///
/// Backed by `num-bigint`, whose representation never carries redundant
/// leading zero digits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Natural(BigUint);

impl Natural {
    /// The natural `0`.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// The natural `1`.
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of significant bits. Zero has none.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Interpret bytes as a big-endian unsigned integer.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Interpret bytes as a little-endian unsigned integer.
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_le(bytes))
    }

    /// Minimal big-endian bytes. Zero is `[0x00]`.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Minimal little-endian bytes. Zero is `[0x00]`.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        self.0.to_bytes_le()
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.0.to_u64().ok_or(CoreError::Overflow(64))
    }

    /// Subtract, failing when `other > self`.
    pub fn checked_sub(&self, other: &Natural) -> Result<Natural> {
        if other > self {
            tracing::trace!("natural subtraction would underflow");
            return Err(CoreError::Underflow);
        }
        Ok(Self(&self.0 - &other.0))
    }

    pub fn pow(&self, exponent: u32) -> Natural {
        Self(self.0.pow(exponent))
    }

    /// Divide by a machine-sized divisor that cannot be zero.
    pub fn divide_small(&self, divisor: NonZeroU32) -> Division<Natural, u32> {
        let d = self.divide_nonzero(&Natural::from(divisor.get()));
        Division {
            quotient: d.quotient,
            remainder: d.remainder.0.to_u32().unwrap_or_default(),
        }
    }

    /// Borrow the provider value.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Divide by a divisor the caller has already checked to be nonzero.
    ///
    /// Binary long division: align the divisor under the dividend's top
    /// bit, then shift it down one bit at a time, subtracting whenever it
    /// fits.
    pub(crate) fn divide_nonzero(&self, divisor: &Natural) -> Division<Natural> {
        debug_assert!(!divisor.is_zero());

        if self < divisor {
            return Division {
                quotient: Natural::zero(),
                remainder: self.clone(),
            };
        }

        let shift = self.bits() - divisor.bits();
        let mut remainder = self.0.clone();
        let mut quotient = BigUint::zero();
        let mut step = &divisor.0 << shift;

        for _ in 0..=shift {
            quotient <<= 1u32;
            if remainder >= step {
                remainder -= &step;
                quotient += 1u32;
            }
            step >>= 1u32;
        }

        Division {
            quotient: Natural(quotient),
            remainder: Natural(remainder),
        }
    }
}

impl Divide for Natural {
    fn divide(&self, divisor: &Natural) -> Result<Division<Natural>> {
        if divisor.is_zero() {
            tracing::debug!(dividend = %self, "natural division by zero");
            return Err(CoreError::DivisionByZero);
        }
        Ok(self.divide_nonzero(divisor))
    }
}

forward_binop!(Natural, Add, add);
forward_binop!(Natural, Mul, mul);

impl Shl<u32> for Natural {
    type Output = Natural;

    fn shl(self, bits: u32) -> Natural {
        Natural(self.0 << bits)
    }
}

impl Shl<u32> for &Natural {
    type Output = Natural;

    fn shl(self, bits: u32) -> Natural {
        Natural(&self.0 << bits)
    }
}

impl Shr<u32> for Natural {
    type Output = Natural;

    fn shr(self, bits: u32) -> Natural {
        Natural(self.0 >> bits)
    }
}

impl Shr<u32> for &Natural {
    type Output = Natural;

    fn shr(self, bits: u32) -> Natural {
        Natural(&self.0 >> bits)
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        Self(BigUint::from(n))
    }
}

impl From<u32> for Natural {
    fn from(n: u32) -> Self {
        Self(BigUint::from(n))
    }
}

impl From<BigUint> for Natural {
    fn from(n: BigUint) -> Self {
        Self(n)
    }
}

impl FromStr for Natural {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        BigUint::from_str(s)
            .map(Self)
            .map_err(|e| CoreError::Parse(e.to_string()))
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({})", self.0)
    }
}
