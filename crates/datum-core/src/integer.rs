//! Unbounded signed integers and Euclidean division.
//!
//! Integer division is derived from natural division by splitting on the
//! signs of the operands:
//!
//! - both non-negative: natural division.
//! - negative dividend, positive divisor: divide `-dividend`, then
//!   `q' = -(q + 1)` and `r' = divisor - r`, unless `r == 0`, in which case
//!   `q' = -q` and `r' = 0`.
//! - negative divisor: divide by `-divisor` and negate the quotient.
//!
//! The remainder is therefore never negative. Every consumer in the
//! workspace relies on this one convention.

use std::fmt;
use std::ops::{Neg, Shl, Shr};
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::division::{Divide, Division};
use crate::error::{CoreError, Result};
use crate::natural::Natural;

/// A signed integer of unbounded size.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Integer(BigInt);

impl Integer {
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn one() -> Self {
        Self(BigInt::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// The magnitude as a natural.
    pub fn abs(&self) -> Natural {
        Natural::from(self.0.magnitude().clone())
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Integer {
        Self(self.0.signum())
    }

    pub fn pow(&self, exponent: u32) -> Integer {
        Self(self.0.pow(exponent))
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }
}

impl Divide for Integer {
    fn divide(&self, divisor: &Integer) -> Result<Division<Integer>> {
        if divisor.is_zero() {
            tracing::debug!(dividend = %self, "integer division by zero");
            return Err(CoreError::DivisionByZero);
        }

        if divisor.is_negative() {
            let d = self.divide(&-divisor)?;
            return Ok(Division {
                quotient: -d.quotient,
                remainder: d.remainder,
            });
        }

        let magnitude = divisor.abs();
        let d = self.abs().divide_nonzero(&magnitude);

        if !self.is_negative() {
            return Ok(Division {
                quotient: d.quotient.into(),
                remainder: d.remainder.into(),
            });
        }

        if d.remainder.is_zero() {
            return Ok(Division {
                quotient: -Integer::from(d.quotient),
                remainder: Integer::zero(),
            });
        }

        Ok(Division {
            quotient: -(Integer::from(d.quotient) + Integer::one()),
            remainder: magnitude.checked_sub(&d.remainder)?.into(),
        })
    }
}

forward_binop!(Integer, Add, add);
forward_binop!(Integer, Sub, sub);
forward_binop!(Integer, Mul, mul);

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

/// Multiplication by `2^bits`.
impl Shl<u32> for &Integer {
    type Output = Integer;

    fn shl(self, bits: u32) -> Integer {
        Integer(&self.0 << bits)
    }
}

/// Euclidean division by `2^bits`, so negative values round toward
/// negative infinity.
impl Shr<u32> for &Integer {
    type Output = Integer;

    fn shr(self, bits: u32) -> Integer {
        let magnitude = self.abs();
        if !self.is_negative() {
            return (magnitude >> bits).into();
        }
        // -ceil(|x| / 2^bits)
        let bias = (Natural::one() << bits).checked_sub(&Natural::one()).unwrap_or_default();
        -Integer::from((magnitude + bias) >> bits)
    }
}

impl From<Natural> for Integer {
    fn from(n: Natural) -> Self {
        Self(BigInt::from(n.into_biguint()))
    }
}

impl From<&Natural> for Integer {
    fn from(n: &Natural) -> Self {
        Self(BigInt::from(n.as_biguint().clone()))
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self(BigInt::from(n))
    }
}

impl From<BigInt> for Integer {
    fn from(n: BigInt) -> Self {
        Self(n)
    }
}

impl TryFrom<Integer> for Natural {
    type Error = CoreError;

    fn try_from(z: Integer) -> Result<Natural> {
        if z.is_negative() {
            return Err(CoreError::Underflow);
        }
        Ok(z.abs())
    }
}

impl FromStr for Integer {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_str(s)
            .map(Self)
            .map_err(|e| CoreError::Parse(e.to_string()))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}
