//! Rational numbers in lowest terms.
//!
//! Every constructor and every arithmetic result passes through the same
//! reduction, so two equal rationals always have identical fields.
//!
//! A zero denominator produces the invalid fraction rather than an error.
//! It compares equal only to itself and makes every arithmetic result it
//! touches invalid too. Check [`Fraction::is_valid`] before trusting a
//! result.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::division::Division;
use crate::error::{CoreError, Result};
use crate::euclid::gcd;
use crate::integer::Integer;
use crate::natural::Natural;

/// A fraction `numerator / denominator` with `denominator > 0` and
/// `gcd(|numerator|, denominator) == 1`. Zero is `0/1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: Integer,
    denominator: Natural,
}

impl Fraction {
    /// Build a fraction and reduce it to lowest terms.
    ///
    /// A zero denominator yields [`Fraction::invalid`].
    pub fn new(numerator: Integer, denominator: Natural) -> Self {
        if denominator.is_zero() {
            tracing::trace!(%numerator, "fraction with zero denominator");
            return Self::invalid();
        }

        if numerator.is_zero() {
            return Self::zero();
        }

        let g = gcd(&numerator.abs(), &denominator);
        let Division { quotient, .. } = numerator.abs().divide_nonzero(&g);
        let numerator = if numerator.is_negative() {
            -Integer::from(quotient)
        } else {
            Integer::from(quotient)
        };

        Self {
            numerator,
            denominator: denominator.divide_nonzero(&g).quotient,
        }
    }

    /// The canonical zero, `0/1`.
    pub fn zero() -> Self {
        Self {
            numerator: Integer::zero(),
            denominator: Natural::one(),
        }
    }

    /// The invalid sentinel, `0/0`.
    pub fn invalid() -> Self {
        Self {
            numerator: Integer::zero(),
            denominator: Natural::zero(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.denominator.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.is_valid() && self.numerator.is_zero()
    }

    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// The multiplicative inverse.
    ///
    /// The inverse of zero is zero. This is a sentinel: zero has no
    /// inverse, and [`Fraction::divide`] rejects a zero divisor before it
    /// ever gets here.
    pub fn inverse(&self) -> Fraction {
        if !self.is_valid() {
            return Self::invalid();
        }
        if self.numerator.is_zero() {
            return Self::zero();
        }

        let denominator = Integer::from(&self.denominator);
        Self {
            numerator: if self.numerator.is_negative() {
                -denominator
            } else {
                denominator
            },
            denominator: self.numerator.abs(),
        }
    }

    /// Divide by another fraction, failing when it is zero.
    pub fn divide(&self, divisor: &Fraction) -> Result<Fraction> {
        if divisor.is_zero() {
            tracing::debug!(dividend = %self, "fraction division by zero");
            return Err(CoreError::DivisionByZero);
        }
        Ok(self * &divisor.inverse())
    }

    /// Divide by a natural by scaling the denominator. Dividing by zero
    /// yields the invalid fraction.
    pub fn div_natural(&self, n: &Natural) -> Fraction {
        Self::new(self.numerator.clone(), &self.denominator * n)
    }

    /// `self * self`, never negative.
    pub fn quadrance(&self) -> Fraction {
        self * self
    }

    /// Cross products `(self.n * other.d, other.n * self.d)`.
    fn cross(&self, other: &Fraction) -> (Integer, Integer) {
        (
            &self.numerator * &Integer::from(&other.denominator),
            &other.numerator * &Integer::from(&self.denominator),
        )
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Integer> for Fraction {
    fn from(z: Integer) -> Self {
        Self {
            numerator: z,
            denominator: Natural::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(z: i64) -> Self {
        Self::from(Integer::from(z))
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        let (a, b) = self.cross(rhs);
        Fraction::new(a + b, &self.denominator * &rhs.denominator)
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        self + &(-rhs)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        &self - &rhs
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -&self
    }
}

impl PartialOrd for Fraction {
    /// `a/b < c/d` iff `a*d < c*b`; denominators are positive. Comparing
    /// with an invalid fraction has no answer.
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => {
                let (a, b) = self.cross(other);
                Some(a.cmp(&b))
            }
            (false, false) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fraction{{{}, {}}}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(n: i64, d: u64) -> Fraction {
        Fraction::new(Integer::from(n), Natural::from(d))
    }

    #[test]
    fn test_reduces_to_lowest_terms() {
        assert_eq!(q(4, 8), q(1, 2));
        assert_eq!(q(4, 8).numerator(), &Integer::from(1i64));
        assert_eq!(q(4, 8).denominator(), &Natural::from(2u64));
        assert_eq!(q(-6, 4), q(-3, 2));
    }

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(q(0, 7), Fraction::zero());
        assert_eq!(q(0, 7).denominator(), &Natural::one());
        assert!(q(0, 7).is_zero());
    }

    #[test]
    fn test_zero_denominator_is_invalid() {
        let f = q(3, 0);
        assert!(!f.is_valid());
        assert_eq!(f, Fraction::invalid());
        assert!(!(&f + &q(1, 2)).is_valid());
        assert!(!(&q(1, 2) * &f).is_valid());
        assert_eq!(f.partial_cmp(&q(1, 2)), None);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(&q(1, 2) + &q(1, 3), q(5, 6));
        assert_eq!(&q(1, 2) - &q(1, 3), q(1, 6));
        assert_eq!(&q(2, 3) * &q(3, 4), q(1, 2));
        assert_eq!(q(2, 3).divide(&q(4, 9)).unwrap(), q(3, 2));
        assert_eq!(-q(2, 3), q(-2, 3));
        assert_eq!(q(-2, 3).quadrance(), q(4, 9));
    }

    #[test]
    fn test_divide_by_zero_fails() {
        assert_eq!(q(1, 2).divide(&Fraction::zero()), Err(CoreError::DivisionByZero));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(q(2, 3).inverse(), q(3, 2));
        assert_eq!(q(-2, 3).inverse(), q(-3, 2));
        // Zero maps to zero by convention.
        assert_eq!(Fraction::zero().inverse(), Fraction::zero());
    }

    #[test]
    fn test_div_natural() {
        assert_eq!(q(2, 3).div_natural(&Natural::from(4u64)), q(1, 6));
        assert!(!q(2, 3).div_natural(&Natural::zero()).is_valid());
    }

    #[test]
    fn test_ordering() {
        assert!(q(1, 3) < q(1, 2));
        assert!(q(-1, 2) < q(-1, 3));
        assert!(q(5, 10) <= q(1, 2));
        assert!(q(7, 3) > Fraction::from(2i64));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(q(-4, 6).to_string(), "-2/3");
        assert_eq!(format!("{:?}", q(4, 6)), "fraction{2, 3}");
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (any::<i32>(), 1u32..).prop_map(|(n, d)| q(n as i64, d as u64))
    }

    proptest! {
        #[test]
        fn prop_canonical_form(n in any::<i64>(), d in 1u64..) {
            prop_assume!(n != 0);
            let f = q(n, d);
            prop_assert_eq!(gcd(&f.numerator().abs(), f.denominator()), Natural::one());
        }

        #[test]
        fn prop_add_sub_closure(a in fraction(), b in fraction()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn prop_mul_div_closure(a in fraction(), b in fraction()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((&a * &b).divide(&b).unwrap(), a);
        }
    }
}
