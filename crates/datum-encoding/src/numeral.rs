//! Encoded strings that are also numbers.
//!
//! A [`Numeral`] holds the canonical spelling of a natural in some base.
//! Arithmetic decodes the operands, computes on [`Natural`], and encodes the
//! result into a fresh value. Comparison works on the text directly, which
//! is only sound because every `Numeral` is canonical.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Shl, Shr};
use std::str::FromStr;

use datum_core::{CoreError, Divide, Division, Natural};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EncodingError, Result};
use crate::positional::{self, Alphabet};

/// A positional base with a canonical alphabet.
pub trait Base {
    /// Digits in canonical case.
    const ALPHABET: Alphabet;

    /// Type name used in debug output.
    const NAME: &'static str;
}

/// The canonical spelling of a natural in base `B`.
pub struct Numeral<B: Base> {
    text: String,
    base: PhantomData<B>,
}

impl<B: Base> Numeral<B> {
    /// Parse canonical text.
    ///
    /// Rejects characters outside the alphabet, empty text, redundant
    /// leading zero digits, and (for case-insensitive alphabets) any
    /// character not in canonical case.
    pub fn new(text: &str) -> Result<Self> {
        positional::read(text, &B::ALPHABET)?;
        if !positional::is_canonical(text, &B::ALPHABET) {
            tracing::debug!(base = B::NAME, text, "rejected non-canonical numeral");
            return Err(EncodingError::NonCanonical(text.to_string()));
        }
        Ok(Self::from_canonical(text.to_string()))
    }

    /// Parse any spelling of a value and store its canonical form.
    pub fn read(text: &str) -> Result<Self> {
        let value = positional::read(text, &B::ALPHABET)?;
        Ok(Self::from_natural(&value))
    }

    pub fn zero() -> Self {
        Self::from_canonical(B::ALPHABET.zero().to_string())
    }

    pub fn from_natural(value: &Natural) -> Self {
        Self::from_canonical(positional::write(value, &B::ALPHABET))
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_natural(&Natural::from(value))
    }

    pub fn to_natural(&self) -> Natural {
        // Canonical text always decodes.
        positional::read(&self.text, &B::ALPHABET).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_zero(&self) -> bool {
        self.text.len() == 1 && self.text.starts_with(B::ALPHABET.zero())
    }

    /// Subtract, failing with `Underflow` when `other > self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let difference = self.to_natural().checked_sub(&other.to_natural())?;
        Ok(Self::from_natural(&difference))
    }

    /// `self + 1`.
    pub fn increment(&self) -> Self {
        Self::from_natural(&(self.to_natural() + Natural::one()))
    }

    /// `self - 1`, failing at zero.
    pub fn decrement(&self) -> Result<Self> {
        self.checked_sub(&Self::from_u64(1))
    }

    /// Divide by a machine-sized divisor.
    ///
    /// Dividing by the radix drops the last digit and reports its value,
    /// without decoding. Any other divisor goes through [`Natural`].
    pub fn divide(&self, divisor: u64) -> Result<Division<Self, u64>> {
        if divisor == 0 {
            return Err(CoreError::DivisionByZero.into());
        }

        if divisor == u64::from(B::ALPHABET.radix().get()) {
            tracing::trace!(base = B::NAME, "radix division fast path");
            let split = self.text.len() - 1;
            let last = self.text[split..].chars().next().unwrap_or(B::ALPHABET.zero());
            let quotient = if split == 0 {
                Self::zero()
            } else {
                Self::from_canonical(self.text[..split].to_string())
            };
            return Ok(Division {
                quotient,
                remainder: u64::from(B::ALPHABET.digit(last).unwrap_or(0)),
            });
        }

        let d = self.divide_by(&Natural::from(divisor))?;
        Ok(Division {
            quotient: d.quotient,
            remainder: d.remainder.to_u64()?,
        })
    }

    /// Divide by an arbitrary natural through a full decode.
    pub fn divide_by(&self, divisor: &Natural) -> Result<Division<Self, Natural>> {
        let Division {
            quotient,
            remainder,
        } = self.to_natural().divide(divisor)?;
        Ok(Division {
            quotient: Self::from_natural(&quotient),
            remainder,
        })
    }

    fn from_canonical(text: String) -> Self {
        debug_assert!(positional::is_canonical(&text, &B::ALPHABET));
        Self {
            text,
            base: PhantomData,
        }
    }
}

impl<B: Base> Default for Numeral<B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B: Base> Clone for Numeral<B> {
    fn clone(&self) -> Self {
        Self::from_canonical(self.text.clone())
    }
}

impl<B: Base> PartialEq for Numeral<B> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<B: Base> Eq for Numeral<B> {}

impl<B: Base> Hash for Numeral<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl<B: Base> PartialOrd for Numeral<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Base> Ord for Numeral<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        positional::compare(&self.text, &other.text, &B::ALPHABET)
    }
}

impl<B: Base> Add<&Numeral<B>> for &Numeral<B> {
    type Output = Numeral<B>;

    fn add(self, rhs: &Numeral<B>) -> Numeral<B> {
        Numeral::from_natural(&(self.to_natural() + rhs.to_natural()))
    }
}

impl<B: Base> Mul<&Numeral<B>> for &Numeral<B> {
    type Output = Numeral<B>;

    fn mul(self, rhs: &Numeral<B>) -> Numeral<B> {
        Numeral::from_natural(&(self.to_natural() * rhs.to_natural()))
    }
}

impl<B: Base> Add for Numeral<B> {
    type Output = Numeral<B>;

    fn add(self, rhs: Numeral<B>) -> Numeral<B> {
        &self + &rhs
    }
}

impl<B: Base> Mul for Numeral<B> {
    type Output = Numeral<B>;

    fn mul(self, rhs: Numeral<B>) -> Numeral<B> {
        &self * &rhs
    }
}

/// Multiplication by `2^bits`.
impl<B: Base> Shl<u32> for &Numeral<B> {
    type Output = Numeral<B>;

    fn shl(self, bits: u32) -> Numeral<B> {
        Numeral::from_natural(&(self.to_natural() << bits))
    }
}

/// Division by `2^bits`, discarding the remainder.
impl<B: Base> Shr<u32> for &Numeral<B> {
    type Output = Numeral<B>;

    fn shr(self, bits: u32) -> Numeral<B> {
        Numeral::from_natural(&(self.to_natural() >> bits))
    }
}

impl<B: Base> From<&Natural> for Numeral<B> {
    fn from(value: &Natural) -> Self {
        Self::from_natural(value)
    }
}

impl<B: Base> FromStr for Numeral<B> {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<B: Base> AsRef<str> for Numeral<B> {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl<B: Base> fmt::Display for Numeral<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<B: Base> fmt::Debug for Numeral<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", B::NAME, self.text)
    }
}

impl<B: Base> Serialize for Numeral<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de, B: Base> Deserialize<'de> for Numeral<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positional::DECIMAL;
    use proptest::prelude::*;

    struct Decimal;

    impl Base for Decimal {
        const ALPHABET: Alphabet = DECIMAL;
        const NAME: &'static str = "Decimal";
    }

    type Dec = Numeral<Decimal>;

    fn d(text: &str) -> Dec {
        Dec::new(text).unwrap()
    }

    #[test]
    fn test_new_requires_canonical() {
        assert!(Dec::new("120").is_ok());
        assert_eq!(Dec::new("012"), Err(EncodingError::NonCanonical("012".into())));
        assert_eq!(Dec::new(""), Err(EncodingError::Empty));
        assert!(matches!(
            Dec::new("1a"),
            Err(EncodingError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_read_canonicalizes() {
        assert_eq!(Dec::read("0042").unwrap(), d("42"));
        assert_eq!(Dec::read("000").unwrap(), Dec::zero());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(&d("19") + &d("23"), d("42"));
        assert_eq!(&d("6") * &d("7"), d("42"));
        assert_eq!(d("50").checked_sub(&d("8")).unwrap(), d("42"));
        assert_eq!(&d("21") << 1, d("42"));
        assert_eq!(&d("85") >> 1, d("42"));
        assert_eq!(d("41").increment(), d("42"));
        assert_eq!(d("43").decrement().unwrap(), d("42"));
    }

    #[test]
    fn test_underflow() {
        assert_eq!(
            d("0").decrement(),
            Err(EncodingError::Core(CoreError::Underflow))
        );
        assert!(d("3").checked_sub(&d("4")).is_err());
    }

    #[test]
    fn test_ordering_by_digits() {
        assert!(d("9") < d("10"));
        assert!(d("123") > d("122"));
        assert_eq!(d("77").cmp(&d("77")), Ordering::Equal);
    }

    #[test]
    fn test_divide_fast_path() {
        let q = d("1234").divide(10).unwrap();
        assert_eq!(q.quotient, d("123"));
        assert_eq!(q.remainder, 4);

        let q = d("7").divide(10).unwrap();
        assert_eq!(q.quotient, Dec::zero());
        assert_eq!(q.remainder, 7);
    }

    #[test]
    fn test_divide_general_path() {
        let q = d("1234").divide(7).unwrap();
        assert_eq!(q.quotient, d("176"));
        assert_eq!(q.remainder, 2);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            d("5").divide(0),
            Err(EncodingError::Core(CoreError::DivisionByZero))
        );
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&d("42")).unwrap();
        assert_eq!(json, "\"42\"");
        assert_eq!(serde_json::from_str::<Dec>(&json).unwrap(), d("42"));
        assert!(serde_json::from_str::<Dec>("\"042\"").is_err());
    }

    #[test]
    fn test_debug_names_base() {
        assert_eq!(format!("{:?}", d("5")), "Decimal(\"5\")");
    }

    proptest! {
        #[test]
        fn prop_fast_path_matches_general(n in any::<u64>()) {
            let x = Dec::from_u64(n);
            let fast = x.divide(10).unwrap();
            let general = x.divide_by(&Natural::from(10u64)).unwrap();
            prop_assert_eq!(fast.quotient, general.quotient);
            prop_assert_eq!(Natural::from(fast.remainder), general.remainder);
        }

        #[test]
        fn prop_add_matches_natural(a in any::<u64>(), b in any::<u64>()) {
            let sum = &Dec::from_u64(a) + &Dec::from_u64(b);
            prop_assert_eq!(sum.to_natural(), Natural::from(a) + Natural::from(b));
        }
    }
}
