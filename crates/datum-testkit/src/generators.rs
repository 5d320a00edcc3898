//! Proptest generators for property-based testing.

use proptest::prelude::*;

use datum_core::{Fraction, Integer, Natural};
use datum_encoding::{Base58String, HexNumeral};

/// Generate a natural of at most `max_bytes` bytes.
pub fn natural(max_bytes: usize) -> impl Strategy<Value = Natural> {
    prop::collection::vec(any::<u8>(), 0..=max_bytes).prop_map(|b| Natural::from_bytes_be(&b))
}

/// Generate a nonzero natural of at most `max_bytes + 1` bytes.
pub fn nonzero_natural(max_bytes: usize) -> impl Strategy<Value = Natural> {
    (1u8..=u8::MAX, prop::collection::vec(any::<u8>(), 0..=max_bytes)).prop_map(
        |(lead, rest)| {
            let mut bytes = vec![lead];
            bytes.extend(rest);
            Natural::from_bytes_be(&bytes)
        },
    )
}

/// Generate an integer of either sign.
pub fn integer(max_bytes: usize) -> impl Strategy<Value = Integer> {
    (any::<bool>(), natural(max_bytes)).prop_map(|(negative, magnitude)| signed(negative, magnitude))
}

/// Generate a nonzero integer of either sign.
pub fn nonzero_integer(max_bytes: usize) -> impl Strategy<Value = Integer> {
    (any::<bool>(), nonzero_natural(max_bytes))
        .prop_map(|(negative, magnitude)| signed(negative, magnitude))
}

/// Generate a valid fraction. Reduction happens in the constructor.
pub fn fraction(max_bytes: usize) -> impl Strategy<Value = Fraction> {
    (integer(max_bytes), nonzero_natural(max_bytes)).prop_map(|(n, d)| Fraction::new(n, d))
}

/// Generate a valid nonzero fraction.
pub fn nonzero_fraction(max_bytes: usize) -> impl Strategy<Value = Fraction> {
    (nonzero_integer(max_bytes), nonzero_natural(max_bytes))
        .prop_map(|(n, d)| Fraction::new(n, d))
}

/// Generate byte strings of at most `max_len` bytes.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a canonical base58 numeral.
pub fn base58_string(max_bytes: usize) -> impl Strategy<Value = Base58String> {
    natural(max_bytes).prop_map(|n| Base58String::from_natural(&n))
}

/// Generate a canonical hex numeral.
pub fn hex_numeral(max_bytes: usize) -> impl Strategy<Value = HexNumeral> {
    natural(max_bytes).prop_map(|n| HexNumeral::from_natural(&n))
}

fn signed(negative: bool, magnitude: Natural) -> Integer {
    let value = Integer::from(magnitude);
    if negative {
        -value
    } else {
        value
    }
}

/// Operands for an integer division.
#[derive(Debug, Clone)]
pub struct DivisionParams {
    pub dividend: Integer,
    pub divisor: Integer,
}

impl Arbitrary for DivisionParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            // Small operands hit every sign pairing and the unit divisors.
            (-50i64..=50, prop_oneof![-9i64..=-1, 1i64..=9]).prop_map(|(a, b)| {
                DivisionParams {
                    dividend: Integer::from(a),
                    divisor: Integer::from(b),
                }
            }),
            (integer(24), nonzero_integer(12)).prop_map(|(dividend, divisor)| DivisionParams {
                dividend,
                divisor,
            }),
        ]
        .boxed()
    }
}
