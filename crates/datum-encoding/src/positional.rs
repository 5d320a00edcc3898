//! Generic positional-base conversion between naturals and digit strings.
//!
//! An [`Alphabet`] maps digit values `0..radix` to characters. [`write`]
//! produces the canonical spelling of a natural: no leading zero digit,
//! except the single zero character for `0`. [`read`] accepts any
//! spelling made of alphabet characters.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use datum_core::{Division, Natural};

use crate::error::{EncodingError, Result};

/// An ordered table of digit characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    characters: &'static [u8],
    radix: NonZeroU32,
    case_insensitive: bool,
}

impl Alphabet {
    /// Build an alphabet from distinct ASCII digit characters, lowest
    /// value first.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two characters are given.
    pub const fn new(characters: &'static [u8], case_insensitive: bool) -> Self {
        assert!(characters.len() >= 2, "an alphabet needs at least two digits");
        let radix = match NonZeroU32::new(characters.len() as u32) {
            Some(radix) => radix,
            None => panic!("empty alphabet"),
        };
        Self {
            characters,
            radix,
            case_insensitive,
        }
    }

    pub fn radix(&self) -> NonZeroU32 {
        self.radix
    }

    /// The character for digit `0`.
    pub fn zero(&self) -> char {
        self.characters[0] as char
    }

    /// The character for `digit`, if it is below the radix.
    pub fn character(&self, digit: u32) -> Option<char> {
        self.characters.get(digit as usize).map(|&c| c as char)
    }

    /// The value of `c`, or `None` if it is not a digit of this alphabet.
    pub fn digit(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        let b = c as u8;
        self.characters
            .iter()
            .position(|&x| x == b || (self.case_insensitive && x.eq_ignore_ascii_case(&b)))
            .map(|p| p as u32)
    }

    /// Whether `c` is spelled exactly as in the table.
    fn is_exact(&self, c: char) -> bool {
        c.is_ascii() && self.characters.contains(&(c as u8))
    }
}

pub const DECIMAL: Alphabet = Alphabet::new(b"0123456789", false);

pub const HEX_LOWER: Alphabet = Alphabet::new(b"0123456789abcdef", true);

pub const HEX_UPPER: Alphabet = Alphabet::new(b"0123456789ABCDEF", true);

/// The base58 digits: base62 without `0`, `O`, `I` and `l`.
pub const BASE58: Alphabet = Alphabet::new(
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
    false,
);

/// Write `value` in the alphabet's base.
pub fn write(value: &Natural, alphabet: &Alphabet) -> String {
    if value.is_zero() {
        return alphabet.zero().to_string();
    }

    let mut digits = Vec::new();
    let mut n = value.clone();
    while !n.is_zero() {
        let Division {
            quotient,
            remainder,
        } = n.divide_small(alphabet.radix());
        digits.push(alphabet.characters[remainder as usize]);
        n = quotient;
    }

    digits.iter().rev().map(|&c| c as char).collect()
}

/// Read digit text into a natural, most significant digit first.
pub fn read(text: &str, alphabet: &Alphabet) -> Result<Natural> {
    if text.is_empty() {
        return Err(EncodingError::Empty);
    }

    let radix = Natural::from(alphabet.radix().get());
    let mut value = Natural::zero();
    for (position, character) in text.chars().enumerate() {
        let digit = alphabet.digit(character).ok_or_else(|| {
            tracing::trace!(%character, position, "character outside alphabet");
            EncodingError::InvalidCharacter {
                character,
                position,
            }
        })?;
        value = value * &radix + Natural::from(digit);
    }
    Ok(value)
}

/// Whether `text` is exactly what [`write`] would produce for its value.
pub fn is_canonical(text: &str, alphabet: &Alphabet) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !alphabet.is_exact(first) {
        return false;
    }
    if first == alphabet.zero() {
        return text.len() == 1;
    }
    chars.all(|c| alphabet.is_exact(c))
}

/// Compare two canonical numerals without decoding them.
///
/// Canonical spellings have no leading zero digit, so a longer string is a
/// larger number and equal-length strings order digit by digit. Either
/// argument being non-canonical makes the result meaningless.
pub fn compare(a: &str, b: &str, alphabet: &Alphabet) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| alphabet.digit(x).cmp(&alphabet.digit(y)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_single_digit() {
        assert_eq!(write(&Natural::zero(), &DECIMAL), "0");
        assert_eq!(write(&Natural::zero(), &BASE58), "1");
        assert_eq!(write(&Natural::zero(), &HEX_LOWER), "0");
    }

    #[test]
    fn test_write_known_values() {
        assert_eq!(write(&Natural::from(1234u64), &DECIMAL), "1234");
        assert_eq!(write(&Natural::from(255u64), &HEX_LOWER), "ff");
        assert_eq!(write(&Natural::from(255u64), &HEX_UPPER), "FF");
        assert_eq!(write(&Natural::from(57u64), &BASE58), "z");
        assert_eq!(write(&Natural::from(58u64), &BASE58), "21");
    }

    #[test]
    fn test_read_rejects_bad_input() {
        assert_eq!(read("", &DECIMAL), Err(EncodingError::Empty));
        assert_eq!(
            read("12x4", &DECIMAL),
            Err(EncodingError::InvalidCharacter {
                character: 'x',
                position: 2
            })
        );
        assert!(read("10O", &BASE58).is_err());
        assert!(read("l", &BASE58).is_err());
        assert!(read("é", &HEX_LOWER).is_err());
    }

    #[test]
    fn test_hex_lookup_ignores_case() {
        assert_eq!(read("fF", &HEX_LOWER).unwrap(), Natural::from(255u64));
        assert_eq!(read("Ff", &HEX_UPPER).unwrap(), Natural::from(255u64));
    }

    #[test]
    fn test_read_accepts_leading_zeros() {
        assert_eq!(read("0007", &DECIMAL).unwrap(), Natural::from(7u64));
        assert_eq!(read("1112", &BASE58).unwrap(), Natural::from(1u64));
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("1", &BASE58));
        assert!(is_canonical("21", &BASE58));
        assert!(!is_canonical("11", &BASE58));
        assert!(!is_canonical("", &BASE58));
        assert!(is_canonical("ff", &HEX_LOWER));
        assert!(!is_canonical("FF", &HEX_LOWER));
        assert!(!is_canonical("0f", &HEX_LOWER));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare("z", "21", &BASE58), Ordering::Less);
        assert_eq!(compare("22", "21", &BASE58), Ordering::Greater);
        assert_eq!(compare("a", "Z", &BASE58), Ordering::Greater);
        assert_eq!(compare("99", "99", &DECIMAL), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_natural(bytes in any::<Vec<u8>>()) {
            let n = Natural::from_bytes_be(&bytes);
            for alphabet in [&DECIMAL, &HEX_LOWER, &BASE58] {
                let text = write(&n, alphabet);
                prop_assert!(is_canonical(&text, alphabet));
                prop_assert_eq!(read(&text, alphabet).unwrap(), n.clone());
            }
        }

        #[test]
        fn prop_compare_matches_values(a in any::<u64>(), b in any::<u64>()) {
            let x = write(&Natural::from(a), &BASE58);
            let y = write(&Natural::from(b), &BASE58);
            prop_assert_eq!(compare(&x, &y, &BASE58), a.cmp(&b));
        }

        #[test]
        fn prop_decimal_matches_display(a in any::<u64>()) {
            prop_assert_eq!(write(&Natural::from(a), &DECIMAL), a.to_string());
        }
    }
}
