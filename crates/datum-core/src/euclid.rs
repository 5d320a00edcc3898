//! The extended Euclidean algorithm.

use crate::division::Division;
use crate::integer::Integer;
use crate::natural::Natural;

/// Result of the extended Euclidean algorithm: `a*x + b*y == gcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Euclid {
    pub gcd: Natural,
    pub x: Integer,
    pub y: Integer,
}

/// Compute `gcd(a, b)` together with Bézout coefficients.
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn extended_gcd(a: &Natural, b: &Natural) -> Euclid {
    let (mut r0, mut r1) = (a.clone(), b.clone());
    let (mut x0, mut x1) = (Integer::one(), Integer::zero());
    let (mut y0, mut y1) = (Integer::zero(), Integer::one());

    while !r1.is_zero() {
        let Division {
            quotient,
            remainder,
        } = r0.divide_nonzero(&r1);
        let q = Integer::from(quotient);

        let x2 = &x0 - &(&q * &x1);
        let y2 = &y0 - &(&q * &y1);

        r0 = std::mem::replace(&mut r1, remainder);
        x0 = std::mem::replace(&mut x1, x2);
        y0 = std::mem::replace(&mut y1, y2);
    }

    Euclid {
        gcd: r0,
        x: x0,
        y: y0,
    }
}

/// Greatest common divisor.
pub fn gcd(a: &Natural, b: &Natural) -> Natural {
    extended_gcd(a, b).gcd
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn n(x: u64) -> Natural {
        Natural::from(x)
    }

    #[test]
    fn test_gcd_known() {
        assert_eq!(gcd(&n(12), &n(18)), n(6));
        assert_eq!(gcd(&n(17), &n(5)), n(1));
        assert_eq!(gcd(&n(0), &n(9)), n(9));
        assert_eq!(gcd(&n(9), &n(0)), n(9));
        assert_eq!(gcd(&n(0), &n(0)), n(0));
    }

    #[test]
    fn test_bezout_coefficients() {
        let e = extended_gcd(&n(240), &n(46));
        assert_eq!(e.gcd, n(2));
        assert_eq!(
            Integer::from(240i64) * &e.x + Integer::from(46i64) * &e.y,
            Integer::from(2i64)
        );
    }

    proptest! {
        #[test]
        fn prop_bezout_identity(a in any::<u64>(), b in any::<u64>()) {
            let e = extended_gcd(&n(a), &n(b));
            let lhs = Integer::from(n(a)) * &e.x + Integer::from(n(b)) * &e.y;
            prop_assert_eq!(lhs, Integer::from(e.gcd.clone()));
        }

        #[test]
        fn prop_gcd_divides_both(a in 1u64.., b in 1u64..) {
            use crate::division::Divide;
            let g = gcd(&n(a), &n(b));
            prop_assert!(n(a).divide(&g).unwrap().remainder.is_zero());
            prop_assert!(n(b).divide(&g).unwrap().remainder.is_zero());
        }
    }
}
