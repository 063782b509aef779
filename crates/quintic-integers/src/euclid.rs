//! The extended Euclidean algorithm.
//!
//! This module is the arithmetic bedrock of the crate: rational
//! normalisation and every gcd in the engine flow through it.

use num_traits::{One, Zero};

use crate::Integer;

/// The result of the extended Euclidean algorithm.
///
/// # Invariant
///
/// For the inputs `(a, b)` that produced it: `a*x + b*y == gcd`, with
/// `gcd == gcd(|a|, |b|) >= 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bezout {
    /// The greatest common divisor of the inputs (non-negative).
    pub gcd: Integer,
    /// The coefficient of the first input in the Bezout identity.
    pub x: Integer,
    /// The coefficient of the second input in the Bezout identity.
    pub y: Integer,
}

/// Computes gcd and Bezout coefficients for two integers.
///
/// The core loop runs a Euclidean descent on `(|a|, |b|)` while tracking
/// a 2x2 coefficient matrix, initially the identity. On termination the
/// first matrix column holds the Bezout coefficients for the non-negative
/// operands; the sign of each original input is then folded back into its
/// coefficient so the identity holds for the signed inputs.
///
/// Defined for all integers, including zero: `gcd(0, b) == |b|` and
/// `gcd(0, 0) == 0`.
#[must_use]
pub fn extended_gcd(a: &Integer, b: &Integer) -> Bezout {
    let mut r0 = a.abs();
    let mut r1 = b.abs();

    // (m1 m2; m3 m4), maintaining r0 = |a|*m1 + |b|*m3 and
    // r1 = |a|*m2 + |b|*m4 throughout the descent.
    let mut m1 = Integer::one();
    let mut m2 = Integer::zero();
    let mut m3 = Integer::zero();
    let mut m4 = Integer::one();

    while !r1.is_zero() {
        let (q, r) = r0.div_rem(&r1);
        r0 = r1;
        r1 = r;

        let next = m1 - q.clone() * &m2;
        m1 = m2;
        m2 = next;

        let next = m3 - q * &m4;
        m3 = m4;
        m4 = next;
    }

    let x = if a.is_negative() { -m1 } else { m1 };
    let y = if b.is_negative() { -m3 } else { m3 };

    Bezout { gcd: r0, x, y }
}

/// Computes the greatest common divisor of two integers.
///
/// Same descent as [`extended_gcd`] without the coefficient tracking.
/// The result is always non-negative.
#[must_use]
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    let mut r0 = a.abs();
    let mut r1 = b.abs();

    while !r1.is_zero() {
        let (_, r) = r0.div_rem(&r1);
        r0 = r1;
        r1 = r;
    }

    r0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(a: i64, b: i64, expected_gcd: i64) {
        let (ia, ib) = (Integer::new(a), Integer::new(b));
        let bez = extended_gcd(&ia, &ib);

        assert_eq!(bez.gcd.to_i64(), Some(expected_gcd));
        // a*x + b*y == gcd for the original signed inputs
        let identity = ia * bez.x + ib * bez.y;
        assert_eq!(identity.to_i64(), Some(expected_gcd));
    }

    #[test]
    fn test_positive_inputs() {
        check(48, 18, 6);
        check(18, 48, 6);
        check(17, 5, 1);
    }

    #[test]
    fn test_sign_combinations() {
        check(-48, 18, 6);
        check(48, -18, 6);
        check(-48, -18, 6);
        check(-17, 5, 1);
        check(17, -5, 1);
    }

    #[test]
    fn test_zero_inputs() {
        check(0, 7, 7);
        check(7, 0, 7);
        check(0, -7, 7);
        check(0, 0, 0);
    }

    #[test]
    fn test_plain_gcd() {
        assert_eq!(
            gcd(&Integer::new(-27), &Integer::new(9)).to_i64(),
            Some(9)
        );
        assert_eq!(gcd(&Integer::new(0), &Integer::new(0)).to_i64(), Some(0));
    }
}
