//! Machine-integer capability instances.
//!
//! `i64` satisfies the ring operations directly, so the traits are
//! implemented on the primitive itself. Useful for small exact
//! computations where arbitrary precision is overkill; arithmetic
//! overflow panics in debug builds like any other `i64` arithmetic.
//!
//! Floating-point types are deliberately not instances: `Ring` requires
//! `Eq`, and approximate arithmetic is outside this engine's contract.

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, Ring};

impl Ring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}

impl CommutativeRing for i64 {}
impl IntegralDomain for i64 {}

impl EuclideanDomain for i64 {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self / other, self % other)
    }

    fn gcd(&self, other: &Self) -> Self {
        let mut a = *self;
        let mut b = *other;

        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }

        a.abs()
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = *self;
        let mut r = *other;
        let mut old_s = 1;
        let mut s = 0;
        let mut old_t = 0;
        let mut t = 1;

        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
            (old_t, t) = (t, old_t - q * t);
        }

        if old_r < 0 {
            (-old_r, -old_s, -old_t)
        } else {
            (old_r, old_s, old_t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_instance() {
        assert!(<i64 as Ring>::zero().is_zero());
        assert!(<i64 as Ring>::one().is_one());
        assert_eq!(3i64.pow(4), 81);
        assert_eq!(5i64.mul_by_scalar(-2), -10);
    }

    #[test]
    fn test_gcd_sign() {
        assert_eq!((-48i64).gcd(&18), 6);
        assert_eq!(48i64.gcd(&-18), 6);
        assert_eq!(0i64.gcd(&0), 0);
    }

    #[test]
    fn test_extended_gcd_identity() {
        for (a, b) in [(48i64, 18), (-48, 18), (48, -18), (-48, -18), (0, 7)] {
            let (g, x, y) = a.extended_gcd(&b);
            assert_eq!(a * x + b * y, g);
            assert!(g >= 0);
        }
    }
}
