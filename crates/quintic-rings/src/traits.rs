//! Algebraic capability traits.
//!
//! A capability is the set of operations an algorithm needs from its
//! coefficients, and nothing more: polynomial arithmetic asks for a
//! [`Ring`], basis reduction asks for a [`Field`]. Algorithms receive the
//! capability as an explicit trait bound rather than reaching for any
//! ambient numeric type.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring: a set closed under addition, subtraction and multiplication.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times), negated for negative n.
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        for _ in 1..n.unsigned_abs() {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring whose multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A commutative ring with no zero divisors: a*b = 0 implies a = 0 or b = 0.
pub trait IntegralDomain: CommutativeRing {}

/// An integral domain with division-with-remainder.
///
/// For any `a`, `b` with `b != 0` there are `q`, `r` with `a = b*q + r`
/// and `r` strictly smaller than `b` under the domain's Euclidean measure.
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Computes the quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Computes a greatest common divisor.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a
    }

    /// Computes a least common multiple.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        self.div(&g) * other.clone()
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(gcd, x, y)` such that `gcd = self*x + other*y`.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);
}

/// A field: every non-zero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Q;

    #[test]
    fn test_pow_defaults() {
        let two = Q::from_integer(2);
        assert_eq!(two.pow(0), Q::one());
        assert_eq!(two.pow(10), Q::from_integer(1024));
    }

    #[test]
    fn test_mul_by_scalar() {
        let third = Q::new(1, 3);
        assert_eq!(third.mul_by_scalar(3), Q::one());
        assert_eq!(third.mul_by_scalar(-3), -Q::one());
        assert!(third.mul_by_scalar(0).is_zero());
    }
}
