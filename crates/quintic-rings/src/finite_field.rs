//! Prime fields Z_p.

use std::fmt;

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// The prime field GF(p) for a prime modulus `P`.
///
/// Elements are stored reduced into `0..P`. Inversion uses Fermat's
/// little theorem, so `P` must actually be prime; a composite modulus
/// silently breaks `inv`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct GF<const P: u64> {
    value: u64,
}

impl<const P: u64> GF<P> {
    /// Creates a new field element, reducing modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value: value % P }
    }

    /// Creates a field element from a signed value.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn from_signed(value: i64) -> Self {
        let reduced = value.rem_euclid(P as i64);
        Self::new(reduced as u64)
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    /// Computes self^exp by binary exponentiation.
    #[must_use]
    pub fn pow_u64(self, mut exp: u64) -> Self {
        let mut result = Self::new(1);
        let mut base = self;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }
}

impl<const P: u64> Ring for GF<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn is_one(&self) -> bool {
        self.value == 1
    }
}

impl<const P: u64> CommutativeRing for GF<P> {}
impl<const P: u64> IntegralDomain for GF<P> {}

impl<const P: u64> EuclideanDomain for GF<P> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // Division in a field is exact.
        (self.field_div(other), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if self.is_zero() && other.is_zero() {
            return (Self::zero(), Self::zero(), Self::zero());
        }

        if self.is_zero() {
            let inv = other.inv().expect("checked non-zero");
            (Self::one(), Self::zero(), inv)
        } else {
            let inv = self.inv().expect("checked non-zero");
            (Self::one(), inv, Self::zero())
        }
    }
}

impl<const P: u64> Field for GF<P> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Fermat: a^(p-2) = a^(-1) mod p
            Some(self.pow_u64(P - 2))
        }
    }
}

impl<const P: u64> std::ops::Add for GF<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = u128::from(self.value) + u128::from(rhs.value);
        #[allow(clippy::cast_possible_truncation)]
        Self {
            value: (sum % u128::from(P)) as u64,
        }
    }
}

impl<const P: u64> std::ops::Sub for GF<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> std::ops::Mul for GF<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let prod = u128::from(self.value) * u128::from(rhs.value);
        #[allow(clippy::cast_possible_truncation)]
        Self {
            value: (prod % u128::from(P)) as u64,
        }
    }
}

impl<const P: u64> std::ops::Neg for GF<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.value == 0 {
            self
        } else {
            Self {
                value: P - self.value,
            }
        }
    }
}

impl<const P: u64> fmt::Display for GF<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type GF7 = GF<7>;

    #[test]
    fn test_arithmetic() {
        let a = GF7::new(5);
        let b = GF7::new(4);

        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((a * b).value(), 6);
        assert_eq!((-a).value(), 2);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(GF7::from_signed(-1).value(), 6);
        assert_eq!(GF7::from_signed(14).value(), 0);
    }

    #[test]
    fn test_inverse() {
        for v in 1..7 {
            let a = GF7::new(v);
            let inv = a.inv().unwrap();
            assert!((a * inv).is_one());
        }
        assert_eq!(GF7::new(0).inv(), None);
    }
}
