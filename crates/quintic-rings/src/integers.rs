//! The ring of integers Z.

use quintic_integers::{euclid, Integer};

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, Ring};

/// The ring of integers, an [`EuclideanDomain`] capability over
/// arbitrary-precision [`Integer`] values.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl Ring for Z {
    fn zero() -> Self {
        use num_traits::Zero;
        Self(Integer::zero())
    }

    fn one() -> Self {
        use num_traits::One;
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }
}

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let (q, r) = self.0.div_rem(&other.0);
        (Self(q), Self(r))
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let bez = euclid::extended_gcd(&self.0, &other.0);
        (Self(bez.gcd), Self(bez.x), Self(bez.y))
    }
}

// Arithmetic operations
impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_laws() {
        let a = Z::new(10);
        let b = Z::new(3);

        assert!(Z::zero().is_zero());
        assert!(Z::one().is_one());
        assert_eq!((a.clone() + b.clone()).0.to_i64(), Some(13));
        assert_eq!((a * b).0.to_i64(), Some(30));
    }

    #[test]
    fn test_euclidean_domain() {
        let a = Z::new(17);
        let b = Z::new(5);

        let (q, r) = a.div_rem(&b);
        assert_eq!(q.0.to_i64(), Some(3));
        assert_eq!(r.0.to_i64(), Some(2));
    }

    #[test]
    fn test_extended_gcd() {
        let a = Z::new(-48);
        let b = Z::new(18);

        let (g, x, y) = a.extended_gcd(&b);
        assert_eq!(g.0.to_i64(), Some(6));

        // gcd = a*x + b*y for the signed inputs
        let check = a * x + b * y;
        assert_eq!(check.0.to_i64(), Some(6));
    }
}
