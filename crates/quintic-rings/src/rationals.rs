//! The field of rational numbers Q.

use quintic_integers::Rational;

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// The field of rational numbers, a [`Field`] capability over exact
/// reduced fractions.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero. Construct through
    /// [`Rational::new`] to handle that case as an error.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den).expect("denominator cannot be zero"))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
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

impl Ring for Q {
    fn zero() -> Self {
        use num_traits::Zero;
        Self(Rational::zero())
    }

    fn one() -> Self {
        use num_traits::One;
        Self(Rational::one())
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

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // Division in a field is exact; the remainder is always zero.
        let q = self.0.checked_div(&other.0).expect("division by zero");
        (Self(q), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        // Any non-zero element of a field divides any other.
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
            // 1 = self * 0 + other * (1/other)
            let inv = other.0.recip().expect("checked non-zero");
            (Self::one(), Self::zero(), Self(inv))
        } else {
            // 1 = self * (1/self) + other * 0
            let inv = self.0.recip().expect("checked non-zero");
            (Self::one(), Self(inv), Self::zero())
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        self.0.recip().ok().map(Self)
    }
}

// Arithmetic operations
impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
