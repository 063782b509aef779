//! Canonical reduced fractions.
//!
//! A [`Rational`] is a `numerator/denominator` pair kept in lowest terms
//! with a positive denominator. Normalisation runs through
//! [`crate::euclid::gcd`], never through floating point.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::ArithmeticError;
use crate::euclid;
use crate::Integer;

/// An exact rational number in canonical form.
///
/// # Invariants
///
/// - `den > 0`
/// - `gcd(|num|, den) == 1` (zero is stored as `0/1`)
#[derive(Clone, Eq)]
pub struct Rational {
    num: Integer,
    den: Integer,
}

impl Rational {
    /// Creates a rational from numerator and denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `den` is zero.
    pub fn new(num: Integer, den: Integer) -> Result<Self, ArithmeticError> {
        if den.is_zero() {
            return Err(ArithmeticError::DivisionByZero { numerator: num });
        }
        Ok(Self::normalized(num, den))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `den` is zero.
    pub fn from_i64(num: i64, den: i64) -> Result<Self, ArithmeticError> {
        Self::new(Integer::new(num), Integer::new(den))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            num: n,
            den: Integer::one(),
        }
    }

    /// Reduces an arbitrary pair with non-zero denominator.
    fn normalized(num: Integer, den: Integer) -> Self {
        debug_assert!(!den.is_zero());

        let g = euclid::gcd(&num, &den);
        let mut num = num / &g;
        let mut den = den / &g;
        if den.is_negative() {
            num = -num;
            den = -den;
        }

        Self { num, den }
    }

    /// Builds a rational from a pair already known to be in canonical
    /// form, skipping the gcd.
    ///
    /// Only for callers inside this crate that can prove the invariants;
    /// arbitrary input must go through [`Rational::new`].
    pub(crate) fn from_reduced(num: Integer, den: Integer) -> Self {
        debug_assert!(!den.is_negative() && !den.is_zero());
        debug_assert!(euclid::gcd(&num, &den).is_one());
        Self { num, den }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.num.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.num.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero {
                numerator: Integer::one(),
            });
        }
        let (mut num, mut den) = (self.den.clone(), self.num.clone());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Ok(Self::from_reduced(num, den))
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero {
                numerator: self.num.clone(),
            });
        }
        Ok(Self::normalized(
            &self.num * &rhs.den,
            &self.den * &rhs.num,
        ))
    }

    /// Computes self^exp for non-negative exp.
    ///
    /// Powers of a reduced fraction stay reduced, so no gcd is needed.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        Self::from_reduced(self.num.pow(exp), self.den.pow(exp))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

// Equality and ordering compare by cross-multiplication, a*d <=> c*b,
// so they are well-defined for any representation of the same value.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.num * &other.den == &other.num * &self.den
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Canonical form makes equal values structurally identical.
        self.num.hash(state);
        self.den.hash(state);
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::normalized(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::normalized(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::normalized(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero; use [`Rational::checked_div`] to recover.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

// Mixed operations with machine integers promote to k/1 first.
impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self + Self::from(rhs)
    }
}

impl Sub<i64> for Rational {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        self - Self::from(rhs)
    }
}

impl Mul<i64> for Rational {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self * Self::from(rhs)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
