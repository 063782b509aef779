//! Exponent-vector monomials.
//!
//! A monomial is a product of indeterminates raised to non-negative
//! powers, stored as a vector of `u16` exponents with the total degree
//! cached. Exponent vectors are kept free of trailing zeros so that
//! equality and hashing are independent of how many variables a caller
//! happened to mention.

use std::fmt;

use smallvec::SmallVec;

/// Inline storage for up to 8 variables before spilling to the heap.
type Exponents = SmallVec<[u16; 8]>;

/// A monomial: one exponent per indeterminate, trailing zeros trimmed.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    exps: Exponents,
    degree: u32,
}

impl Monomial {
    /// Creates a monomial from exponents.
    #[must_use]
    pub fn new(exps: &[u16]) -> Self {
        Self::from_raw(exps.iter().copied().collect())
    }

    fn from_raw(mut exps: Exponents) -> Self {
        while exps.last() == Some(&0) {
            exps.pop();
        }
        let degree = exps.iter().map(|&e| u32::from(e)).sum();
        Self { exps, degree }
    }

    /// Creates the constant monomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial x_i.
    #[must_use]
    pub fn var(i: usize) -> Self {
        let mut exps = Exponents::new();
        exps.resize(i + 1, 0);
        exps[i] = 1;
        Self { exps, degree: 1 }
    }

    /// Returns the exponent of variable i (zero beyond the stored arity).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u16 {
        self.exps.get(i).copied().unwrap_or(0)
    }

    /// Returns the stored exponents (no trailing zeros).
    #[must_use]
    pub fn exponents(&self) -> &[u16] {
        &self.exps
    }

    /// Returns the index one past the last variable with a non-zero
    /// exponent.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.exps.len()
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.degree
    }

    /// Returns true if this is the constant monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.degree == 0
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.exps.len().max(other.exps.len());
        let mut exps = Exponents::with_capacity(n);
        for i in 0..n {
            exps.push(self.exponent(i) + other.exponent(i));
        }

        Self {
            exps,
            degree: self.degree + other.degree,
        }
    }

    /// Returns true if `self` divides `other`, i.e. every exponent of
    /// `self` is at most the corresponding exponent of `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        if self.degree > other.degree {
            return false;
        }
        self.exps
            .iter()
            .enumerate()
            .all(|(i, &e)| e <= other.exponent(i))
    }

    /// Divides `self` by `other` if divisible.
    ///
    /// Returns `None` when some exponent of `other` exceeds `self`'s.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !other.divides(self) {
            return None;
        }

        let mut exps = self.exps.clone();
        for (i, e) in other.exps.iter().enumerate() {
            exps[i] -= e;
        }

        Some(Self::from_raw(exps))
    }

    /// Computes the least common multiple (component-wise maximum).
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let n = self.exps.len().max(other.exps.len());
        let mut exps = Exponents::with_capacity(n);
        for i in 0..n {
            exps.push(self.exponent(i).max(other.exponent(i)));
        }

        Self::from_raw(exps)
    }

    /// Computes the lcm of two monomials together with the cofactors
    /// `(lcm / self, lcm / other)`.
    ///
    /// Satisfies `self * c1 == other * c2 == lcm`.
    #[must_use]
    pub fn lcm_cofactors(&self, other: &Self) -> (Self, Self, Self) {
        let n = self.exps.len().max(other.exps.len());
        let mut lcm = Exponents::with_capacity(n);
        let mut c1 = Exponents::with_capacity(n);
        let mut c2 = Exponents::with_capacity(n);

        for i in 0..n {
            let (a, b) = (self.exponent(i), other.exponent(i));
            let m = a.max(b);
            lcm.push(m);
            c1.push(m - a);
            c2.push(m - b);
        }

        (
            Self::from_raw(lcm),
            Self::from_raw(c1),
            Self::from_raw(c2),
        )
    }

    /// Computes the greatest common divisor (component-wise minimum).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let n = self.exps.len().min(other.exps.len());
        let mut exps = Exponents::with_capacity(n);
        for i in 0..n {
            exps.push(self.exps[i].min(other.exps[i]));
        }

        Self::from_raw(exps)
    }

    /// Returns true if the monomials share no variable (gcd = 1).
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        let n = self.exps.len().min(other.exps.len());
        (0..n).all(|i| self.exps[i] == 0 || other.exps[i] == 0)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }

        let vars = ['x', 'y', 'z', 'w', 'u', 'v'];
        let mut first = true;
        for (i, &e) in self.exps.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;

            if i < vars.len() {
                write!(f, "{}", vars[i])?;
            } else {
                write!(f, "x{i}")?;
            }
            if e > 1 {
                write!(f, "^{e}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono({self})")
    }
}
