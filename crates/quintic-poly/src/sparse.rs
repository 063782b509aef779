//! Sparse multivariate polynomials.
//!
//! A polynomial is a mapping from monomials to non-zero coefficients,
//! stored as a term list sorted descending under the polynomial's
//! monomial order. The zero polynomial has no terms.

use rustc_hash::FxHashMap;
use thiserror::Error;

use quintic_rings::Ring;

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// The zero polynomial has no leading term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the zero polynomial has no leading term")]
pub struct EmptyPolynomialError;

/// A sparse multivariate polynomial over a ring `R`.
///
/// # Invariants
///
/// - No stored coefficient is `R::zero()`
/// - Terms are sorted strictly descending under `order`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    terms: Vec<(Monomial, R)>,
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a polynomial from terms, combining duplicate monomials
    /// and dropping zero coefficients.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, order: MonomialOrder) -> Self {
        let mut poly = Self { terms, order };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(order: MonomialOrder) -> Self {
        Self {
            terms: vec![(Monomial::one(), R::one())],
            order,
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, order: MonomialOrder) -> Self {
        if c.is_zero() {
            Self::zero(order)
        } else {
            Self {
                terms: vec![(Monomial::one(), c)],
                order,
            }
        }
    }

    /// Creates the polynomial x_i.
    #[must_use]
    pub fn var(i: usize, order: MonomialOrder) -> Self {
        Self {
            terms: vec![(Monomial::var(i), R::one())],
            order,
        }
    }

    /// Creates a single-term polynomial `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: R, order: MonomialOrder) -> Self {
        if c.is_zero() {
            Self::zero(order)
        } else {
            Self {
                terms: vec![(m, c)],
                order,
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the monomial order.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms, sorted descending under the order.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Returns the leading monomial, if any.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient, if any.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term under the polynomial's order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPolynomialError`] for the zero polynomial, which
    /// has no leading term by definition.
    pub fn leading_term(&self) -> Result<&(Monomial, R), EmptyPolynomialError> {
        self.terms.first().ok_or(EmptyPolynomialError)
    }

    /// Returns the same polynomial re-sorted under a different order.
    #[must_use]
    pub fn reordered(&self, order: MonomialOrder) -> Self {
        if self.order == order {
            return self.clone();
        }
        Self::new(self.terms.clone(), order)
    }

    /// Sorts terms descending, combines like terms, drops zeros.
    fn normalize(&mut self) {
        self.terms
            .sort_by(|a, b| self.order.compare(&b.0, &a.0));

        let mut merged: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last_m, last_c)) if *last_m == m => {
                    *last_c = last_c.clone() + c;
                }
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());

        self.terms = merged;
    }

    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the operands carry different monomial orders.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert!(self.order == other.order, "mismatched monomial orders");

        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());

        Self::new(terms, self.order)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the operands carry different monomial orders.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by convolution.
    ///
    /// # Panics
    ///
    /// Panics if the operands carry different monomial orders.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert!(self.order == other.order, "mismatched monomial orders");

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.order);
        }

        let mut acc: FxHashMap<Monomial, R> = FxHashMap::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let m = m1.mul(m2);
                let c = c1.clone() * c2.clone();
                acc.entry(m)
                    .and_modify(|v| *v = v.clone() + c.clone())
                    .or_insert(c);
            }
        }

        Self::new(acc.into_iter().collect(), self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.order);
        }

        Self::new(
            self.terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .collect(),
            self.order,
        )
    }

    /// Multiplies by the single term `c * m`: every stored coefficient
    /// is scaled by `c` and every key shifted by `m`.
    #[must_use]
    pub fn mul_term(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.order);
        }

        Self::new(
            self.terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
                .collect(),
            self.order,
        )
    }

    /// Computes the total degree (zero for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }
}

impl<R: Ring> std::fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(m, c)| {
                if m.is_one() {
                    format!("{c:?}")
                } else {
                    format!("{c:?}*{m}")
                }
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quintic_rings::Q;

    #[test]
    fn test_zero_coefficients_are_dropped() {
        let p = SparsePoly::new(
            vec![
                (Monomial::var(0), Q::from_integer(1)),
                (Monomial::var(0), Q::from_integer(-1)),
                (Monomial::one(), Q::from_integer(2)),
            ],
            MonomialOrder::Grevlex,
        );
        assert_eq!(p.len(), 1);
        assert_eq!(p, SparsePoly::constant(Q::from_integer(2), p.order()));
    }

    #[test]
    fn test_add_sub() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, order);
        let y = SparsePoly::<Q>::var(1, order);

        let sum = x.add(&y);
        assert_eq!(sum.len(), 2);
        assert!(sum.sub(&x).sub(&y).is_zero());
    }

    #[test]
    fn test_mul() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, order);
        let one = SparsePoly::one(order);

        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = x.add(&one);
        let sq = xp1.mul(&xp1);
        assert_eq!(sq.len(), 3);
        assert_eq!(
            sq.terms()[1],
            (Monomial::var(0), Q::from_integer(2))
        );
    }

    #[test]
    fn test_leading_term() {
        let order = MonomialOrder::Lex;
        let p = SparsePoly::new(
            vec![
                (Monomial::new(&[0, 2]), Q::from_integer(1)),
                (Monomial::new(&[1, 0]), Q::from_integer(3)),
            ],
            order,
        );

        // In lex, x > y^2.
        let (m, c) = p.leading_term().unwrap();
        assert_eq!(m, &Monomial::var(0));
        assert_eq!(c, &Q::from_integer(3));

        assert_eq!(
            SparsePoly::<Q>::zero(order).leading_term(),
            Err(EmptyPolynomialError)
        );
    }

    #[test]
    fn test_mul_term() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, order);
        let one = SparsePoly::one(order);
        let p = x.add(&one); // x + 1

        // y * (x + 1) scaled by 2 = 2xy + 2y
        let shifted = p.mul_term(&Monomial::var(1), &Q::from_integer(2));
        assert_eq!(shifted.len(), 2);
        assert_eq!(
            shifted.leading_monomial(),
            Some(&Monomial::new(&[1, 1]))
        );
        assert_eq!(shifted.leading_coeff(), Some(&Q::from_integer(2)));
    }

    #[test]
    fn test_reordered() {
        let p = SparsePoly::new(
            vec![
                (Monomial::new(&[1]), Q::from_integer(1)),
                (Monomial::new(&[0, 2]), Q::from_integer(1)),
            ],
            MonomialOrder::Lex,
        );
        assert_eq!(p.leading_monomial(), Some(&Monomial::var(0)));

        let q = p.reordered(MonomialOrder::Grevlex);
        assert_eq!(q.leading_monomial(), Some(&Monomial::new(&[0, 2])));
    }
}
