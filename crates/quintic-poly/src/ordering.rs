//! Monomial orders.
//!
//! Every order here is total, compatible with multiplication
//! (`a < b` implies `a*k < b*k`), and has the constant monomial as its
//! unique minimum. Those three properties are exactly what the division
//! algorithm and Buchberger's algorithm need to terminate.

use std::cmp::Ordering;

use crate::monomial::Monomial;

/// A monomial order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic: the first variable with differing exponents decides.
    Lex,

    /// Graded lexicographic: total degree first, lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic: total degree first, then the last
    /// variable with differing exponents decides, reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials under this order.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => a
                .total_degree()
                .cmp(&b.total_degree())
                .then_with(|| cmp_lex(a, b)),
            MonomialOrder::Grevlex => a
                .total_degree()
                .cmp(&b.total_degree())
                .then_with(|| cmp_revlex(a, b)),
        }
    }

    /// Returns a short name for the order.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    let n = a.arity().max(b.arity());
    for i in 0..n {
        match a.exponent(i).cmp(&b.exponent(i)) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

fn cmp_revlex(a: &Monomial, b: &Monomial) -> Ordering {
    let n = a.arity().max(b.arity());
    for i in (0..n).rev() {
        match b.exponent(i).cmp(&a.exponent(i)) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_order() {
        let order = MonomialOrder::Lex;

        let x = Monomial::var(0);
        let y = Monomial::var(1);
        let y2 = y.mul(&y);

        assert_eq!(order.compare(&x, &y), Ordering::Greater);
        // The first variable dominates regardless of degree.
        assert_eq!(order.compare(&x, &y2), Ordering::Greater);
    }

    #[test]
    fn test_grlex_order() {
        let order = MonomialOrder::Grlex;

        let x = Monomial::var(0);
        let xy = Monomial::new(&[1, 1]);
        let x2 = Monomial::new(&[2]);

        // Higher degree wins, then lex.
        assert_eq!(order.compare(&xy, &x), Ordering::Greater);
        assert_eq!(order.compare(&x2, &xy), Ordering::Greater);
    }

    #[test]
    fn test_grevlex_order() {
        let order = MonomialOrder::Grevlex;

        let x2 = Monomial::new(&[2, 0]);
        let xy = Monomial::new(&[1, 1]);
        let y2 = Monomial::new(&[0, 2]);
        let x = Monomial::var(0);

        // Same degree: x^2 > xy > y^2
        assert_eq!(order.compare(&x2, &xy), Ordering::Greater);
        assert_eq!(order.compare(&xy, &y2), Ordering::Greater);

        // Higher degree wins: xy > x
        assert_eq!(order.compare(&xy, &x), Ordering::Greater);
    }

    #[test]
    fn test_one_is_minimum() {
        let one = Monomial::one();
        for order in [
            MonomialOrder::Lex,
            MonomialOrder::Grlex,
            MonomialOrder::Grevlex,
        ] {
            for m in [Monomial::var(0), Monomial::var(3), Monomial::new(&[0, 2])] {
                assert_eq!(order.compare(&m, &one), Ordering::Greater);
            }
        }
    }
}
