//! Polynomial ideals as finite generating sets.

use quintic_rings::{Field, Ring};

use quintic_poly::SparsePoly;

/// A finite, ordered generating set of a polynomial ideal.
///
/// The engine never mutates an `Ideal` it is given; Buchberger's
/// algorithm clones the generators into a private growable basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ideal<R: Ring> {
    generators: Vec<SparsePoly<R>>,
}

impl<R: Ring> Ideal<R> {
    /// Creates an ideal from its generators, kept in the given order.
    #[must_use]
    pub fn new(generators: Vec<SparsePoly<R>>) -> Self {
        Self { generators }
    }

    /// Returns the generators.
    #[must_use]
    pub fn generators(&self) -> &[SparsePoly<R>] {
        &self.generators
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns true if there are no generators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl<R: Field> Ideal<R> {
    /// Reduces a polynomial modulo the generators (division remainder).
    #[must_use]
    pub fn reduce(&self, p: &SparsePoly<R>) -> SparsePoly<R> {
        p.div_rem(&self.generators).remainder
    }

    /// Returns true if `p` reduces to zero against the generators.
    ///
    /// When the generators form a Groebner basis this is an exact ideal
    /// membership test; for an arbitrary generating set it is only a
    /// sufficient condition.
    #[must_use]
    pub fn reduces_to_zero(&self, p: &SparsePoly<R>) -> bool {
        self.reduce(p).is_zero()
    }
}

impl<R: Ring> From<Vec<SparsePoly<R>>> for Ideal<R> {
    fn from(generators: Vec<SparsePoly<R>>) -> Self {
        Self::new(generators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quintic_poly::{Monomial, MonomialOrder};
    use quintic_rings::Q;

    #[test]
    fn test_reduce() {
        let order = MonomialOrder::Lex;
        let x = SparsePoly::<Q>::var(0, order);
        let ideal = Ideal::new(vec![x.clone()]);

        // x^2 + 1 reduces to 1 modulo (x)
        let p = x.mul(&x).add(&SparsePoly::one(order));
        let r = ideal.reduce(&p);
        assert_eq!(r, SparsePoly::one(order));

        assert!(ideal.reduces_to_zero(&x.mul(&x)));
        assert!(!ideal.reduces_to_zero(&SparsePoly::term(
            Monomial::var(1),
            Q::from_integer(1),
            order
        )));
    }
}
