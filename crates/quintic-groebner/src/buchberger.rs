//! Buchberger's algorithm.
//!
//! Completion of a generating set to a Groebner basis: enumerate pairs,
//! form S-polynomials, reduce them against the current basis, and append
//! every non-zero remainder until the basis is closed under reduction.
//! Termination rests on the ascending-chain condition for the monomial
//! ideals generated by leading terms; each appended remainder strictly
//! enlarges that ideal, which can only happen finitely often.

use thiserror::Error;

use quintic_poly::{MonomialOrder, SparsePoly};
use quintic_rings::Field;

use crate::criteria::product_criterion;
use crate::ideal::Ideal;

/// An error from basis computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroebnerError {
    /// The configured basis-size cap was reached before completion.
    ///
    /// With a valid monomial order this means the cap was simply too
    /// small; with an invalid one it is the only way the engine reports
    /// what would otherwise be non-termination.
    #[error("basis grew past the configured limit of {limit} elements")]
    BasisLimitExceeded {
        /// The configured cap that was exceeded.
        limit: usize,
    },
}

/// Configuration for [`Buchberger`].
#[derive(Clone, Debug)]
pub struct BuchbergerConfig {
    /// Maximum basis size before aborting (0 = no limit).
    ///
    /// A safety net for callers that cannot vouch for their monomial
    /// order; see [`GroebnerError::BasisLimitExceeded`].
    pub max_basis: usize,
    /// Whether to skip pairs with coprime leading monomials.
    pub use_product_criterion: bool,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            max_basis: 0,
            use_product_criterion: true,
        }
    }
}

/// The Buchberger basis-completion engine.
///
/// Owns a private copy of the generators for the duration of one
/// computation; the input [`Ideal`] is never touched.
pub struct Buchberger<R: Field> {
    basis: Vec<SparsePoly<R>>,
    config: BuchbergerConfig,
}

impl<R: Field> Buchberger<R> {
    /// Seeds the engine from an ideal's generators.
    ///
    /// Generators are re-sorted under `order`, made monic, and zero
    /// generators are dropped (they contribute nothing and have no
    /// leading term).
    #[must_use]
    pub fn new(ideal: &Ideal<R>, order: MonomialOrder, config: BuchbergerConfig) -> Self {
        let basis = ideal
            .generators()
            .iter()
            .filter(|p| !p.is_zero())
            .map(|p| monic(&p.reordered(order)))
            .collect();

        Self { basis, config }
    }

    /// Runs the algorithm to completion.
    ///
    /// Pairs `(i, j)` with `j < i` are enumerated in order; the outer
    /// bound is re-read every iteration because appending a remainder
    /// grows the basis, and the new element must eventually be paired
    /// once with every earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`GroebnerError::BasisLimitExceeded`] if a configured
    /// `max_basis` cap is hit.
    pub fn compute(mut self) -> Result<Ideal<R>, GroebnerError> {
        let mut i = 1;
        while i < self.basis.len() {
            let mut j = 0;
            while j < i {
                self.process_pair(i, j)?;
                j += 1;
            }
            i += 1;
        }

        Ok(Ideal::new(self.basis))
    }

    /// Handles one pair: S-polynomial, reduction, possible append.
    fn process_pair(&mut self, i: usize, j: usize) -> Result<(), GroebnerError> {
        let (fi, fj) = (&self.basis[i], &self.basis[j]);

        if self.config.use_product_criterion {
            if let (Some(mi), Some(mj)) = (fi.leading_monomial(), fj.leading_monomial()) {
                if product_criterion(mi, mj) {
                    return Ok(());
                }
            }
        }

        let Some(s) = s_polynomial(fi, fj) else {
            return Ok(());
        };

        let remainder = s.div_rem(&self.basis).remainder;
        if remainder.is_zero() {
            return Ok(());
        }

        if self.config.max_basis > 0 && self.basis.len() >= self.config.max_basis {
            return Err(GroebnerError::BasisLimitExceeded {
                limit: self.config.max_basis,
            });
        }

        self.basis.push(monic(&remainder));
        Ok(())
    }

    /// Returns the current number of basis elements.
    #[must_use]
    pub fn basis_size(&self) -> usize {
        self.basis.len()
    }
}

/// Computes the S-polynomial of two polynomials.
///
/// With `g_f`, `g_g` the leading terms and `(lcm, a_f, a_g)` the
/// lcm-with-cofactors of their monomials, this is
/// `f * a_f * lc(g) - g * a_g * lc(f)`: both products have leading term
/// `lc(f)*lc(g)*lcm`, so the leading terms cancel exactly.
///
/// Returns `None` if either polynomial is zero (no leading term).
#[must_use]
pub fn s_polynomial<R: Field>(f: &SparsePoly<R>, g: &SparsePoly<R>) -> Option<SparsePoly<R>> {
    let (lm_f, lc_f) = f.terms().first()?;
    let (lm_g, lc_g) = g.terms().first()?;

    let (_lcm, a_f, a_g) = lm_f.lcm_cofactors(lm_g);

    let left = f.mul_term(&a_f, lc_g);
    let right = g.mul_term(&a_g, lc_f);
    Some(left.sub(&right))
}

/// Scales a polynomial so its leading coefficient is one.
fn monic<R: Field>(p: &SparsePoly<R>) -> SparsePoly<R> {
    match p.leading_coeff() {
        Some(lc) => {
            let inv = lc.inv().expect("leading coefficient must be invertible");
            p.scale(&inv)
        }
        None => p.clone(),
    }
}

/// Computes a Groebner basis of `ideal` under `order` with the default
/// configuration.
///
/// The order must satisfy the usual monomial-order properties (total,
/// compatible with multiplication, constant monomial minimal); this is
/// a documented precondition, not checked at runtime, and violating it
/// can manifest as non-termination. Callers that cannot vouch for the
/// order should set a `max_basis` cap via [`Buchberger::new`].
///
/// # Errors
///
/// Returns [`GroebnerError::BasisLimitExceeded`] if a configured cap is
/// hit (never with the default configuration, which sets no cap).
pub fn groebner_basis<R: Field>(
    ideal: &Ideal<R>,
    order: MonomialOrder,
) -> Result<Ideal<R>, GroebnerError> {
    Buchberger::new(ideal, order, BuchbergerConfig::default()).compute()
}

/// Checks the closure property: every pair's S-polynomial reduces to
/// zero against the generators.
#[must_use]
pub fn is_groebner_basis<R: Field>(ideal: &Ideal<R>, order: MonomialOrder) -> bool {
    let gens: Vec<_> = ideal
        .generators()
        .iter()
        .filter(|p| !p.is_zero())
        .map(|p| p.reordered(order))
        .collect();

    for i in 1..gens.len() {
        for j in 0..i {
            if let Some(s) = s_polynomial(&gens[i], &gens[j]) {
                if !s.div_rem(&gens).remainder.is_zero() {
                    return false;
                }
            }
        }
    }

    true
}
