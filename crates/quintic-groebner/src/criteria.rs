//! Pair-skipping criteria.

use quintic_poly::Monomial;

/// Buchberger's first criterion (product criterion).
///
/// If the leading monomials of a pair are coprime, their S-polynomial
/// reduces to zero against the pair itself, so the pair can be skipped
/// without changing the computed basis.
#[must_use]
pub fn product_criterion(lm_f: &Monomial, lm_g: &Monomial) -> bool {
    lm_f.is_coprime(lm_g)
}
