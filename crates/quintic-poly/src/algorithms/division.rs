//! Multivariate division with remainder.
//!
//! The workhorse of basis reduction: divide a polynomial by an ordered
//! list of divisors, repeatedly cancelling the leading term against the
//! first divisor whose leading monomial divides it, and moving
//! irreducible leading terms into the remainder.

use quintic_rings::{Field, Ring};

use crate::monomial::Monomial;
use crate::sparse::SparsePoly;

/// The result of multivariate division: one quotient per divisor, plus
/// a remainder.
///
/// Satisfies `dividend == sum(quotients[i] * divisors[i]) + remainder`,
/// and no term of `remainder` is divisible by any divisor's leading
/// monomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivRem<R: Ring> {
    /// Quotients, aligned index-for-index with the divisor list.
    pub quotients: Vec<SparsePoly<R>>,
    /// The remainder.
    pub remainder: SparsePoly<R>,
}

impl<R: Field> SparsePoly<R> {
    /// Divides by an ordered list of divisors.
    ///
    /// Each step inspects the leading term of the running candidate and
    /// scans `divisors` in order for the first whose leading monomial
    /// divides it. On a hit the matching multiple is subtracted,
    /// cancelling that leading term exactly; otherwise the term is final
    /// and moves to the remainder. Every step strictly decreases the
    /// candidate's leading monomial, so the loop terminates for any
    /// valid monomial order.
    ///
    /// Zero divisors in the list are never matched and get a zero
    /// quotient.
    #[must_use]
    pub fn div_rem(&self, divisors: &[SparsePoly<R>]) -> DivRem<R> {
        let order = self.order();
        let mut quotients = vec![SparsePoly::zero(order); divisors.len()];
        let mut remainder = SparsePoly::zero(order);
        let mut candidate = self.clone();

        loop {
            let Some((lm, lc)) = candidate
                .terms()
                .first()
                .map(|(m, c)| (m.clone(), c.clone()))
            else {
                break;
            };

            let hit = divisors.iter().enumerate().find_map(|(k, d)| {
                let (dm, dc) = d.terms().first()?;
                let t = lm.div(dm)?;
                Some((k, t, dc.clone()))
            });

            match hit {
                Some((k, t, dc)) => {
                    let c = lc * dc.inv().expect("leading coefficient must be invertible");
                    quotients[k] = quotients[k].add(&SparsePoly::term(t.clone(), c.clone(), order));
                    candidate = candidate.sub(&divisors[k].mul_term(&t, &c));
                }
                None => {
                    let lead = SparsePoly::term(lm, lc, order);
                    remainder = remainder.add(&lead);
                    candidate = candidate.sub(&lead);
                }
            }
        }

        DivRem {
            quotients,
            remainder,
        }
    }

    /// Returns the remainder of division by `divisors`.
    #[must_use]
    pub fn reduce(&self, divisors: &[SparsePoly<R>]) -> SparsePoly<R> {
        self.div_rem(divisors).remainder
    }
}

/// Returns true if no term of `p` is divisible by `m`.
#[must_use]
pub fn is_reduced_against<R: Ring>(p: &SparsePoly<R>, m: &Monomial) -> bool {
    p.terms().iter().all(|(t, _)| !m.divides(t))
}
