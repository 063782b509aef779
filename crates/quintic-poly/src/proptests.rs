//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use quintic_rings::{Q, Ring};

    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::sparse::SparsePoly;

    // Strategy for generating small monomials in up to 3 variables
    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u16..4, 0..=3).prop_map(|e| Monomial::new(&e))
    }

    // Strategy for generating small polynomials (at most 4 terms)
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((small_monomial(), -20i64..20), 0..=4)
            .prop_map(|terms| {
                SparsePoly::new(
                    terms
                        .into_iter()
                        .map(|(m, c)| (m, Q::from_integer(c)))
                        .collect(),
                    MonomialOrder::Grevlex,
                )
            })
    }

    fn nonzero_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_identities(a in small_poly()) {
            let order = a.order();
            prop_assert_eq!(a.add(&SparsePoly::zero(order)), a.clone());
            prop_assert_eq!(a.mul(&SparsePoly::one(order)), a);
        }

        // Leading-term invariant: no stored zero coefficients

        #[test]
        fn poly_no_zero_coefficients(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(sum.terms().iter().all(|(_, c)| !c.is_zero()));
        }

        // Division with remainder

        #[test]
        fn div_rem_reconstructs(f in small_poly(), d1 in nonzero_poly(), d2 in nonzero_poly()) {
            let divisors = [d1, d2];
            let res = f.div_rem(&divisors);

            let mut rebuilt = res.remainder.clone();
            for (q, d) in res.quotients.iter().zip(&divisors) {
                rebuilt = rebuilt.add(&q.mul(d));
            }
            prop_assert_eq!(rebuilt, f);
        }

        #[test]
        fn div_rem_remainder_irreducible(f in small_poly(), d in nonzero_poly()) {
            let divisors = [d];
            let res = f.div_rem(&divisors);
            let lm = divisors[0].leading_monomial().unwrap();
            prop_assert!(res.remainder.terms().iter().all(|(m, _)| !lm.divides(m)));
        }
    }
}
