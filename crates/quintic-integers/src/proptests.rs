//! Property-based tests for the Euclidean core and rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::euclid::{extended_gcd, gcd};
    use crate::{Integer, Rational};

    fn int() -> impl Strategy<Value = Integer> {
        (-10_000i64..10_000i64).prop_map(Integer::new)
    }

    fn nonzero_int() -> impl Strategy<Value = Integer> {
        int().prop_filter("must be non-zero", |n| !n.is_zero())
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (int(), nonzero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn nonzero_rational() -> impl Strategy<Value = Rational> {
        rational().prop_filter("must be non-zero", |r| !r.is_zero())
    }

    proptest! {
        // Bezout identity and gcd contract

        #[test]
        fn bezout_identity(a in int(), b in int()) {
            let bez = extended_gcd(&a, &b);
            prop_assert_eq!(a.clone() * bez.x + b.clone() * bez.y, bez.gcd.clone());
            prop_assert!(!bez.gcd.is_negative());
            prop_assert_eq!(bez.gcd, gcd(&a, &b));
        }

        #[test]
        fn gcd_divides_both(a in int(), b in int()) {
            let g = gcd(&a, &b);
            if !g.is_zero() {
                prop_assert!((a % g.clone()).is_zero());
                prop_assert!((b % g).is_zero());
            } else {
                // gcd is zero only when both inputs are
                prop_assert!(a.is_zero() && b.is_zero());
            }
        }

        // Canonical-form invariants

        #[test]
        fn rational_is_reduced(n in int(), d in nonzero_int()) {
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denominator().signum() == 1);
            prop_assert!(gcd(r.numerator(), r.denominator()).is_one());
        }

        #[test]
        fn rational_scaling_is_identity(r in rational(), k in nonzero_int()) {
            let scaled = Rational::new(
                r.numerator() * &k,
                r.denominator() * &k,
            ).unwrap();
            prop_assert_eq!(scaled, r);
        }

        // Field laws

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((a.clone() + b.clone()) + c.clone(), a + (b + c));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(a in nonzero_rational()) {
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_div_roundtrip(a in rational(), b in nonzero_rational()) {
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(q * b, a);
        }
    }
}
