//! # Quintic
//!
//! An exact symbolic-algebra engine for polynomial ideals.
//!
//! Quintic computes over abstract rings and fields with no floating
//! point anywhere: arithmetic is exact from the Bezout core up through
//! Groebner bases.
//!
//! ## Features
//!
//! - **Exact Rationals**: canonical reduced fractions over arbitrary
//!   precision integers
//! - **Algebraic Capabilities**: algorithms are generic over `Ring` and
//!   `Field` traits, never tied to a concrete numeric type
//! - **Sparse Polynomials**: exponent-vector monomials with pluggable
//!   orders (lex, grlex, grevlex)
//! - **Groebner Bases**: Buchberger's algorithm with multivariate
//!   division with remainder
//!
//! ## Quick Start
//!
//! ```
//! use quintic::prelude::*;
//!
//! let order = MonomialOrder::Lex;
//!
//! // x^2 + y^2 - 1 and x - y
//! let circle = SparsePoly::new(
//!     vec![
//!         (Monomial::new(&[2, 0]), Q::from_integer(1)),
//!         (Monomial::new(&[0, 2]), Q::from_integer(1)),
//!         (Monomial::one(), Q::from_integer(-1)),
//!     ],
//!     order,
//! );
//! let line = SparsePoly::new(
//!     vec![
//!         (Monomial::new(&[1, 0]), Q::from_integer(1)),
//!         (Monomial::new(&[0, 1]), Q::from_integer(-1)),
//!     ],
//!     order,
//! );
//!
//! let basis = groebner_basis(&Ideal::new(vec![circle, line]), order).unwrap();
//! assert!(is_groebner_basis(&basis, order));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quintic_groebner as groebner;
pub use quintic_integers as integers;
pub use quintic_poly as poly;
pub use quintic_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quintic_groebner::{
        groebner_basis, is_groebner_basis, Buchberger, BuchbergerConfig, Ideal,
    };
    pub use quintic_integers::{extended_gcd, Bezout, Integer, Rational};
    pub use quintic_poly::{Monomial, MonomialOrder, SparsePoly};
    pub use quintic_rings::{EuclideanDomain, Field, Ring, GF, Q, Z};
}
