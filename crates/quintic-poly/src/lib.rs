//! # quintic-poly
//!
//! Sparse multivariate polynomial arithmetic for the Quintic
//! polynomial-ideal engine.
//!
//! This crate provides:
//! - Exponent-vector monomials with divisibility and lcm-with-cofactors
//! - Pluggable monomial orders (lex, grlex, grevlex)
//! - Sparse polynomials generic over any [`quintic_rings::Ring`]
//! - Multivariate division with remainder over a field
//!
//! Polynomials are structurally immutable: every operation returns a new
//! value, and no stored coefficient is ever zero.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use algorithms::division::DivRem;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use sparse::{EmptyPolynomialError, SparsePoly};
