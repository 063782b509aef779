//! # quintic-integers
//!
//! Exact integer and rational arithmetic for the Quintic polynomial-ideal
//! engine.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`), backed by `dashu`
//! - The extended Euclidean algorithm with Bezout coefficients (`euclid`)
//! - Canonical reduced fractions (`Rational`) normalised through that gcd
//!
//! Rationals never pass through floating point: every value is an exactly
//! reduced `numerator/denominator` pair with a positive denominator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod euclid;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use euclid::{extended_gcd, gcd, Bezout};
pub use integer::Integer;
pub use rational::Rational;
