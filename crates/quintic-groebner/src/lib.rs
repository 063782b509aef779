//! # quintic-groebner
//!
//! Groebner bases via Buchberger's algorithm.
//!
//! This crate provides:
//! - [`Ideal`]: a finite generating set of sparse polynomials
//! - [`Buchberger`]: the basis-completion engine, with a configurable
//!   growth cap
//! - [`groebner_basis`]: the one-call entry point
//! - [`is_groebner_basis`]: the S-polynomial closure check
//!
//! The engine works over any coefficient type implementing
//! [`quintic_rings::Field`] and any of the monomial orders in
//! `quintic-poly`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buchberger;
pub mod criteria;
pub mod ideal;

pub use buchberger::{
    groebner_basis, is_groebner_basis, s_polynomial, Buchberger, BuchbergerConfig, GroebnerError,
};
pub use ideal::Ideal;
