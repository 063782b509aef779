//! # quintic-rings
//!
//! Algebraic capability traits for the Quintic polynomial-ideal engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - Concrete instances: `Z`, `Q`, machine `i64`, prime fields `GF<P>`
//!
//! Every generic algorithm in the engine takes one of these traits as an
//! explicit bound; a capability is pure behaviour, carries no state, and
//! is shared freely between callers.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod machine;
pub mod rationals;
pub mod traits;

pub use finite_field::GF;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
