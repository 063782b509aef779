//! Errors raised by exact arithmetic.

use thiserror::Error;

use crate::Integer;

/// An error from an exact arithmetic operation.
///
/// Every variant carries the operand that triggered the failure so the
/// caller can reproduce it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A zero denominator or divisor was supplied.
    #[error("division by zero: {numerator}/0")]
    DivisionByZero {
        /// Numerator of the offending fraction or division.
        numerator: Integer,
    },
}
