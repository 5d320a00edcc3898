//! Error types for the numeral kernel.

use thiserror::Error;

/// Errors that can occur during numeral arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A natural subtraction would have produced a negative value.
    #[error("natural subtraction underflow")]
    Underflow,

    /// The value does not fit in a machine integer of the given width.
    #[error("value does not fit in {0} bits")]
    Overflow(u32),

    /// Decimal text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, CoreError>;
