//! Error types for code construction, GF(2) arithmetic and decoding.
//!
//! Every failure is a precondition violation by the caller (or, for
//! `InvariantViolation`, a construction bug). None of them are transient, so
//! they are surfaced immediately and never retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A scalar argument is outside its valid range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two operands disagree on length or shape
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A constructed code failed its own algebraic postcondition
    #[error("code invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Error::InvalidParameter(message.into())
    }

    pub fn dimension_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Error::DimensionMismatch {
            context,
            expected,
            actual,
        }
    }
}

/// Type alias for Result with the crate error type
pub type Result<T> = std::result::Result<T, Error>;
