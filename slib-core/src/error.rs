//! Recoverable precondition failures.
//!
//! The fast numeric kernels check their preconditions with `debug_assert!`
//! only. Their `try_*` counterparts validate up front and report a
//! [`MathError`] instead, so callers that cannot afford a panic (or undefined
//! output in release builds) have a total API.

use thiserror::Error;

/// A numeric kernel rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The operation requires `value >= 0`.
    #[error("{operation}: expected a non-negative input, got {value}")]
    NegativeInput {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// The offending input.
        value: f64,
    },

    /// The operation requires `value > 0`.
    #[error("{operation}: expected a strictly positive input, got {value}")]
    NonPositiveInput {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// The offending input.
        value: f64,
    },

    /// The input was NaN.
    #[error("{operation}: input is NaN")]
    NotANumber {
        /// Name of the rejecting operation.
        operation: &'static str,
    },

    /// The leading coefficient of a quadratic was zero.
    #[error("quadratic: leading coefficient is zero")]
    DegenerateQuadratic,
}

/// Result alias for the `try_*` kernels.
pub type MathResult<T> = Result<T, MathError>;
