//! Error types for orientation math.
//!
//! Every fallible operation in this crate fails on a degenerate input: a zero
//! vector that cannot be normalized, a singular matrix that cannot be
//! inverted, an axis that is not unit length. The checks run before the
//! receiver is touched, so an `Err` never leaves a half-mutated value behind.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](OrientationError::MathError) | A single degenerate input, classified by [`MathErrorKind`] |
//! | [`CalculationError`](OrientationError::CalculationError) | An algorithm that cannot produce a result |
//!
//! Numerical edge cases that have a well-defined answer (nearly parallel
//! quaternions in slerp, arcsine arguments a few ULP outside [-1, 1], pitch
//! that is almost ±90°) are handled internally and never surface here.
//!
//! ```
//! use orientation_core::{MathErrorKind, Vector3};
//!
//! let err = Vector3::zeros().normalize().unwrap_err();
//! assert_eq!(err.kind(), Some(&MathErrorKind::ZeroLength));
//! ```

use thiserror::Error;

/// Classification of degenerate inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathErrorKind {
    /// A vector or quaternion of zero length where a direction is required.
    ZeroLength,
    /// An axis whose length differs from 1 by more than the unit-axis tolerance.
    NotUnitAxis,
    /// A matrix whose determinant is zero.
    SingularMatrix,
    /// Rows that are zero or linearly dependent, so no basis can be recovered.
    Degenerate,
    /// Input is NaN or infinity.
    NotFinite,
}

/// Unified error type for orientation math.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrientationError {
    /// A degenerate input was passed to `operation`.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Algorithm failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, OrientationError>`.
pub type OrientationResult<T> = Result<T, OrientationError>;

impl OrientationError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`CalculationError`](Self::CalculationError).
    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] for math errors.
    pub fn kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
            Self::CalculationError { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = OrientationError::math_error(
            "RotationMatrix::inverse",
            MathErrorKind::SingularMatrix,
            "determinant is zero",
        );
        assert!(err.to_string().contains("Math error in RotationMatrix::inverse"));
        assert!(err.to_string().contains("SingularMatrix"));
        assert_eq!(err.kind(), Some(&MathErrorKind::SingularMatrix));
    }

    #[test]
    fn test_calculation_error() {
        let err = OrientationError::calculation_error("Quaternion::axis", "identity rotation");
        assert_eq!(
            err.to_string(),
            "Calculation error in Quaternion::axis: identity rotation"
        );
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<OrientationError>();
        _assert_sync::<OrientationError>();
    }
}
