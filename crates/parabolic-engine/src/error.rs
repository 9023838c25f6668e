//! Error types for the finite-difference engine.

use parabolic_core::CoreError;
use parabolic_math::MathError;
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort a pricing run.
///
/// None of these are recoverable mid-run: the engine never returns a
/// partially stepped grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The time step exceeds the explicit scheme's stability bound.
    #[error("Stability condition violated: dt = {dt:.6e} exceeds bound {bound:.6e}")]
    StabilityViolation {
        /// Time step of the grid.
        dt: f64,
        /// Largest stable time step for this grid and volatility.
        bound: f64,
    },

    /// The grid description is inconsistent.
    #[error("Invalid grid: {reason}")]
    InvalidGrid {
        /// What is wrong with the grid.
        reason: String,
    },

    /// A value grid does not match the grid it is read against.
    #[error("Grid size mismatch: spec has {expected} nodes, grid has {actual}")]
    GridMismatch {
        /// Node count implied by the grid spec.
        expected: usize,
        /// Node count of the value grid.
        actual: usize,
    },

    /// Parameter error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Numerical helper error.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl EngineError {
    /// Creates a stability violation error.
    #[must_use]
    pub fn stability_violation(dt: f64, bound: f64) -> Self {
        Self::StabilityViolation { dt, bound }
    }

    /// Creates an invalid grid error.
    #[must_use]
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::stability_violation(0.01, 0.0025);
        let msg = err.to_string();
        assert!(msg.contains("1.000000e-2"));
        assert!(msg.contains("2.500000e-3"));
    }

    #[test]
    fn test_from_core() {
        let err: EngineError = CoreError::missing_parameter("spot").into();
        assert!(matches!(err, EngineError::Core(_)));
    }
}
