//! Error types for option parameters.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing domain types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A contract parameter is outside the range the model accepts.
    #[error("Invalid {name}: {value} - {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// A required parameter was never supplied to a builder.
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Name of the parameter.
        name: &'static str,
    },

    /// An option type code could not be parsed.
    #[error("Invalid option type: {0}")]
    InvalidOptionType(String),
}

impl CoreError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Creates a missing parameter error.
    #[must_use]
    pub fn missing_parameter(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    /// Returns the name of the offending parameter, if any.
    #[must_use]
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } | Self::MissingParameter { name } => Some(name),
            Self::InvalidOptionType(_) => None,
        }
    }
}
