//! Fluid property errors.

use sf_core::CoreError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while talking to an equation-of-state service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The service for a method is missing, not initialized, or returned unusable output.
    #[error("Equation-of-state service unavailable for {method}: {reason}")]
    ServiceUnavailable { method: String, reason: String },

    /// Backend reported a failure for a specific call.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<CoreError> for FluidError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } | CoreError::NonPositive { what, .. } => {
                FluidError::NonPhysical { what }
            }
            CoreError::InvalidArg { what } | CoreError::Invariant { what } => {
                FluidError::InvalidArg { what }
            }
        }
    }
}
