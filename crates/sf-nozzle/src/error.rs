//! Error types for nozzle calculations.

use sf_core::CoreError;
use sf_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur while building a flow dataset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NozzleError {
    #[error("Invalid sweep configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Reynolds number {re} outside certified range [{min}, {max}]")]
    ReynoldsOutOfRange { re: f64, min: f64, max: f64 },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type NozzleResult<T> = Result<T, NozzleError>;

impl From<CoreError> for NozzleError {
    fn from(e: CoreError) -> Self {
        NozzleError::InvalidConfig {
            what: e.to_string(),
        }
    }
}

impl NozzleError {
    /// True when the equation-of-state service could not be used.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, NozzleError::Fluid(FluidError::ServiceUnavailable { .. }))
    }
}
