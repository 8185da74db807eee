//! Error types for the sf-app service layer.

use sf_fit::FitError;
use sf_nozzle::NozzleError;

/// Unified error for study configuration and execution.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Study validation failed: {0}")]
    Validation(String),

    #[error("Sweep error: {0}")]
    Nozzle(#[from] NozzleError),

    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<sf_fluids::FluidError> for AppError {
    fn from(err: sf_fluids::FluidError) -> Self {
        AppError::Nozzle(NozzleError::Fluid(err))
    }
}

impl AppError {
    /// True when the equation-of-state service could not be obtained or initialized.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, AppError::Nozzle(e) if e.is_service_unavailable())
    }
}
