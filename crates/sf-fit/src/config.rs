use crate::error::{FitError, FitResult};
use serde::{Deserialize, Serialize};

/// Polynomial degree search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Highest degree tried
    pub max_degree: usize,
    /// Correlation at which the search stops
    pub min_correlation: f64,
    /// Singular values below `rank_tolerance · σ_max` count as zero
    pub rank_tolerance: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_degree: 100,
            min_correlation: 0.999,
            rank_tolerance: 1e-12,
        }
    }
}

impl FitConfig {
    pub fn with_max_degree(max_degree: usize) -> Self {
        Self {
            max_degree,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FitResult<()> {
        if !self.min_correlation.is_finite() || self.min_correlation > 1.0 {
            return Err(FitError::InvalidConfig {
                what: format!(
                    "min_correlation must be finite and <= 1, got {}",
                    self.min_correlation
                ),
            });
        }
        if !self.rank_tolerance.is_finite() || self.rank_tolerance <= 0.0 {
            return Err(FitError::InvalidConfig {
                what: format!("rank_tolerance must be > 0, got {}", self.rank_tolerance),
            });
        }
        Ok(())
    }
}
