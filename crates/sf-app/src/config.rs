//! Study file format: one sweep (and optional fit) per file.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sf_fit::FitConfig;
use sf_fluids::{EosMethod, GasComposition, find_mixture};
use sf_nozzle::{NozzleGeometry, PressureSweepSpec, SweepConfig};
use std::path::Path;

/// Allowed deviation of inline mole fractions from a unit sum.
pub const COMPOSITION_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyConfig {
    pub name: String,
    pub method: EosMethod,
    pub gas: GasSpec,
    pub geometry: NozzleGeometry,
    pub sweep: PressureSweepSpec,
    #[serde(default)]
    pub sweep_config: SweepConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitConfig>,
}

/// Gas either picked from the mixture catalog or given as inline fractions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GasSpec {
    Named { mixture: String },
    Fractions { fractions: GasComposition },
}

impl GasSpec {
    pub fn named(mixture: impl Into<String>) -> Self {
        GasSpec::Named {
            mixture: mixture.into(),
        }
    }

    pub fn resolve(&self) -> AppResult<GasComposition> {
        match self {
            GasSpec::Named { mixture } => find_mixture(mixture)
                .ok_or_else(|| AppError::Validation(format!("unknown mixture '{mixture}'"))),
            GasSpec::Fractions { fractions } => {
                fractions
                    .validate(COMPOSITION_SUM_TOLERANCE)
                    .map_err(|e| AppError::Validation(format!("gas fractions: {e}")))?;
                Ok(*fractions)
            }
        }
    }
}

impl StudyConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("study name is empty".to_string()));
        }
        self.gas.resolve()?;
        self.geometry
            .validate()
            .map_err(|e| AppError::Validation(format!("geometry: {e}")))?;
        self.sweep
            .validate()
            .map_err(|e| AppError::Validation(format!("sweep: {e}")))?;
        if self.sweep_config.dataset_steps == 0 {
            return Err(AppError::Validation(
                "sweep_config.dataset_steps must be at least 1".to_string(),
            ));
        }
        if let Some(fit) = &self.fit {
            fit.validate()
                .map_err(|e| AppError::Validation(format!("fit: {e}")))?;
        }
        Ok(())
    }
}

pub fn load_yaml(path: &Path) -> AppResult<StudyConfig> {
    let content = std::fs::read_to_string(path)?;
    let study: StudyConfig = serde_yaml::from_str(&content)?;
    study.validate()?;
    Ok(study)
}

pub fn save_yaml(path: &Path, study: &StudyConfig) -> AppResult<()> {
    study.validate()?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> AppResult<StudyConfig> {
    let content = std::fs::read_to_string(path)?;
    let study: StudyConfig = serde_json::from_str(&content)?;
    study.validate()?;
    Ok(study)
}

pub fn save_json(path: &Path, study: &StudyConfig) -> AppResult<()> {
    study.validate()?;
    let content = serde_json::to_string_pretty(study)?;
    std::fs::write(path, content)?;
    Ok(())
}
