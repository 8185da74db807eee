//! Study execution: sweep, then optionally fit.

use crate::config::StudyConfig;
use crate::error::AppResult;
use crate::summary::DatasetSummary;
use serde::{Deserialize, Serialize};
use sf_fit::{PolynomialModel, fit_dataset};
use sf_fluids::{EosMethod, EosRegistry};
use sf_nozzle::{FlowDataset, generate_dataset};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyReport {
    pub name: String,
    pub method: EosMethod,
    pub dataset: FlowDataset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<PolynomialModel>,
    pub summary: DatasetSummary,
}

/// Run one study against the backends in `registry`.
pub fn run_study(study: &StudyConfig, registry: &EosRegistry) -> AppResult<StudyReport> {
    study.validate()?;
    let composition = study.gas.resolve()?;

    tracing::info!(study = %study.name, method = %study.method, "running study");
    let dataset = generate_dataset(
        registry,
        study.method,
        &composition,
        &study.geometry,
        &study.sweep,
        &study.sweep_config,
    )?;

    let fit = study
        .fit
        .as_ref()
        .map(|config| fit_dataset(&dataset, config))
        .transpose()?;
    if let Some(model) = &fit {
        tracing::info!(
            degree = model.degree(),
            correlation = model.correlation,
            "flow model fitted"
        );
    }

    let summary = DatasetSummary::from_dataset(&dataset, &study.geometry);
    Ok(StudyReport {
        name: study.name.clone(),
        method: study.method,
        dataset,
        fit,
        summary,
    })
}
