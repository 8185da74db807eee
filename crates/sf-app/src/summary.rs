use serde::{Deserialize, Serialize};
use sf_nozzle::{FlowDataset, FlowSample, NozzleGeometry};

/// Headline numbers of one sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub sample_count: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    /// Inlet pressure range [kPa] covered by choked samples
    pub valid_pressure_span: Option<(f64, f64)>,
    pub midpoint: Option<FlowSample>,
    pub discharge_coefficient: f64,
    pub throat_area_m2: f64,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &FlowDataset, geometry: &NozzleGeometry) -> Self {
        let valid_count = dataset.valid_count();
        let mut choked = dataset.choked_samples().map(|s| s.pressure);
        let valid_pressure_span = choked
            .next()
            .map(|first| (first, choked.last().unwrap_or(first)));

        Self {
            sample_count: dataset.len(),
            valid_count,
            invalid_count: dataset.len() - valid_count,
            valid_pressure_span,
            midpoint: dataset.midpoint().copied(),
            discharge_coefficient: geometry.discharge_coefficient(),
            throat_area_m2: geometry.throat_area_m2(),
        }
    }
}
