//! sf-nozzle: critical-flow (sonic) nozzle models for sonicflow.
//!
//! - `discharge`: ISO 9300 toroidal-throat discharge coefficient
//! - `critical`: critical back-pressure and the choked-flow gate
//! - `geometry`: throat diameter, area and inverse sizing
//! - `sweep`: mass-flow datasets over an inlet-pressure range

pub mod critical;
pub mod discharge;
pub mod error;
pub mod geometry;
pub mod sweep;

pub use critical::{critical_pressure, is_choked};
pub use discharge::{
    RE_MAX, RE_MIN, check_reynolds_range, discharge_coefficient, discharge_coefficient_bounds,
    reynolds_in_certified_range, typical_discharge_coefficient,
};
pub use error::{NozzleError, NozzleResult};
pub use geometry::{NozzleGeometry, diameter_for_mass_flow};
pub use sweep::{
    FlowDataset, FlowSample, PressureSweepSpec, SweepConfig, generate_dataset,
    generate_dataset_with,
};
