//! Sonic-nozzle geometry.

use crate::discharge::discharge_coefficient;
use crate::error::{NozzleError, NozzleResult};
use serde::{Deserialize, Serialize};
use sf_core::constants::M_PER_MM;
use sf_core::numeric::ensure_positive;
use sf_core::units::{Area, Length, mm};
use std::f64::consts::PI;

/// Throat diameter and the Reynolds number that selects the discharge coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NozzleGeometry {
    /// Throat diameter [mm]
    pub diameter_mm: f64,
    /// Throat Reynolds number
    pub reynolds_number: f64,
}

impl NozzleGeometry {
    pub fn new(diameter_mm: f64, reynolds_number: f64) -> Self {
        Self {
            diameter_mm,
            reynolds_number,
        }
    }

    pub fn validate(&self) -> NozzleResult<()> {
        ensure_positive(self.diameter_mm, "throat diameter")?;
        ensure_positive(self.reynolds_number, "Reynolds number")?;
        Ok(())
    }

    pub fn diameter(&self) -> Length {
        mm(self.diameter_mm)
    }

    /// Throat area [m²], `π·(d/2)²`.
    pub fn throat_area_m2(&self) -> f64 {
        let radius_m = 0.5 * self.diameter_mm * M_PER_MM;
        PI * radius_m * radius_m
    }

    pub fn throat_area(&self) -> Area {
        use uom::si::area::square_meter;
        Area::new::<square_meter>(self.throat_area_m2())
    }

    /// Discharge coefficient for this nozzle's Reynolds number.
    pub fn discharge_coefficient(&self) -> f64 {
        discharge_coefficient(self.reynolds_number)
    }
}

/// Throat diameter [mm] passing `mass_flow_kg_s` for a nozzle-specific coefficient `kn`
/// [kg/(s·m²)]: `A = Q / Kn`, `D = sqrt(4·A/π)`.
pub fn diameter_for_mass_flow(mass_flow_kg_s: f64, kn: f64) -> NozzleResult<f64> {
    ensure_positive(mass_flow_kg_s, "mass flow rate")?;
    ensure_positive(kn, "nozzle coefficient")?;
    let area_m2 = mass_flow_kg_s / kn;
    let diameter_m = (4.0 * area_m2 / PI).sqrt();
    if !diameter_m.is_finite() {
        return Err(NozzleError::InvalidConfig {
            what: "diameter overflow".to_string(),
        });
    }
    Ok(diameter_m / M_PER_MM)
}
