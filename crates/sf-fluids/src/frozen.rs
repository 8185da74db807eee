//! Frozen-property reference backend.
//!
//! A stand-in for the real-gas services: compressibility, isentropic exponent and
//! critical-flow factor are frozen at construction, molar mass comes from the component table,
//! and density follows `P = Z·ρ·R·T`. Accurate only close to the state the frozen values were
//! taken from; intended for tests, demos and quick sizing where a DETAIL/GERG-2008 service is
//! not linked.

use crate::composition::GasComposition;
use crate::eos::{EosProperties, EquationOfState};
use crate::error::{FluidError, FluidResult};
use sf_core::constants::{G_PER_KG, R_MOLAR};
use sf_core::numeric::ensure_positive;

/// Ideal-gas critical-flow function `C* = sqrt(κ·(2/(κ+1))^((κ+1)/(κ−1)))`.
pub fn ideal_critical_flow_function(kappa: f64) -> f64 {
    (kappa * (2.0 / (kappa + 1.0)).powf((kappa + 1.0) / (kappa - 1.0))).sqrt()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrozenGasModel {
    name: String,
    /// Frozen compressibility factor
    pub z: f64,
    /// Frozen isentropic exponent
    pub kappa: f64,
    /// Frozen critical-flow factor
    pub cf: f64,
}

impl FrozenGasModel {
    pub fn new(z: f64, kappa: f64, cf: f64) -> FluidResult<Self> {
        ensure_positive(z, "compressibility factor")?;
        ensure_positive(cf, "critical-flow factor")?;
        if !kappa.is_finite() || kappa <= 1.0 {
            return Err(FluidError::NonPhysical {
                what: "kappa must be > 1 and finite",
            });
        }
        Ok(Self {
            name: "frozen".to_string(),
            z,
            kappa,
            cf,
        })
    }

    /// Ideal gas (Z = 1) with Cf from [`ideal_critical_flow_function`].
    pub fn ideal(kappa: f64) -> FluidResult<Self> {
        if !kappa.is_finite() || kappa <= 1.0 {
            return Err(FluidError::NonPhysical {
                what: "kappa must be > 1 and finite",
            });
        }
        Self::new(1.0, kappa, ideal_critical_flow_function(kappa))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl EquationOfState for FrozenGasModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn molar_mass(&self, comp: &GasComposition) -> FluidResult<f64> {
        let mm = comp.molar_mass();
        if !mm.is_finite() || mm <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "composition has no molar mass",
            });
        }
        Ok(mm)
    }

    fn density(&self, t_k: f64, p_kpa: f64, _comp: &GasComposition) -> FluidResult<f64> {
        ensure_positive(t_k, "temperature")?;
        ensure_positive(p_kpa, "pressure")?;
        // kPa / (J/(mol·K) · K) = mol/L
        Ok(p_kpa / (self.z * R_MOLAR * t_k))
    }

    fn properties(
        &self,
        t_k: f64,
        d_mol_l: f64,
        comp: &GasComposition,
    ) -> FluidResult<EosProperties> {
        ensure_positive(t_k, "temperature")?;
        ensure_positive(d_mol_l, "density")?;
        let mm_si = self.molar_mass(comp)? / G_PER_KG;
        let cv = R_MOLAR / (self.kappa - 1.0);
        Ok(EosProperties {
            p: self.z * d_mol_l * R_MOLAR * t_k,
            z: self.z,
            cv,
            cp: self.kappa * cv,
            w: (self.kappa * self.z * R_MOLAR * t_k / mm_si).sqrt(),
            jt: 0.0,
            kappa: self.kappa,
            cf: self.cf,
        })
    }
}
