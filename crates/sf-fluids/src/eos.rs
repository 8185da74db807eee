//! Equation-of-state service interface.
//!
//! The thermodynamics (AGA8 DETAIL, GERG-2008) live outside this workspace. Anything that can
//! answer the four calls below can be plugged into the nozzle sweep through an
//! [`EosRegistry`](crate::EosRegistry).

use crate::composition::GasComposition;
use crate::error::FluidResult;
use serde::{Deserialize, Serialize};

/// Property bundle returned by [`EquationOfState::properties`].
///
/// Units follow the AGA8 reference code: pressure in kPa, molar heat capacities in
/// J/(mol·K), speed of sound in m/s, Joule-Thomson coefficient in K/kPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EosProperties {
    /// Pressure [kPa]
    pub p: f64,
    /// Compressibility factor
    pub z: f64,
    /// Isochoric heat capacity [J/(mol·K)]
    pub cv: f64,
    /// Isobaric heat capacity [J/(mol·K)]
    pub cp: f64,
    /// Speed of sound [m/s]
    pub w: f64,
    /// Joule-Thomson coefficient [K/kPa]
    pub jt: f64,
    /// Isentropic exponent
    pub kappa: f64,
    /// Critical-flow factor
    pub cf: f64,
}

/// Trait for equation-of-state services.
///
/// Implementations must be thread-safe (Send + Sync) so a sweep can evaluate steps in parallel.
pub trait EquationOfState: Send + Sync {
    /// Get the backend name (for debugging/logging).
    fn name(&self) -> &str;

    /// Initialize the service. Must be idempotent; called once per sweep before any other call.
    fn setup(&self) -> FluidResult<()> {
        Ok(())
    }

    /// Mixture molar mass [g/mol].
    fn molar_mass(&self, comp: &GasComposition) -> FluidResult<f64>;

    /// Molar density [mol/L] at temperature [K] and pressure [kPa].
    fn density(&self, t_k: f64, p_kpa: f64, comp: &GasComposition) -> FluidResult<f64>;

    /// Full property bundle at temperature [K] and molar density [mol/L].
    fn properties(&self, t_k: f64, d_mol_l: f64, comp: &GasComposition)
    -> FluidResult<EosProperties>;
}
