//! Mass-flow sweep across an inlet-pressure range.
//!
//! For each inlet pressure the equation-of-state service supplies density, Cf and kappa; the
//! nozzle-specific coefficient is
//!
//! ```text
//! Kn = Cd · Cf · P / sqrt(Rs · T)        [kg/(s·m²)]
//! Q  = Kn · A                            [kg/s]
//! ```
//!
//! with `Rs = R / M`. A point whose critical pressure `P·Cf` falls below the fixed outlet
//! pressure cannot be choked; it stays in the dataset with a NaN mass flow.

use crate::critical::{critical_pressure, is_choked};
use crate::discharge::{
    RE_MAX, RE_MIN, check_reynolds_range, discharge_coefficient, reynolds_in_certified_range,
};
use crate::error::{NozzleError, NozzleResult};
use crate::geometry::NozzleGeometry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sf_core::constants::{G_PER_KG, L_PER_M3, P_STANDARD_ATM_KPA, PA_PER_KPA, R_MOLAR};
use sf_core::numeric::ensure_positive;
use sf_core::units::{MassRate, Pressure, Temperature, VolumeRate, k, kgps, kpa, m3ps};
use sf_fluids::{EosAdapter, EosMethod, EosRegistry, GasComposition};

/// Inlet-pressure range, fixed outlet pressure and temperature of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureSweepSpec {
    /// Lowest inlet pressure [kPa] (evaluated)
    pub min_kpa: f64,
    /// Highest inlet pressure [kPa] (never evaluated)
    pub max_kpa: f64,
    /// Fixed outlet (back) pressure [kPa]
    pub outlet_kpa: f64,
    /// Gas temperature [K]
    pub temperature_k: f64,
}

impl PressureSweepSpec {
    pub fn new(min_kpa: f64, max_kpa: f64, outlet_kpa: f64, temperature_k: f64) -> Self {
        Self {
            min_kpa,
            max_kpa,
            outlet_kpa,
            temperature_k,
        }
    }

    pub fn validate(&self) -> NozzleResult<()> {
        ensure_positive(self.min_kpa, "minimum inlet pressure")?;
        ensure_positive(self.max_kpa, "maximum inlet pressure")?;
        ensure_positive(self.outlet_kpa, "outlet pressure")?;
        ensure_positive(self.temperature_k, "temperature")?;
        if self.min_kpa >= self.max_kpa {
            return Err(NozzleError::InvalidConfig {
                what: format!(
                    "inlet pressure range is empty: [{}, {}) kPa",
                    self.min_kpa, self.max_kpa
                ),
            });
        }
        Ok(())
    }

    pub fn outlet_pressure(&self) -> Pressure {
        kpa(self.outlet_kpa)
    }

    /// Inlet pressure [kPa] of step `i` out of `steps`: `min + i·(max−min)/steps`.
    pub fn pressure_at(&self, i: usize, steps: usize) -> f64 {
        self.min_kpa + (i as f64 * (self.max_kpa - self.min_kpa)) / steps as f64
    }
}

/// Sweep options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of equally spaced inlet pressures in `[min, max)`
    pub dataset_steps: usize,
    /// Evaluate steps on the rayon thread pool (results keep sweep order)
    pub parallel: bool,
    /// Reject Reynolds numbers outside the certified correlation range
    pub enforce_reynolds_range: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            dataset_steps: 1000,
            parallel: false,
            enforce_reynolds_range: false,
        }
    }
}

impl SweepConfig {
    pub fn with_steps(dataset_steps: usize) -> Self {
        Self {
            dataset_steps,
            ..Self::default()
        }
    }
}

/// One evaluated inlet pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowSample {
    /// Mass flow [kg/s]; NaN when the flow cannot be choked
    #[serde(with = "nan_as_null")]
    pub mass_flow_rate: f64,
    /// Volume flow at the outlet pressure [m³/s]
    #[serde(with = "nan_as_null")]
    pub volume_flow_rate_at_output_pressure: f64,
    /// Volume flow at one standard atmosphere [m³/s]
    #[serde(with = "nan_as_null")]
    pub volume_flow_rate_at_1atm: f64,
    /// Temperature [K]
    pub temperature: f64,
    /// Inlet pressure [kPa]
    pub pressure: f64,
    /// Critical (maximum choked) outlet pressure [kPa]
    pub critical_pressure: f64,
    /// Nozzle-specific coefficient Kn [kg/(s·m²)]
    pub specific_nozzle_coefficient: f64,
    /// Isentropic exponent
    pub kappa: f64,
    /// Critical-flow factor
    pub cf: f64,
    /// Molar mass [kg/mol]
    pub molar_mass_si: f64,
}

impl FlowSample {
    pub fn is_choked(&self) -> bool {
        !self.mass_flow_rate.is_nan()
    }

    pub fn inlet_pressure(&self) -> Pressure {
        kpa(self.pressure)
    }

    pub fn gas_temperature(&self) -> Temperature {
        k(self.temperature)
    }

    pub fn mass_flow(&self) -> Option<MassRate> {
        self.is_choked().then(|| kgps(self.mass_flow_rate))
    }

    pub fn volume_flow_at_outlet(&self) -> Option<VolumeRate> {
        self.is_choked()
            .then(|| m3ps(self.volume_flow_rate_at_output_pressure))
    }

    pub fn volume_flow_at_1atm(&self) -> Option<VolumeRate> {
        self.is_choked().then(|| m3ps(self.volume_flow_rate_at_1atm))
    }
}

/// Samples of one sweep, in increasing inlet pressure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowDataset {
    samples: Vec<FlowSample>,
}

impl FlowDataset {
    pub fn from_samples(samples: Vec<FlowSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[FlowSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<FlowSample> {
        self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlowSample> {
        self.samples.iter()
    }

    /// Inlet pressures [kPa], all samples.
    pub fn pressures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.pressure).collect()
    }

    /// Mass flows [kg/s], all samples (NaN where not choked).
    pub fn mass_flow_rates(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.mass_flow_rate).collect()
    }

    pub fn valid_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_choked()).count()
    }

    pub fn choked_samples(&self) -> impl Iterator<Item = &FlowSample> {
        self.samples.iter().filter(|s| s.is_choked())
    }

    /// `(pressure, mass flow)` of the choked samples.
    pub fn valid_points(&self) -> (Vec<f64>, Vec<f64>) {
        self.choked_samples()
            .map(|s| (s.pressure, s.mass_flow_rate))
            .unzip()
    }

    /// Sample at index `len / 2`.
    pub fn midpoint(&self) -> Option<&FlowSample> {
        self.samples.get(self.samples.len() / 2)
    }

    /// Lowest inlet pressure [kPa] at which the nozzle is choked.
    pub fn first_choked_pressure(&self) -> Option<f64> {
        self.choked_samples().next().map(|s| s.pressure)
    }
}

impl<'a> IntoIterator for &'a FlowDataset {
    type Item = &'a FlowSample;
    type IntoIter = std::slice::Iter<'a, FlowSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Quantities that stay constant across one sweep.
#[derive(Debug, Clone, Copy)]
struct SweepInvariants {
    cd: f64,
    area_m2: f64,
    molar_mass_si: f64,
    rs: f64,
    rho_out: f64,
    rho_1atm: f64,
    temperature_k: f64,
    outlet_kpa: f64,
}

impl SweepInvariants {
    fn evaluate(
        &self,
        eos: &EosAdapter,
        comp: &GasComposition,
        p_kpa: f64,
    ) -> NozzleResult<FlowSample> {
        let t = self.temperature_k;
        let d = eos.density(t, p_kpa, comp)?;
        let props = eos.properties(t, d, comp)?;

        let kn = self.cd * props.cf * (p_kpa * PA_PER_KPA) / (self.rs * t).sqrt();
        let mass_flow = if is_choked(p_kpa, props.cf, self.outlet_kpa) {
            kn * self.area_m2
        } else {
            f64::NAN
        };

        Ok(FlowSample {
            mass_flow_rate: mass_flow,
            volume_flow_rate_at_output_pressure: mass_flow / self.rho_out,
            volume_flow_rate_at_1atm: mass_flow / self.rho_1atm,
            temperature: t,
            pressure: p_kpa,
            critical_pressure: critical_pressure(p_kpa, props.cf),
            specific_nozzle_coefficient: kn,
            kappa: props.kappa,
            cf: props.cf,
            molar_mass_si: self.molar_mass_si,
        })
    }
}

/// Build a flow dataset using the backend registered for `method`.
pub fn generate_dataset(
    registry: &EosRegistry,
    method: EosMethod,
    comp: &GasComposition,
    geometry: &NozzleGeometry,
    spec: &PressureSweepSpec,
    config: &SweepConfig,
) -> NozzleResult<FlowDataset> {
    let adapter = registry.adapter(method)?;
    generate_dataset_with(adapter, comp, geometry, spec, config)
}

/// Build a flow dataset with an explicit adapter.
///
/// The adapter is initialized if needed and dropped when the sweep returns. Any
/// equation-of-state failure aborts the sweep; non-choked points do not.
pub fn generate_dataset_with(
    mut eos: EosAdapter,
    comp: &GasComposition,
    geometry: &NozzleGeometry,
    spec: &PressureSweepSpec,
    config: &SweepConfig,
) -> NozzleResult<FlowDataset> {
    geometry.validate()?;
    spec.validate()?;
    let steps = config.dataset_steps;
    if steps == 0 {
        return Err(NozzleError::InvalidConfig {
            what: "dataset_steps must be at least 1".to_string(),
        });
    }

    let re = geometry.reynolds_number;
    if config.enforce_reynolds_range {
        check_reynolds_range(re)?;
    } else if !reynolds_in_certified_range(re) {
        tracing::warn!(
            re,
            min = RE_MIN,
            max = RE_MAX,
            "Reynolds number outside certified toroidal-nozzle range"
        );
    }

    tracing::info!(
        method = %eos.method(),
        backend = eos.backend_name(),
        min_kpa = spec.min_kpa,
        max_kpa = spec.max_kpa,
        steps,
        "starting nozzle pressure sweep"
    );

    eos.setup()?;
    let molar_mass_si = eos.molar_mass(comp)? / G_PER_KG;
    let t = spec.temperature_k;
    let rho_out = eos.density(t, spec.outlet_kpa, comp)? * L_PER_M3 * molar_mass_si;
    let rho_1atm = eos.density(t, P_STANDARD_ATM_KPA, comp)? * L_PER_M3 * molar_mass_si;

    let invariants = SweepInvariants {
        cd: discharge_coefficient(re),
        area_m2: geometry.throat_area_m2(),
        molar_mass_si,
        rs: R_MOLAR / molar_mass_si,
        rho_out,
        rho_1atm,
        temperature_k: t,
        outlet_kpa: spec.outlet_kpa,
    };

    let samples = if config.parallel {
        (0..steps)
            .into_par_iter()
            .map(|i| invariants.evaluate(&eos, comp, spec.pressure_at(i, steps)))
            .collect::<NozzleResult<Vec<_>>>()?
    } else {
        (0..steps)
            .map(|i| invariants.evaluate(&eos, comp, spec.pressure_at(i, steps)))
            .collect::<NozzleResult<Vec<_>>>()?
    };
    let dataset = FlowDataset::from_samples(samples);

    let invalid = dataset.len() - dataset.valid_count();
    if invalid > 0 {
        tracing::debug!(
            invalid,
            total = dataset.len(),
            outlet_kpa = spec.outlet_kpa,
            "samples not choked against outlet pressure"
        );
    }
    if let Some(mid) = dataset.midpoint() {
        tracing::info!(
            mass_flow_kg_s = mid.mass_flow_rate,
            volume_flow_m3_s = mid.volume_flow_rate_at_output_pressure,
            pressure_kpa = mid.pressure,
            temperature_k = mid.temperature,
            critical_pressure_kpa = mid.critical_pressure,
            "mid-range sample"
        );
    }

    Ok(dataset)
}

/// Serialize NaN as `null` and read `null` back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sf_fluids::{FrozenGasModel, GasComponent};
    use std::sync::Arc;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn sweep_pressures_strictly_increase(
            min in 50.0_f64..500.0,
            span in 1.0_f64..2000.0,
            steps in 1_usize..200,
            cf in 0.3_f64..0.95,
        ) {
            let registry = EosRegistry::new().with_backend(
                EosMethod::Detail,
                Arc::new(FrozenGasModel::new(1.0, 1.4, cf).unwrap()),
            );
            let spec = PressureSweepSpec::new(min, min + span, 101.325, 293.15);
            let dataset = generate_dataset(
                &registry,
                EosMethod::Detail,
                &GasComposition::pure(GasComponent::Nitrogen),
                &NozzleGeometry::new(0.5, 1.0e5),
                &spec,
                &SweepConfig::with_steps(steps),
            ).unwrap();

            prop_assert_eq!(dataset.len(), steps);
            let p = dataset.pressures();
            prop_assert_eq!(p[0], min);
            prop_assert!(p[steps - 1] < min + span);
            for w in p.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
            for s in &dataset {
                prop_assert_eq!(s.mass_flow_rate.is_nan(), s.critical_pressure < 101.325);
            }
        }
    }
}
