//! Gas composition over the 21 AGA8 components.

use crate::component::{GasComponent, NUM_COMPONENTS};
use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use sf_core::numeric::{Tolerances, nearly_equal};

/// Mole fractions of the 21 AGA8 components.
///
/// Components left out of a serialized record default to zero. The sum-to-one invariant is
/// owned by the equation-of-state service; [`GasComposition::validate`] is available to callers
/// that want to check it up front.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GasComposition {
    pub methane: f64,
    pub nitrogen: f64,
    pub carbon_dioxide: f64,
    pub ethane: f64,
    pub propane: f64,
    pub isobutane: f64,
    pub n_butane: f64,
    pub isopentane: f64,
    pub n_pentane: f64,
    pub n_hexane: f64,
    pub n_heptane: f64,
    pub n_octane: f64,
    pub n_nonane: f64,
    pub n_decane: f64,
    pub hydrogen: f64,
    pub oxygen: f64,
    pub carbon_monoxide: f64,
    pub water: f64,
    pub hydrogen_sulfide: f64,
    pub helium: f64,
    pub argon: f64,
}

impl GasComposition {
    /// Create a pure-component composition.
    pub fn pure(component: GasComponent) -> Self {
        Self::default().with(component, 1.0)
    }

    /// Create a composition from (component, fraction) pairs; unlisted components are zero.
    ///
    /// Repeated components accumulate. Fractions are taken as given, not normalized.
    pub fn from_fractions(fractions: &[(GasComponent, f64)]) -> Self {
        let mut values = [0.0; NUM_COMPONENTS];
        for (component, fraction) in fractions {
            values[component.index()] += fraction;
        }
        Self::from_array(values)
    }

    /// Build from fractions in canonical component order.
    pub fn from_array(values: [f64; NUM_COMPONENTS]) -> Self {
        let mut comp = Self::default();
        for (component, value) in GasComponent::ALL.iter().zip(values) {
            *comp.slot_mut(*component) = value;
        }
        comp
    }

    /// Return a copy with one component's fraction replaced.
    pub fn with(mut self, component: GasComponent, fraction: f64) -> Self {
        *self.slot_mut(component) = fraction;
        self
    }

    /// Mole fraction of a component.
    pub fn get(&self, component: GasComponent) -> f64 {
        match component {
            GasComponent::Methane => self.methane,
            GasComponent::Nitrogen => self.nitrogen,
            GasComponent::CarbonDioxide => self.carbon_dioxide,
            GasComponent::Ethane => self.ethane,
            GasComponent::Propane => self.propane,
            GasComponent::Isobutane => self.isobutane,
            GasComponent::NButane => self.n_butane,
            GasComponent::Isopentane => self.isopentane,
            GasComponent::NPentane => self.n_pentane,
            GasComponent::NHexane => self.n_hexane,
            GasComponent::NHeptane => self.n_heptane,
            GasComponent::NOctane => self.n_octane,
            GasComponent::NNonane => self.n_nonane,
            GasComponent::NDecane => self.n_decane,
            GasComponent::Hydrogen => self.hydrogen,
            GasComponent::Oxygen => self.oxygen,
            GasComponent::CarbonMonoxide => self.carbon_monoxide,
            GasComponent::Water => self.water,
            GasComponent::HydrogenSulfide => self.hydrogen_sulfide,
            GasComponent::Helium => self.helium,
            GasComponent::Argon => self.argon,
        }
    }

    fn slot_mut(&mut self, component: GasComponent) -> &mut f64 {
        match component {
            GasComponent::Methane => &mut self.methane,
            GasComponent::Nitrogen => &mut self.nitrogen,
            GasComponent::CarbonDioxide => &mut self.carbon_dioxide,
            GasComponent::Ethane => &mut self.ethane,
            GasComponent::Propane => &mut self.propane,
            GasComponent::Isobutane => &mut self.isobutane,
            GasComponent::NButane => &mut self.n_butane,
            GasComponent::Isopentane => &mut self.isopentane,
            GasComponent::NPentane => &mut self.n_pentane,
            GasComponent::NHexane => &mut self.n_hexane,
            GasComponent::NHeptane => &mut self.n_heptane,
            GasComponent::NOctane => &mut self.n_octane,
            GasComponent::NNonane => &mut self.n_nonane,
            GasComponent::NDecane => &mut self.n_decane,
            GasComponent::Hydrogen => &mut self.hydrogen,
            GasComponent::Oxygen => &mut self.oxygen,
            GasComponent::CarbonMonoxide => &mut self.carbon_monoxide,
            GasComponent::Water => &mut self.water,
            GasComponent::HydrogenSulfide => &mut self.hydrogen_sulfide,
            GasComponent::Helium => &mut self.helium,
            GasComponent::Argon => &mut self.argon,
        }
    }

    /// Fractions in canonical component order.
    pub fn to_array(&self) -> [f64; NUM_COMPONENTS] {
        GasComponent::ALL.map(|component| self.get(component))
    }

    /// Iterate over all components with their fractions (including zeros).
    pub fn iter(&self) -> impl Iterator<Item = (GasComponent, f64)> + '_ {
        GasComponent::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    /// Iterate over components with a non-zero fraction.
    pub fn present(&self) -> impl Iterator<Item = (GasComponent, f64)> + '_ {
        self.iter().filter(|(_, f)| *f != 0.0)
    }

    /// Sum of all mole fractions.
    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Returns `Some(component)` if exactly one component carries the whole mixture.
    pub fn is_pure(&self) -> Option<GasComponent> {
        let mut present = self.present();
        let (component, fraction) = present.next()?;
        if present.next().is_some() {
            return None;
        }
        let tol = Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        };
        nearly_equal(fraction, 1.0, tol).then_some(component)
    }

    /// Check fractions are finite, non-negative and sum to one within `tolerance`.
    pub fn validate(&self, tolerance: f64) -> FluidResult<()> {
        for (_, fraction) in self.iter() {
            if !fraction.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if fraction < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
        }
        if (self.sum() - 1.0).abs() > tolerance {
            return Err(FluidError::InvalidArg {
                what: "mole fractions do not sum to 1",
            });
        }
        Ok(())
    }

    /// Rescale so the fractions sum to one.
    pub fn normalized(&self) -> FluidResult<Self> {
        let mut values = self.to_array();
        let mut sum = 0.0;
        for value in &values {
            if !value.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *value < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += value;
        }
        if sum <= 0.0 || !sum.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }
        for value in &mut values {
            *value /= sum;
        }
        Ok(Self::from_array(values))
    }

    /// Mixture molar mass [g/mol] by the ideal mixing rule `M = Σ xᵢ·Mᵢ`.
    pub fn molar_mass(&self) -> f64 {
        self.iter()
            .map(|(component, fraction)| component.molar_mass() * fraction)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_composition() {
        let comp = GasComposition::pure(GasComponent::Nitrogen);
        assert_eq!(comp.is_pure(), Some(GasComponent::Nitrogen));
        assert_eq!(comp.nitrogen, 1.0);
        assert_eq!(comp.get(GasComponent::Methane), 0.0);
        assert!(comp.validate(1e-9).is_ok());
    }

    #[test]
    fn from_fractions_fills_named_fields() {
        let comp = GasComposition::from_fractions(&[
            (GasComponent::Nitrogen, 0.7808),
            (GasComponent::Oxygen, 0.2095),
            (GasComponent::Argon, 0.0093),
            (GasComponent::Water, 0.0004),
        ]);
        assert_eq!(comp.nitrogen, 0.7808);
        assert_eq!(comp.oxygen, 0.2095);
        assert_eq!(comp.argon, 0.0093);
        assert_eq!(comp.water, 0.0004);
        assert_eq!(comp.is_pure(), None);
        assert_eq!(comp.present().count(), 4);
    }

    #[test]
    fn array_roundtrip_preserves_order() {
        let mut values = [0.0; NUM_COMPONENTS];
        values[GasComponent::Ethane.index()] = 0.25;
        values[GasComponent::Helium.index()] = 0.75;
        let comp = GasComposition::from_array(values);
        assert_eq!(comp.ethane, 0.25);
        assert_eq!(comp.helium, 0.75);
        assert_eq!(comp.to_array(), values);
    }

    #[test]
    fn validate_rejects_bad_sums_and_negatives() {
        let short = GasComposition::from_fractions(&[(GasComponent::Methane, 0.5)]);
        assert!(short.validate(1e-6).is_err());

        let negative = GasComposition::from_fractions(&[
            (GasComponent::Methane, 1.5),
            (GasComponent::Nitrogen, -0.5),
        ]);
        assert!(matches!(
            negative.validate(1e-6),
            Err(FluidError::NonPhysical { .. })
        ));

        let nan = GasComposition::pure(GasComponent::Methane).with(GasComponent::Argon, f64::NAN);
        assert!(nan.validate(1e-6).is_err());
    }

    #[test]
    fn normalization_non_unit_sum() {
        let comp = GasComposition::from_fractions(&[
            (GasComponent::Oxygen, 2.0),
            (GasComponent::Nitrogen, 8.0),
        ])
        .normalized()
        .unwrap();

        let tol = Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        };
        assert!(nearly_equal(comp.oxygen, 0.2, tol));
        assert!(nearly_equal(comp.nitrogen, 0.8, tol));
    }

    #[test]
    fn normalization_rejects_empty() {
        assert!(GasComposition::default().normalized().is_err());
    }

    #[test]
    fn mixture_molar_mass() {
        let n2 = GasComposition::pure(GasComponent::Nitrogen);
        assert!((n2.molar_mass() - 28.0134).abs() < 1e-9);

        let half = GasComposition::from_fractions(&[
            (GasComponent::Methane, 0.5),
            (GasComponent::Ethane, 0.5),
        ]);
        let expected = 0.5 * 16.04246 + 0.5 * 30.06904;
        assert!((half.molar_mass() - expected).abs() < 1e-9);
    }

    #[test]
    fn serde_defaults_missing_components() {
        let comp: GasComposition =
            serde_json::from_str(r#"{"nitrogen": 0.79, "oxygen": 0.21}"#).unwrap();
        assert_eq!(comp.nitrogen, 0.79);
        assert_eq!(comp.oxygen, 0.21);
        assert_eq!(comp.methane, 0.0);
    }
}
