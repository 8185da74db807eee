//! The 21 components of the AGA8 DETAIL / GERG-2008 natural-gas model.

use serde::{Deserialize, Serialize};

/// Gas component, in the canonical AGA8 ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasComponent {
    /// Methane (CH₄)
    Methane,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// Isobutane
    Isobutane,
    /// n-Butane
    NButane,
    /// Isopentane
    Isopentane,
    /// n-Pentane
    NPentane,
    /// n-Hexane
    NHexane,
    /// n-Heptane
    NHeptane,
    /// n-Octane
    NOctane,
    /// n-Nonane
    NNonane,
    /// n-Decane
    NDecane,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Oxygen (O₂)
    Oxygen,
    /// Carbon monoxide (CO)
    CarbonMonoxide,
    /// Water (H₂O)
    Water,
    /// Hydrogen sulfide (H₂S)
    HydrogenSulfide,
    /// Helium (He)
    Helium,
    /// Argon (Ar)
    Argon,
}

/// Number of components in a composition.
pub const NUM_COMPONENTS: usize = 21;

impl GasComponent {
    pub const ALL: [GasComponent; NUM_COMPONENTS] = [
        GasComponent::Methane,
        GasComponent::Nitrogen,
        GasComponent::CarbonDioxide,
        GasComponent::Ethane,
        GasComponent::Propane,
        GasComponent::Isobutane,
        GasComponent::NButane,
        GasComponent::Isopentane,
        GasComponent::NPentane,
        GasComponent::NHexane,
        GasComponent::NHeptane,
        GasComponent::NOctane,
        GasComponent::NNonane,
        GasComponent::NDecane,
        GasComponent::Hydrogen,
        GasComponent::Oxygen,
        GasComponent::CarbonMonoxide,
        GasComponent::Water,
        GasComponent::HydrogenSulfide,
        GasComponent::Helium,
        GasComponent::Argon,
    ];

    /// Position in the canonical ordering.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name used in composition records.
    pub fn key(&self) -> &'static str {
        match self {
            GasComponent::Methane => "methane",
            GasComponent::Nitrogen => "nitrogen",
            GasComponent::CarbonDioxide => "carbon_dioxide",
            GasComponent::Ethane => "ethane",
            GasComponent::Propane => "propane",
            GasComponent::Isobutane => "isobutane",
            GasComponent::NButane => "n_butane",
            GasComponent::Isopentane => "isopentane",
            GasComponent::NPentane => "n_pentane",
            GasComponent::NHexane => "n_hexane",
            GasComponent::NHeptane => "n_heptane",
            GasComponent::NOctane => "n_octane",
            GasComponent::NNonane => "n_nonane",
            GasComponent::NDecane => "n_decane",
            GasComponent::Hydrogen => "hydrogen",
            GasComponent::Oxygen => "oxygen",
            GasComponent::CarbonMonoxide => "carbon_monoxide",
            GasComponent::Water => "water",
            GasComponent::HydrogenSulfide => "hydrogen_sulfide",
            GasComponent::Helium => "helium",
            GasComponent::Argon => "argon",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GasComponent::Methane => "Methane",
            GasComponent::Nitrogen => "Nitrogen",
            GasComponent::CarbonDioxide => "Carbon Dioxide",
            GasComponent::Ethane => "Ethane",
            GasComponent::Propane => "Propane",
            GasComponent::Isobutane => "Isobutane",
            GasComponent::NButane => "n-Butane",
            GasComponent::Isopentane => "Isopentane",
            GasComponent::NPentane => "n-Pentane",
            GasComponent::NHexane => "n-Hexane",
            GasComponent::NHeptane => "n-Heptane",
            GasComponent::NOctane => "n-Octane",
            GasComponent::NNonane => "n-Nonane",
            GasComponent::NDecane => "n-Decane",
            GasComponent::Hydrogen => "Hydrogen",
            GasComponent::Oxygen => "Oxygen",
            GasComponent::CarbonMonoxide => "Carbon Monoxide",
            GasComponent::Water => "Water",
            GasComponent::HydrogenSulfide => "Hydrogen Sulfide",
            GasComponent::Helium => "Helium",
            GasComponent::Argon => "Argon",
        }
    }

    /// Molar mass [g/mol], as tabulated by the AGA8 / GERG-2008 reference code.
    pub fn molar_mass(&self) -> f64 {
        match self {
            GasComponent::Methane => 16.042_46,
            GasComponent::Nitrogen => 28.013_4,
            GasComponent::CarbonDioxide => 44.009_5,
            GasComponent::Ethane => 30.069_04,
            GasComponent::Propane => 44.095_62,
            GasComponent::Isobutane => 58.122_2,
            GasComponent::NButane => 58.122_2,
            GasComponent::Isopentane => 72.148_78,
            GasComponent::NPentane => 72.148_78,
            GasComponent::NHexane => 86.175_36,
            GasComponent::NHeptane => 100.201_94,
            GasComponent::NOctane => 114.228_52,
            GasComponent::NNonane => 128.255_1,
            GasComponent::NDecane => 142.281_68,
            GasComponent::Hydrogen => 2.015_88,
            GasComponent::Oxygen => 31.998_8,
            GasComponent::CarbonMonoxide => 28.010_1,
            GasComponent::Water => 18.015_28,
            GasComponent::HydrogenSulfide => 34.080_88,
            GasComponent::Helium => 4.002_602,
            GasComponent::Argon => 39.948,
        }
    }
}

impl std::str::FromStr for GasComponent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "CH4" | "METHANE" => Ok(GasComponent::Methane),
            "N2" | "NITROGEN" => Ok(GasComponent::Nitrogen),
            "CO2" | "CARBON DIOXIDE" | "CARBONDIOXIDE" => Ok(GasComponent::CarbonDioxide),
            "C2H6" | "ETHANE" => Ok(GasComponent::Ethane),
            "C3H8" | "PROPANE" => Ok(GasComponent::Propane),
            "ISOBUTANE" | "I BUTANE" | "IC4" => Ok(GasComponent::Isobutane),
            "N BUTANE" | "NBUTANE" | "BUTANE" | "NC4" => Ok(GasComponent::NButane),
            "ISOPENTANE" | "I PENTANE" | "IC5" => Ok(GasComponent::Isopentane),
            "N PENTANE" | "NPENTANE" | "PENTANE" | "NC5" => Ok(GasComponent::NPentane),
            "N HEXANE" | "NHEXANE" | "HEXANE" | "C6" => Ok(GasComponent::NHexane),
            "N HEPTANE" | "NHEPTANE" | "HEPTANE" | "C7" => Ok(GasComponent::NHeptane),
            "N OCTANE" | "NOCTANE" | "OCTANE" | "C8" => Ok(GasComponent::NOctane),
            "N NONANE" | "NNONANE" | "NONANE" | "C9" => Ok(GasComponent::NNonane),
            "N DECANE" | "NDECANE" | "DECANE" | "C10" => Ok(GasComponent::NDecane),
            "H2" | "HYDROGEN" => Ok(GasComponent::Hydrogen),
            "O2" | "OXYGEN" => Ok(GasComponent::Oxygen),
            "CO" | "CARBON MONOXIDE" | "CARBONMONOXIDE" => Ok(GasComponent::CarbonMonoxide),
            "H2O" | "WATER" => Ok(GasComponent::Water),
            "H2S" | "HYDROGEN SULFIDE" | "HYDROGENSULFIDE" => Ok(GasComponent::HydrogenSulfide),
            "HE" | "HELIUM" => Ok(GasComponent::Helium),
            "AR" | "ARGON" => Ok(GasComponent::Argon),
            _ => Err("unknown gas component"),
        }
    }
}

impl std::fmt::Display for GasComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
