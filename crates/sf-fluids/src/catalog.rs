//! Named reference mixtures.

use crate::component::GasComponent;
use crate::composition::GasComposition;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureCatalogEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    fractions: &'static [(GasComponent, f64)],
}

impl MixtureCatalogEntry {
    pub fn composition(&self) -> GasComposition {
        GasComposition::from_fractions(self.fractions)
    }

    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(query))
    }
}

const MIXTURE_CATALOG: [MixtureCatalogEntry; 10] = [
    MixtureCatalogEntry {
        name: "Air",
        aliases: &["atmosphere"],
        fractions: &[
            (GasComponent::Nitrogen, 0.7808),
            (GasComponent::Oxygen, 0.2095),
            (GasComponent::Water, 0.0004),
            (GasComponent::Argon, 0.0093),
        ],
    },
    MixtureCatalogEntry {
        name: "Methane",
        aliases: &["CH4"],
        fractions: &[(GasComponent::Methane, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Nitrogen",
        aliases: &["N2"],
        fractions: &[(GasComponent::Nitrogen, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Hydrogen Sulfide",
        aliases: &["H2S"],
        fractions: &[(GasComponent::HydrogenSulfide, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Carbon Monoxide",
        aliases: &["CO"],
        fractions: &[(GasComponent::CarbonMonoxide, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Carbon Dioxide",
        aliases: &["CO2"],
        fractions: &[(GasComponent::CarbonDioxide, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Hydrogen",
        aliases: &["H2"],
        fractions: &[(GasComponent::Hydrogen, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Oxygen",
        aliases: &["O2"],
        fractions: &[(GasComponent::Oxygen, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Helium",
        aliases: &["He"],
        fractions: &[(GasComponent::Helium, 1.0)],
    },
    MixtureCatalogEntry {
        name: "Argon",
        aliases: &["Ar"],
        fractions: &[(GasComponent::Argon, 1.0)],
    },
];

pub fn mixture_catalog() -> &'static [MixtureCatalogEntry] {
    &MIXTURE_CATALOG
}

/// Look up a reference mixture by name or alias (case-insensitive).
pub fn find_mixture(name: &str) -> Option<GasComposition> {
    MIXTURE_CATALOG
        .iter()
        .find(|entry| entry.matches_name(name))
        .map(MixtureCatalogEntry::composition)
}
