//! Equation-of-state method selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property-calculation method used on the sweep path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EosMethod {
    /// AGA8 DETAIL characterization.
    #[serde(rename = "DETAIL")]
    Detail,
    /// GERG-2008 reference equation.
    #[serde(rename = "GERG-2008", alias = "GERG2008", alias = "GERG")]
    Gerg2008,
}

impl EosMethod {
    pub const ALL: [EosMethod; 2] = [EosMethod::Detail, EosMethod::Gerg2008];

    pub fn label(self) -> &'static str {
        match self {
            Self::Detail => "DETAIL",
            Self::Gerg2008 => "GERG-2008",
        }
    }
}

impl fmt::Display for EosMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EosMethod {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DETAIL" => Ok(Self::Detail),
            "GERG-2008" | "GERG2008" | "GERG" => Ok(Self::Gerg2008),
            "GROSS" => Err("GROSS is not available for nozzle sweeps"),
            _ => Err("unknown equation-of-state method"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_roundtrip() {
        for method in EosMethod::ALL {
            assert_eq!(method.to_string().parse::<EosMethod>().unwrap(), method);
        }
        assert_eq!("gerg".parse::<EosMethod>().unwrap(), EosMethod::Gerg2008);
        assert!("GROSS".parse::<EosMethod>().is_err());
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&EosMethod::Gerg2008).unwrap();
        assert_eq!(json, "\"GERG-2008\"");
        let method: EosMethod = serde_json::from_str("\"DETAIL\"").unwrap();
        assert_eq!(method, EosMethod::Detail);
    }
}
