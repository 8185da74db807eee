//! Physical constants shared across the workspace.

/// Molar gas constant [J/(mol·K)] (CODATA 2018, exact).
pub const R_MOLAR: f64 = 8.314_462_618_153_24;

/// One standard atmosphere [kPa].
pub const P_STANDARD_ATM_KPA: f64 = 101.325;

/// Kilopascal to pascal.
pub const PA_PER_KPA: f64 = 1000.0;

/// Millimetre to metre.
pub const M_PER_MM: f64 = 1.0e-3;

/// Grams per kilogram, used for g/mol -> kg/mol.
pub const G_PER_KG: f64 = 1000.0;

/// Litres per cubic metre, used for mol/L -> mol/m³.
pub const L_PER_M3: f64 = 1000.0;
