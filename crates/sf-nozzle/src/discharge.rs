//! ISO 9300 discharge coefficient for toroidal-throat sonic nozzles.
//!
//! ```text
//! Cd = a − b·Re^(−n)
//! ```
//!
//! The correlation is certified for 2.1·10⁴ ≤ Re ≤ 3.2·10⁷. [`discharge_coefficient`] does not
//! reject values outside that range; callers that need the guarantee use
//! [`check_reynolds_range`].

use crate::error::{NozzleError, NozzleResult};

/// Constant term `a`.
pub const CD_A: f64 = 0.9959;
/// Reynolds factor `b`.
pub const CD_B: f64 = 2.720;
/// Reynolds exponent `n`.
pub const CD_N: f64 = 0.5;

/// Lower bound of the certified Reynolds range.
pub const RE_MIN: f64 = 2.1e4;
/// Upper bound of the certified Reynolds range.
pub const RE_MAX: f64 = 3.2e7;

/// Discharge coefficient at Reynolds number `re`.
pub fn discharge_coefficient(re: f64) -> f64 {
    CD_A - CD_B * re.powf(-CD_N)
}

pub fn reynolds_in_certified_range(re: f64) -> bool {
    (RE_MIN..=RE_MAX).contains(&re)
}

/// Hard validation of the certified range.
pub fn check_reynolds_range(re: f64) -> NozzleResult<()> {
    if reynolds_in_certified_range(re) {
        Ok(())
    } else {
        Err(NozzleError::ReynoldsOutOfRange {
            re,
            min: RE_MIN,
            max: RE_MAX,
        })
    }
}

/// `(Cd(RE_MIN), Cd(RE_MAX))`.
pub fn discharge_coefficient_bounds() -> (f64, f64) {
    (
        discharge_coefficient(RE_MIN),
        discharge_coefficient(RE_MAX),
    )
}

/// Geometric mean of Cd at the two range bounds, used for reporting a typical value.
pub fn typical_discharge_coefficient() -> f64 {
    let (cd_min, cd_max) = discharge_coefficient_bounds();
    (cd_min * cd_max).sqrt()
}
