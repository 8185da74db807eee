//! Critical back-pressure of a sonic nozzle.

/// Highest outlet pressure at which flow stays choked: `P_crit = P_in · Cf`.
///
/// Unit-agnostic: the result carries the unit of `inlet_pressure`.
pub fn critical_pressure(inlet_pressure: f64, cf: f64) -> f64 {
    inlet_pressure * cf
}

/// Whether the nozzle stays choked against `outlet_pressure`.
///
/// Flow is choked unless the critical pressure falls strictly below the outlet pressure.
pub fn is_choked(inlet_pressure: f64, cf: f64, outlet_pressure: f64) -> bool {
    critical_pressure(inlet_pressure, cf) >= outlet_pressure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choking_threshold() {
        assert_eq!(critical_pressure(200.0, 0.5), 100.0);
        assert!(is_choked(200.0, 0.5, 100.0));
        assert!(is_choked(200.0, 0.5, 99.0));
        assert!(!is_choked(200.0, 0.5, 100.5));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exact_product(p in 0.0_f64..1.0e6, cf in 0.0_f64..2.0) {
            prop_assert_eq!(critical_pressure(p, cf), p * cf);
        }

        #[test]
        fn choked_iff_not_below_outlet(p in 0.0_f64..1.0e4, cf in 0.0_f64..1.0, p_out in 0.0_f64..1.0e4) {
            prop_assert_eq!(is_choked(p, cf, p_out), p * cf >= p_out);
        }
    }
}
