use std::sync::Arc;

use sf_core::numeric::relative_difference;
use sf_fluids::{
    EosMethod, EosRegistry, FluidError, FrozenGasModel, GasComponent, GasComposition,
    find_mixture,
};
use sf_nozzle::{
    FlowDataset, NozzleError, NozzleGeometry, PressureSweepSpec, SweepConfig, generate_dataset,
};

fn nitrogen_registry() -> EosRegistry {
    let model = FrozenGasModel::new(0.9998, 1.401, 0.84).unwrap();
    EosRegistry::new().with_backend(EosMethod::Detail, Arc::new(model))
}

fn nitrogen_run(registry: &EosRegistry, method: EosMethod) -> Result<FlowDataset, NozzleError> {
    generate_dataset(
        registry,
        method,
        &GasComposition::pure(GasComponent::Nitrogen),
        &NozzleGeometry::new(0.5, 1.0e5),
        &PressureSweepSpec::new(200.0, 400.0, 101.325, 293.15),
        &SweepConfig::with_steps(10),
    )
}

#[test]
fn nitrogen_sweep_is_fully_choked_and_monotone() {
    let dataset = nitrogen_run(&nitrogen_registry(), EosMethod::Detail).unwrap();

    assert_eq!(dataset.len(), 10);
    let expected: Vec<f64> = (0..10).map(|i| 200.0 + 20.0 * i as f64).collect();
    for (p, e) in dataset.pressures().iter().zip(&expected) {
        assert!((p - e).abs() < 1e-9, "pressure {p} != {e}");
    }

    assert_eq!(dataset.valid_count(), 10);
    let flows = dataset.mass_flow_rates();
    for w in flows.windows(2) {
        assert!(w[1] > w[0], "mass flow not increasing: {w:?}");
    }
    for s in &dataset {
        assert!(s.mass_flow_rate > 0.0);
        assert!(s.volume_flow_rate_at_output_pressure > 0.0);
        assert!(s.volume_flow_rate_at_1atm > 0.0);
        assert!(s.critical_pressure >= 101.325);
        assert_eq!(s.temperature, 293.15);
        assert_eq!(s.cf, 0.84);
        assert_eq!(s.kappa, 1.401);
    }

    // Choked flow is linear in inlet pressure at fixed Cf.
    let ratio = flows[9] / flows[0];
    assert!((ratio - 380.0 / 200.0).abs() < 1e-9);
}

#[test]
fn air_from_catalog_sweeps() {
    let air = find_mixture("air").unwrap();
    let dataset = generate_dataset(
        &nitrogen_registry(),
        EosMethod::Detail,
        &air,
        &NozzleGeometry::new(1.2, 5.0e5),
        &PressureSweepSpec::new(150.0, 900.0, 101.325, 288.15),
        &SweepConfig::with_steps(50),
    )
    .unwrap();
    assert_eq!(dataset.len(), 50);
    let mid = dataset.midpoint().unwrap();
    assert!((mid.molar_mass_si - 0.02896).abs() < 5e-5);
}

#[test]
fn high_outlet_pressure_leaves_no_choked_points() {
    let dataset = generate_dataset(
        &nitrogen_registry(),
        EosMethod::Detail,
        &GasComposition::pure(GasComponent::Nitrogen),
        &NozzleGeometry::new(0.5, 1.0e5),
        &PressureSweepSpec::new(200.0, 400.0, 350.0, 293.15),
        &SweepConfig::with_steps(10),
    )
    .unwrap();
    assert_eq!(dataset.len(), 10);
    assert_eq!(dataset.valid_count(), 0);
    assert!(dataset.first_choked_pressure().is_none());
    assert!(dataset.iter().all(|s| s.volume_flow_rate_at_1atm.is_nan()));
}

#[test]
fn unregistered_method_yields_no_dataset() {
    let err = nitrogen_run(&nitrogen_registry(), EosMethod::Gerg2008).unwrap_err();
    assert!(err.is_service_unavailable());
    assert!(matches!(
        err,
        NozzleError::Fluid(FluidError::ServiceUnavailable { ref method, .. }) if method == "GERG-2008"
    ));
}

#[test]
fn both_methods_agree_on_shared_quantities() {
    // Two independent backends frozen at slightly different states.
    let registry = EosRegistry::new()
        .with_backend(
            EosMethod::Detail,
            Arc::new(FrozenGasModel::new(0.9998, 1.401, 0.8400).unwrap().with_name("detail")),
        )
        .with_backend(
            EosMethod::Gerg2008,
            Arc::new(FrozenGasModel::new(0.9997, 1.401, 0.8401).unwrap().with_name("gerg")),
        );

    let detail = nitrogen_run(&registry, EosMethod::Detail).unwrap();
    let gerg = nitrogen_run(&registry, EosMethod::Gerg2008).unwrap();

    for (a, b) in detail.iter().zip(gerg.iter()) {
        assert_eq!(a.molar_mass_si, b.molar_mass_si);
        assert!(relative_difference(a.cf, b.cf) < 1e-3);
        assert!(relative_difference(a.mass_flow_rate, b.mass_flow_rate) < 1e-3);
    }
}

#[test]
fn dataset_serializes_as_array() {
    let dataset = nitrogen_run(&nitrogen_registry(), EosMethod::Detail).unwrap();
    let json = serde_json::to_value(&dataset).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    for key in [
        "mass_flow_rate",
        "volume_flow_rate_at_output_pressure",
        "volume_flow_rate_at_1atm",
        "temperature",
        "pressure",
        "critical_pressure",
        "specific_nozzle_coefficient",
        "kappa",
        "cf",
        "molar_mass_si",
    ] {
        assert!(rows[0].get(key).is_some(), "missing {key}");
    }
}
