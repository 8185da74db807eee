//! Method-tagged access to equation-of-state services.

use crate::composition::GasComposition;
use crate::eos::{EosProperties, EquationOfState};
use crate::error::{FluidError, FluidResult};
use crate::method::EosMethod;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Backends available to the sweep, one per method.
#[derive(Clone, Default)]
pub struct EosRegistry {
    backends: HashMap<EosMethod, Arc<dyn EquationOfState>>,
}

impl EosRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`EosRegistry::register`].
    pub fn with_backend(mut self, method: EosMethod, backend: Arc<dyn EquationOfState>) -> Self {
        self.register(method, backend);
        self
    }

    /// Register (or replace) the backend serving `method`.
    pub fn register(&mut self, method: EosMethod, backend: Arc<dyn EquationOfState>) {
        self.backends.insert(method, backend);
    }

    pub fn has(&self, method: EosMethod) -> bool {
        self.backends.contains_key(&method)
    }

    pub fn backend(&self, method: EosMethod) -> Option<&Arc<dyn EquationOfState>> {
        self.backends.get(&method)
    }

    /// Create an uninitialized adapter for `method`.
    pub fn adapter(&self, method: EosMethod) -> FluidResult<EosAdapter> {
        let backend = self
            .backends
            .get(&method)
            .cloned()
            .ok_or_else(|| FluidError::ServiceUnavailable {
                method: method.to_string(),
                reason: "no backend registered".to_string(),
            })?;
        Ok(EosAdapter::new(method, backend))
    }
}

impl fmt::Debug for EosRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(String, &str)> = self
            .backends
            .iter()
            .map(|(method, backend)| (method.to_string(), backend.name()))
            .collect();
        entries.sort();
        f.debug_struct("EosRegistry")
            .field("backends", &entries)
            .finish()
    }
}

/// One method's view of the equation-of-state service.
///
/// Forwards calls to the backend and refuses to hand out degenerate values: a zero,
/// negative or non-finite molar mass or density, or a non-finite Cf/kappa, is reported as
/// [`FluidError::ServiceUnavailable`] instead of flowing into the sweep.
pub struct EosAdapter {
    method: EosMethod,
    backend: Arc<dyn EquationOfState>,
    ready: bool,
}

impl EosAdapter {
    pub fn new(method: EosMethod, backend: Arc<dyn EquationOfState>) -> Self {
        Self {
            method,
            backend,
            ready: false,
        }
    }

    pub fn method(&self) -> EosMethod {
        self.method
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Initialize the backend. Repeated calls are no-ops.
    pub fn setup(&mut self) -> FluidResult<()> {
        if self.ready {
            return Ok(());
        }
        self.backend
            .setup()
            .map_err(|e| self.unavailable(format!("setup failed: {e}")))?;
        self.ready = true;
        tracing::debug!(
            method = %self.method,
            backend = self.backend.name(),
            "equation-of-state backend ready"
        );
        Ok(())
    }

    /// Mixture molar mass [g/mol].
    pub fn molar_mass(&self, comp: &GasComposition) -> FluidResult<f64> {
        self.ensure_ready()?;
        let mm = self.backend.molar_mass(comp)?;
        self.ensure_positive(mm, "molar mass")
    }

    /// Molar density [mol/L] at `t_k` [K] and `p_kpa` [kPa].
    pub fn density(&self, t_k: f64, p_kpa: f64, comp: &GasComposition) -> FluidResult<f64> {
        self.ensure_ready()?;
        let d = self.backend.density(t_k, p_kpa, comp)?;
        self.ensure_positive(d, "density")
    }

    /// Property bundle at `t_k` [K] and `d_mol_l` [mol/L].
    pub fn properties(
        &self,
        t_k: f64,
        d_mol_l: f64,
        comp: &GasComposition,
    ) -> FluidResult<EosProperties> {
        self.ensure_ready()?;
        let props = self.backend.properties(t_k, d_mol_l, comp)?;
        if !props.cf.is_finite() {
            return Err(self.unavailable(format!("non-finite Cf {}", props.cf)));
        }
        if !props.kappa.is_finite() {
            return Err(self.unavailable(format!("non-finite kappa {}", props.kappa)));
        }
        Ok(props)
    }

    fn ensure_ready(&self) -> FluidResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(self.unavailable("used before setup".to_string()))
        }
    }

    fn ensure_positive(&self, value: f64, what: &str) -> FluidResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(self.unavailable(format!("backend returned {what} {value}")))
        }
    }

    fn unavailable(&self, reason: String) -> FluidError {
        FluidError::ServiceUnavailable {
            method: self.method.to_string(),
            reason,
        }
    }
}

impl fmt::Debug for EosAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EosAdapter")
            .field("method", &self.method)
            .field("backend", &self.backend.name())
            .field("ready", &self.ready)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::GasComponent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend returning fixed values and counting `setup` calls.
    struct FixedEos {
        molar_mass: f64,
        density: f64,
        cf: f64,
        setups: AtomicUsize,
        fail_setup: bool,
    }

    impl FixedEos {
        fn healthy() -> Self {
            Self {
                molar_mass: 28.0134,
                density: 0.04,
                cf: 0.84,
                setups: AtomicUsize::new(0),
                fail_setup: false,
            }
        }
    }

    impl EquationOfState for FixedEos {
        fn name(&self) -> &str {
            "fixed"
        }

        fn setup(&self) -> FluidResult<()> {
            self.setups.fetch_add(1, Ordering::SeqCst);
            if self.fail_setup {
                Err(FluidError::Backend {
                    message: "module not loaded".into(),
                })
            } else {
                Ok(())
            }
        }

        fn molar_mass(&self, _comp: &GasComposition) -> FluidResult<f64> {
            Ok(self.molar_mass)
        }

        fn density(&self, _t_k: f64, _p_kpa: f64, _comp: &GasComposition) -> FluidResult<f64> {
            Ok(self.density)
        }

        fn properties(
            &self,
            _t_k: f64,
            _d_mol_l: f64,
            _comp: &GasComposition,
        ) -> FluidResult<EosProperties> {
            Ok(EosProperties {
                p: 100.0,
                z: 1.0,
                cv: 20.8,
                cp: 29.1,
                w: 350.0,
                jt: 0.002,
                kappa: 1.4,
                cf: self.cf,
            })
        }
    }

    fn n2() -> GasComposition {
        GasComposition::pure(GasComponent::Nitrogen)
    }

    #[test]
    fn missing_backend_is_service_unavailable() {
        let registry =
            EosRegistry::new().with_backend(EosMethod::Detail, Arc::new(FixedEos::healthy()));
        assert!(registry.adapter(EosMethod::Detail).is_ok());
        let err = registry.adapter(EosMethod::Gerg2008).unwrap_err();
        assert!(matches!(err, FluidError::ServiceUnavailable { .. }));
        assert!(err.to_string().contains("GERG-2008"));
    }

    #[test]
    fn calls_before_setup_fail_fast() {
        let adapter = EosAdapter::new(EosMethod::Detail, Arc::new(FixedEos::healthy()));
        assert!(!adapter.is_ready());
        assert!(matches!(
            adapter.molar_mass(&n2()),
            Err(FluidError::ServiceUnavailable { .. })
        ));
        assert!(adapter.density(293.15, 101.325, &n2()).is_err());
        assert!(adapter.properties(293.15, 0.04, &n2()).is_err());
    }

    #[test]
    fn setup_is_idempotent() {
        let backend = Arc::new(FixedEos::healthy());
        let mut adapter = EosAdapter::new(EosMethod::Gerg2008, backend.clone());
        adapter.setup().unwrap();
        adapter.setup().unwrap();
        assert_eq!(backend.setups.load(Ordering::SeqCst), 1);
        assert!((adapter.molar_mass(&n2()).unwrap() - 28.0134).abs() < 1e-12);
        assert_eq!(adapter.properties(293.15, 0.04, &n2()).unwrap().cf, 0.84);
    }

    #[test]
    fn failed_setup_reports_method_and_cause() {
        let backend = FixedEos {
            fail_setup: true,
            ..FixedEos::healthy()
        };
        let mut adapter = EosAdapter::new(EosMethod::Detail, Arc::new(backend));
        let err = adapter.setup().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DETAIL"));
        assert!(msg.contains("module not loaded"));
        assert!(!adapter.is_ready());
    }

    #[test]
    fn degenerate_outputs_are_rejected() {
        let zero_mass = FixedEos {
            molar_mass: 0.0,
            ..FixedEos::healthy()
        };
        let mut adapter = EosAdapter::new(EosMethod::Detail, Arc::new(zero_mass));
        adapter.setup().unwrap();
        assert!(matches!(
            adapter.molar_mass(&n2()),
            Err(FluidError::ServiceUnavailable { .. })
        ));

        let nan_density = FixedEos {
            density: f64::NAN,
            ..FixedEos::healthy()
        };
        let mut adapter = EosAdapter::new(EosMethod::Detail, Arc::new(nan_density));
        adapter.setup().unwrap();
        assert!(adapter.density(293.15, 200.0, &n2()).is_err());

        let nan_cf = FixedEos {
            cf: f64::NAN,
            ..FixedEos::healthy()
        };
        let mut adapter = EosAdapter::new(EosMethod::Detail, Arc::new(nan_cf));
        adapter.setup().unwrap();
        assert!(adapter.properties(293.15, 0.04, &n2()).is_err());
    }

    #[test]
    fn registry_debug_lists_backends() {
        let registry = EosRegistry::new()
            .with_backend(EosMethod::Gerg2008, Arc::new(FixedEos::healthy()))
            .with_backend(EosMethod::Detail, Arc::new(FixedEos::healthy()));
        let text = format!("{registry:?}");
        assert!(text.contains("DETAIL"));
        assert!(text.contains("GERG-2008"));
        assert!(registry.has(EosMethod::Detail));
    }
}
