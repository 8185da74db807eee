//! sf-fluids: gas compositions and the equation-of-state seam for sonicflow.
//!
//! Provides:
//! - The 21 AGA8 gas components and fixed-size compositions over them
//! - A catalog of named reference mixtures (air, nitrogen, methane, ...)
//! - The `EquationOfState` trait the nozzle sweep consumes
//! - `EosRegistry` / `EosAdapter`, selecting DETAIL or GERG-2008 at runtime
//! - `FrozenGasModel`, a frozen-property reference backend
//!
//! # Architecture
//!
//! The real-gas thermodynamics are an external service. This crate defines a stable API
//! (`EquationOfState`) that isolates the rest of sonicflow from whichever implementation is
//! linked, and one adapter per method that normalizes and sanity-checks its output.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sf_fluids::{EosMethod, EosRegistry, FrozenGasModel, GasComponent, GasComposition};
//!
//! let registry = EosRegistry::new().with_backend(
//!     EosMethod::Gerg2008,
//!     Arc::new(FrozenGasModel::new(1.0, 1.4, 0.84).unwrap()),
//! );
//! let mut eos = registry.adapter(EosMethod::Gerg2008).unwrap();
//! eos.setup().unwrap();
//!
//! let n2 = GasComposition::pure(GasComponent::Nitrogen);
//! let d = eos.density(293.15, 200.0, &n2).unwrap();
//! let props = eos.properties(293.15, d, &n2).unwrap();
//! assert!((props.p - 200.0).abs() < 1e-9);
//! ```

pub mod adapter;
pub mod catalog;
pub mod component;
pub mod composition;
pub mod eos;
pub mod error;
pub mod frozen;
pub mod method;

// Re-exports for ergonomics
pub use adapter::{EosAdapter, EosRegistry};
pub use catalog::{MixtureCatalogEntry, find_mixture, mixture_catalog};
pub use component::{GasComponent, NUM_COMPONENTS};
pub use composition::GasComposition;
pub use eos::{EosProperties, EquationOfState};
pub use error::{FluidError, FluidResult};
pub use frozen::{FrozenGasModel, ideal_critical_flow_function};
pub use method::EosMethod;
