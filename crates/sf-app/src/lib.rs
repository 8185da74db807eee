//! sf-app: study files and the sweep-then-fit service for sonicflow.
//!
//! A study names a gas, a nozzle, a pressure sweep and an equation-of-state method. Running it
//! produces the flow dataset, an optional polynomial flow model and a short summary. Backends
//! are supplied by the caller through an `EosRegistry`.

pub mod config;
pub mod error;
pub mod study;
pub mod summary;

pub use config::{GasSpec, StudyConfig, load_json, load_yaml, save_json, save_yaml};
pub use error::{AppError, AppResult};
pub use study::{StudyReport, run_study};
pub use summary::DatasetSummary;
