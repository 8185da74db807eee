//! sf-fit: polynomial flow models for sonicflow datasets.
//!
//! Fits mass flow against inlet pressure with the lowest polynomial degree that reaches a
//! correlation threshold. Non-choked samples (NaN mass flow) are skipped.

pub mod config;
pub mod error;
pub mod model;
pub mod polyfit;

pub use config::FitConfig;
pub use error::{FitError, FitResult};
pub use model::PolynomialModel;
pub use polyfit::{EXPANSION_CORRELATION_TOLERANCE, fit_dataset, fit_polynomial};
