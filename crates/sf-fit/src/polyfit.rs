//! Least-squares polynomial fit with an increasing-degree search.
//!
//! x is mapped affinely onto [-1, 1] before building the Vandermonde matrix so that the solve
//! stays well conditioned on compact pressure ranges. Each degree is solved by SVD; the
//! coefficients are then expanded back to ascending powers of the raw x.
//!
//! The expansion amplifies rounding by roughly `((|lo| + |hi|) / (hi − lo))^degree`, so on ranges
//! far from zero it limits the usable degree well before the solve does. The search stops at
//! the first degree whose expanded polynomial no longer tracks the scaled one.

use crate::config::FitConfig;
use crate::error::{FitError, FitResult};
use crate::model::{PolynomialModel, horner};
use nalgebra::{DMatrix, DVector};
use sf_nozzle::FlowDataset;

/// Largest accepted gap between the correlations of the scaled fit and its raw expansion.
pub const EXPANSION_CORRELATION_TOLERANCE: f64 = 1e-6;

/// Fit `y(x)` with the lowest degree whose correlation reaches `config.min_correlation`.
///
/// Pairs whose `y` is NaN (non-choked samples) are dropped. The usable degree is capped at
/// `distinct_x − 1`. The search stops once the design matrix becomes rank deficient or the
/// raw-power expansion loses the scaled fit's accuracy; in those cases, and when no degree
/// reaches the threshold, the best model seen is returned.
pub fn fit_polynomial(x: &[f64], y: &[f64], config: &FitConfig) -> FitResult<PolynomialModel> {
    if x.len() != y.len() {
        return Err(FitError::InputMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    config.validate()?;

    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter(|(_, yi)| !yi.is_nan())
        .map(|(&xi, &yi)| (xi, yi))
        .unzip();
    if xs.is_empty() {
        return Err(FitError::InsufficientData {
            what: format!("no valid samples among {}", x.len()),
        });
    }
    if xs.iter().chain(&ys).any(|v| !v.is_finite()) {
        return Err(FitError::Numeric {
            what: "non-finite input value".to_string(),
        });
    }

    let scale = AffineScale::onto_unit_interval(&xs);
    let t: Vec<f64> = xs.iter().map(|&v| scale.apply(v)).collect();
    let cap = config.max_degree.min(count_distinct(&xs) - 1);
    if cap < config.max_degree {
        tracing::debug!(
            requested = config.max_degree,
            cap,
            "degree capped by distinct x values"
        );
    }

    let mut best: Option<PolynomialModel> = None;
    for degree in cap.min(1)..=cap {
        let Some(scaled) = solve_scaled(&t, &ys, degree, config.rank_tolerance)? else {
            if best.is_none() {
                return Err(FitError::Numeric {
                    what: format!("design matrix rank deficient at degree {degree}"),
                });
            }
            tracing::warn!(degree, "design matrix rank deficient; stopping degree search");
            break;
        };

        let terms = scale.expand(&scaled);
        let predicted: Vec<f64> = xs.iter().map(|&v| horner(&terms, v)).collect();
        let correlation = pearson(&ys, &predicted);
        let scaled_predicted: Vec<f64> = t.iter().map(|&v| horner(&scaled, v)).collect();
        let scaled_correlation = pearson(&ys, &scaled_predicted);
        tracing::debug!(degree, correlation, scaled_correlation, "polynomial degree tried");

        if best.is_some() && expansion_diverges(scaled_correlation, correlation) {
            tracing::warn!(
                degree,
                correlation,
                scaled_correlation,
                "raw-power expansion lost precision; stopping degree search"
            );
            break;
        }

        let model = PolynomialModel::new(terms, correlation);
        if correlation >= config.min_correlation {
            return Ok(model);
        }
        if best.as_ref().is_none_or(|b| correlation > b.correlation) {
            best = Some(model);
        }
    }

    match best {
        Some(model) => {
            tracing::warn!(
                correlation = model.correlation,
                degree = model.degree(),
                threshold = config.min_correlation,
                "correlation threshold not reached"
            );
            Ok(model)
        }
        None => Err(FitError::Numeric {
            what: "no polynomial degree could be fitted".to_string(),
        }),
    }
}

/// Fit mass flow against inlet pressure over the choked samples of a sweep.
pub fn fit_dataset(dataset: &FlowDataset, config: &FitConfig) -> FitResult<PolynomialModel> {
    fit_polynomial(&dataset.pressures(), &dataset.mass_flow_rates(), config)
}

/// `t = slope·x + offset`
#[derive(Debug, Clone, Copy)]
struct AffineScale {
    slope: f64,
    offset: f64,
}

impl AffineScale {
    fn onto_unit_interval(xs: &[f64]) -> Self {
        let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = hi - lo;
        if span > 0.0 {
            Self {
                slope: 2.0 / span,
                offset: -(hi + lo) / span,
            }
        } else {
            Self {
                slope: 0.0,
                offset: 0.0,
            }
        }
    }

    fn apply(&self, x: f64) -> f64 {
        self.slope * x + self.offset
    }

    /// Rewrite `Σ c_j·t^j` as ascending coefficients in x.
    fn expand(&self, scaled: &[f64]) -> Vec<f64> {
        let mut acc: Vec<f64> = Vec::with_capacity(scaled.len());
        for &c in scaled.iter().rev() {
            let mut next = vec![0.0; acc.len() + 1];
            for (k, &a) in acc.iter().enumerate() {
                next[k] += a * self.offset;
                next[k + 1] += a * self.slope;
            }
            next[0] += c;
            acc = next;
        }
        acc
    }
}

/// Least-squares coefficients in t, or `None` when the system is rank deficient.
fn solve_scaled(
    t: &[f64],
    y: &[f64],
    degree: usize,
    rank_tolerance: f64,
) -> FitResult<Option<Vec<f64>>> {
    let cols = degree + 1;
    let vandermonde = DMatrix::from_fn(t.len(), cols, |i, j| t[i].powi(j as i32));
    let b = DVector::from_column_slice(y);

    let svd = vandermonde.svd(true, true);
    let sigma_max = svd.singular_values.max();
    let eps = rank_tolerance * sigma_max;
    if svd.rank(eps) < cols {
        return Ok(None);
    }

    let solution = svd.solve(&b, eps).map_err(|e| FitError::Numeric {
        what: format!("SVD solve failed at degree {degree}: {e}"),
    })?;
    let coeffs: Vec<f64> = solution.iter().copied().collect();
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Ok(None);
    }
    Ok(Some(coeffs))
}

/// True when the raw expansion no longer reproduces the scaled fit.
fn expansion_diverges(scaled_correlation: f64, correlation: f64) -> bool {
    let gap = (scaled_correlation - correlation).abs();
    gap.is_nan() || gap > EXPANSION_CORRELATION_TOLERANCE
}

fn count_distinct(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// Pearson correlation of `y` and `y_hat`.
///
/// Constant `y` reproduced exactly counts as a perfect fit.
fn pearson(y: &[f64], y_hat: &[f64]) -> f64 {
    let n = y.len() as f64;
    let mean_y = y.iter().sum::<f64>() / n;
    let mean_p = y_hat.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&a, &b) in y.iter().zip(y_hat) {
        let da = a - mean_y;
        let db = b - mean_p;
        sxy += da * db;
        sxx += da * da;
        syy += db * db;
    }

    if sxx == 0.0 {
        let scale = mean_y.abs().max(1.0);
        let max_residual = y
            .iter()
            .zip(y_hat)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        return if max_residual <= 1e-9 * scale { 1.0 } else { 0.0 };
    }
    if syy == 0.0 {
        return 0.0;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lines_are_recovered(
            slope in -10.0_f64..10.0,
            intercept in -100.0_f64..100.0,
            lo in 50.0_f64..500.0,
            span in 10.0_f64..1000.0,
            n in 3_usize..60,
        ) {
            prop_assume!(slope.abs() > 1e-3);
            let x: Vec<f64> = (0..n).map(|i| lo + span * i as f64 / (n - 1) as f64).collect();
            let y: Vec<f64> = x.iter().map(|v| slope * v + intercept).collect();
            let m = fit_polynomial(&x, &y, &FitConfig::default()).unwrap();
            prop_assert_eq!(m.degree(), 1);
            prop_assert!(m.correlation > 0.999_999);
            prop_assert!((m.terms[1] - slope).abs() < 1e-6 * slope.abs().max(1.0));
        }
    }
}
