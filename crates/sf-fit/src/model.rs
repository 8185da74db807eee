use serde::{Deserialize, Serialize};

/// Fitted polynomial `y = Σ terms[k]·x^k` with its achieved correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialModel {
    /// Coefficients, ascending power of x
    pub terms: Vec<f64>,
    /// Pearson correlation between observed and fitted y
    pub correlation: f64,
}

impl PolynomialModel {
    pub fn new(terms: Vec<f64>, correlation: f64) -> Self {
        Self { terms, correlation }
    }

    pub fn degree(&self) -> usize {
        self.terms.len().saturating_sub(1)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        horner(&self.terms, x)
    }

    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

pub(crate) fn horner(terms: &[f64], x: f64) -> f64 {
    terms.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
