use crate::shared_math::finite_or_zero;
use analysis_core::Company;

/// Assigns a portfolio weight to each company, in input order.
/// Portfolio volatility, concentration and the weighted ratios all read
/// from this vector.
pub trait Weighting {
    fn weights(&self, companies: &[Company]) -> Vec<f64>;
}

/// Equal weight 1/N per company; an empty portfolio has no weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualWeight;

impl Weighting for EqualWeight {
    fn weights(&self, companies: &[Company]) -> Vec<f64> {
        if companies.is_empty() {
            return Vec::new();
        }
        let w = 1.0 / companies.len() as f64;
        vec![w; companies.len()]
    }
}

/// Dot product of weights and values, tolerating length mismatches by
/// truncating to the shorter side. An overflowed sum reads as 0.
pub fn weighted_sum(weights: &[f64], values: &[f64]) -> f64 {
    finite_or_zero(weights.iter().zip(values.iter()).map(|(w, v)| w * v).sum())
}
