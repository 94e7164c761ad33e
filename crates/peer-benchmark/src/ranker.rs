//! Overall Ranking Module
//!
//! Ranks every company in the portfolio by an unnormalized composite score.

use analysis_core::Company;
use portfolio_analytics::shared_math::finite_or_zero;
use portfolio_analytics::RatioMetric;

/// Ranks companies by the plain sum of their five ratio values.
///
/// Percentages and ratios are added as-is, so the larger-scale metrics dominate.
pub struct OverallRanker {
    scores: Vec<f64>,
}

impl OverallRanker {
    /// Score every company once. Missing ratio values count as 0.
    pub fn new(companies: &[Company]) -> Self {
        let mut scores: Vec<f64> = companies.iter().map(Self::score).collect();
        // Sort by score (descending)
        scores.sort_by(|a, b| b.total_cmp(a));
        Self { scores }
    }

    pub fn score(company: &Company) -> f64 {
        let total = RatioMetric::ALL
            .iter()
            .map(|metric| metric.value(company).unwrap_or(0.0))
            .sum::<f64>();
        finite_or_zero(total)
    }

    /// 1-based position of the first score at or below `score`.
    pub fn rank(&self, score: f64) -> usize {
        self.scores
            .iter()
            .position(|&s| s <= score)
            .unwrap_or(self.scores.len())
            + 1
    }
}
