use crate::models::PeriodAggregate;
use portfolio_analytics::shared_math::{mean, median};

/// Value at rank `floor(n * p)` of an ascending-sorted slice, clamped to the
/// last element. Not interchangeable with the descending peer percentile.
pub fn rank_percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = ((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Statistics at each period index across every series that reaches it.
/// Shorter series stop contributing at later indices.
pub fn period_aggregates(series: &[&[f64]]) -> Vec<PeriodAggregate> {
    let periods = series.iter().map(|s| s.len()).max().unwrap_or(0);

    (0..periods)
        .map(|period| {
            let mut values: Vec<f64> =
                series.iter().filter_map(|s| s.get(period).copied()).collect();
            values.sort_by(|a, b| a.total_cmp(b));

            PeriodAggregate {
                period,
                average: mean(&values),
                median: median(&values),
                q25: rank_percentile(&values, 0.25),
                q75: rank_percentile(&values, 0.75),
                count: values.len(),
            }
        })
        .collect()
}
