//! Pure statistical helpers shared by the risk, performance and trend engines.
//! Stateless functions over immutable slices; every degenerate input maps to a
//! finite neutral value instead of NaN.

use statrs::statistics::Statistics;

/// Maps an overflowed or undefined result (inf, NaN) to 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    finite_or_zero(values.mean())
}

/// Population standard deviation of the raw values (not their returns).
/// Returns 0 for fewer than 2 points.
pub fn volatility(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sd = values.population_std_dev();
    if sd.is_finite() { sd } else { 0.0 }
}

/// Period-over-period simple returns. A step whose base value is not positive
/// contributes no return, so the output can be shorter than `len - 1`.
pub fn period_returns(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }
    values
        .windows(2)
        .filter_map(|w| {
            if w[0] > 0.0 {
                Some(finite_or_zero((w[1] - w[0]) / w[0]))
            } else {
                None
            }
        })
        .collect()
}

/// Pearson correlation of two series paired by index.
/// Requires equal lengths of at least 2; otherwise 0. A flat series has no
/// defined correlation and also yields 0.
pub fn correlation(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.len() < 2 {
        return 0.0;
    }
    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut ss_ab = 0.0;
    let mut ss_aa = 0.0;
    let mut ss_bb = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let da = x - mean_a;
        let db = y - mean_b;
        ss_ab += da * db;
        ss_aa += da * da;
        ss_bb += db * db;
    }

    let denominator = (ss_aa * ss_bb).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    finite_or_zero(ss_ab / denominator)
}

/// Herfindahl index from weights (0-1 scale). Higher = more concentrated.
pub fn herfindahl_index(weights: &[f64]) -> f64 {
    weights.iter().map(|w| w * w).sum()
}

/// Compound growth rate in percent implied by the first and last value over
/// `len - 1` periods. 0 for fewer than 2 points, a non-positive start, or a
/// sign change that leaves the root undefined.
pub fn growth_rate(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let first = values[0];
    let last = values[values.len() - 1];
    if first <= 0.0 {
        return 0.0;
    }
    let ratio = last / first;
    if ratio < 0.0 {
        return 0.0;
    }
    let periods = (values.len() - 1) as f64;
    finite_or_zero((ratio.powf(1.0 / periods) - 1.0) * 100.0)
}

/// Ordinary least squares of value against 0-based period index.
/// Returns (slope, intercept). Fewer than 2 points gives a flat line through
/// the single value (or zero).
pub fn linear_fit(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n < 2 {
        return (0.0, values.first().copied().unwrap_or(0.0));
    }
    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = nf * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return (0.0, sum_y / nf);
    }
    let slope = finite_or_zero((nf * sum_xy - sum_x * sum_y) / denominator);
    let intercept = finite_or_zero((sum_y - slope * sum_x) / nf);
    (slope, intercept)
}

/// Median of the values; mean of the two middle values for an even count.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        finite_or_zero((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        sorted[mid]
    }
}

/// Percent change from the first to the last point, relative to the
/// magnitude of the first. 0 when there is no usable base.
pub fn percent_change(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let first = values[0];
    let last = values[values.len() - 1];
    if first == 0.0 {
        return 0.0;
    }
    finite_or_zero((last - first) / first.abs() * 100.0)
}
