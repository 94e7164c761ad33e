use portfolio_analytics::shared_math::{finite_or_zero, linear_fit, mean, volatility};

/// Extend the least-squares line through `values` by `horizon` periods.
pub fn linear_forecast(values: &[f64], horizon: usize) -> Vec<f64> {
    let (slope, intercept) = linear_fit(values);
    let n = values.len();
    (n..n + horizon)
        .map(|x| finite_or_zero(slope * x as f64 + intercept))
        .collect()
}

/// `1 - volatility/mean` clamped to `[floor, ceiling]`.
/// Needs three points and a positive mean, otherwise `default`.
pub fn forecast_confidence(values: &[f64], floor: f64, ceiling: f64, default: f64) -> f64 {
    if values.len() < 3 {
        return default;
    }
    let avg = mean(values);
    if avg <= 0.0 {
        return default;
    }
    (1.0 - volatility(values) / avg).min(ceiling).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_continues_line() {
        let forecast = linear_forecast(&[100.0, 110.0, 120.0], 2);
        assert_eq!(forecast.len(), 2);
        assert!((forecast[0] - 130.0).abs() < 1e-9);
        assert!((forecast[1] - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_of_compounding_series() {
        // slope 10.5, intercept 299.5 / 3
        let forecast = linear_forecast(&[100.0, 110.0, 121.0], 2);
        let intercept = 299.5 / 3.0;
        assert!((forecast[0] - (31.5 + intercept)).abs() < 1e-9);
        assert!((forecast[1] - (42.0 + intercept)).abs() < 1e-9);
    }

    #[test]
    fn test_overflowing_forecast_reads_zero() {
        let forecast = linear_forecast(&[-1e308, 1e308], 2);
        assert!(forecast.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zero_horizon() {
        assert!(linear_forecast(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_confidence_bounds() {
        // flat series: 1 - 0 = 1, clamped to ceiling
        assert!((forecast_confidence(&[5.0, 5.0, 5.0], 0.3, 0.9, 0.5) - 0.9).abs() < 1e-12);
        // wild series: clamped to floor
        assert!((forecast_confidence(&[1.0, 100.0, 1.0], 0.3, 0.9, 0.5) - 0.3).abs() < 1e-12);
        // in range: mean 100, std dev sqrt(5000 / 3)
        let c = forecast_confidence(&[50.0, 100.0, 150.0], 0.3, 0.9, 0.5);
        let expected = 1.0 - (5000.0_f64 / 3.0).sqrt() / 100.0;
        assert!((c - expected).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_defaults() {
        assert_eq!(forecast_confidence(&[1.0, 2.0], 0.3, 0.9, 0.5), 0.5);
        assert_eq!(forecast_confidence(&[-1.0, -2.0, -3.0], 0.3, 0.9, 0.5), 0.5);
        assert_eq!(forecast_confidence(&[-1.0, 0.0, 1.0], 0.3, 0.9, 0.5), 0.5);
    }
}
