use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Thresholds and tuning knobs shared by every engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    // Trend classification
    pub trend_threshold_pct: f64,     // 5.0 -> +/-5% first-to-last change
    pub forecast_horizon: usize,      // 2 periods ahead

    // Forecast confidence
    pub confidence_floor: f64,        // 0.3
    pub confidence_ceiling: f64,      // 0.9
    pub default_confidence: f64,      // 0.5 when too little data

    // Benchmark tagging (percentile scale 0-100)
    pub strength_percentile: f64,     // >= 75
    pub improvement_percentile: f64,  // <= 25

    // Insight rules
    pub high_concentration: f64,          // > 0.5
    pub low_diversification: f64,         // < 0.7
    pub strong_roe_pct: f64,              // > 15
    pub strong_risk_adjusted_return: f64, // > 1.5
    pub min_industries: usize,            // < 3
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_threshold_pct: 5.0,
            forecast_horizon: 2,
            confidence_floor: 0.3,
            confidence_ceiling: 0.9,
            default_confidence: 0.5,
            strength_percentile: 75.0,
            improvement_percentile: 25.0,
            high_concentration: 0.5,
            low_diversification: 0.7,
            strong_roe_pct: 15.0,
            strong_risk_adjusted_return: 1.5,
            min_industries: 3,
        }
    }
}

impl AnalyticsConfig {
    /// Build from `ANALYTICS_*` environment variables, falling back to d.
    pub fn from_env() -> AnalysisResult<Self> {
        let d = Self::default();
        let config = Self {
            trend_threshold_pct: env_or("ANALYTICS_TREND_THRESHOLD_PCT", d.trend_threshold_pct)?,
            forecast_horizon: env_or("ANALYTICS_FORECAST_HORIZON", d.forecast_horizon)?,
            confidence_floor: env_or("ANALYTICS_CONFIDENCE_FLOOR", d.confidence_floor)?,
            confidence_ceiling: env_or("ANALYTICS_CONFIDENCE_CEILING", d.confidence_ceiling)?,
            default_confidence: env_or("ANALYTICS_CONFIDENCE_DEFAULT", d.default_confidence)?,
            strength_percentile: env_or("ANALYTICS_STRENGTH_PERCENTILE", d.strength_percentile)?,
            improvement_percentile: env_or(
                "ANALYTICS_IMPROVEMENT_PERCENTILE",
                d.improvement_percentile,
            )?,
            high_concentration: env_or("ANALYTICS_HIGH_CONCENTRATION", d.high_concentration)?,
            low_diversification: env_or("ANALYTICS_LOW_DIVERSIFICATION", d.low_diversification)?,
            strong_roe_pct: env_or("ANALYTICS_STRONG_ROE_PCT", d.strong_roe_pct)?,
            strong_risk_adjusted_return: env_or(
                "ANALYTICS_STRONG_RISK_ADJUSTED",
                d.strong_risk_adjusted_return,
            )?,
            min_industries: env_or("ANALYTICS_MIN_INDUSTRIES", d.min_industries)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        if self.forecast_horizon == 0 {
            return Err(AnalysisError::InvalidConfig(
                "forecast_horizon must be at least 1".to_string(),
            ));
        }
        if self.confidence_floor > self.confidence_ceiling {
            return Err(AnalysisError::InvalidConfig(format!(
                "confidence_floor ({}) exceeds confidence_ceiling ({})",
                self.confidence_floor, self.confidence_ceiling
            )));
        }
        for (name, value) in [
            ("strength_percentile", self.strength_percentile),
            ("improvement_percentile", self.improvement_percentile),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{name} must be within 0-100, got {value}"
                )));
            }
        }
        if !self.trend_threshold_pct.is_finite() || self.trend_threshold_pct < 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "trend_threshold_pct must be a non-negative number, got {}",
                self.trend_threshold_pct
            )));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> AnalysisResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AnalysisError::InvalidConfig(format!("{key}={raw} is not a valid value"))),
        Err(_) => Ok(default),
    }
}
