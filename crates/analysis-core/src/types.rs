use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Labels of the base financial statement series.
pub mod labels {
    pub const REVENUE: &str = "Revenue";
    pub const NET_INCOME: &str = "Net Income";
    pub const TOTAL_ASSETS: &str = "Total Assets";
    pub const TOTAL_LIABILITIES: &str = "Total Liabilities";
    pub const SHAREHOLDERS_EQUITY: &str = "Shareholders Equity";

    pub const BASE_SERIES: [&str; 5] = [
        REVENUE,
        NET_INCOME,
        TOTAL_ASSETS,
        TOTAL_LIABILITIES,
        SHAREHOLDERS_EQUITY,
    ];
}

/// Per-period financial statement data for one company, earliest period first.
///
/// The five base statements are explicit fields. `None` means the series was
/// never reported; `Some(vec![])` means it was reported with no periods.
/// Anything else the ingestion layer supplies lands in `extra`, keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialData {
    #[serde(rename = "Revenue", default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Vec<f64>>,
    #[serde(rename = "Net Income", default, skip_serializing_if = "Option::is_none")]
    pub net_income: Option<Vec<f64>>,
    #[serde(rename = "Total Assets", default, skip_serializing_if = "Option::is_none")]
    pub total_assets: Option<Vec<f64>>,
    #[serde(rename = "Total Liabilities", default, skip_serializing_if = "Option::is_none")]
    pub total_liabilities: Option<Vec<f64>>,
    #[serde(rename = "Shareholders Equity", default, skip_serializing_if = "Option::is_none")]
    pub shareholders_equity: Option<Vec<f64>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Vec<f64>>,
}

impl FinancialData {
    /// Look up a series by label. Returns `None` when the series is absent.
    pub fn series(&self, label: &str) -> Option<&[f64]> {
        let fixed = match label {
            labels::REVENUE => &self.revenue,
            labels::NET_INCOME => &self.net_income,
            labels::TOTAL_ASSETS => &self.total_assets,
            labels::TOTAL_LIABILITIES => &self.total_liabilities,
            labels::SHAREHOLDERS_EQUITY => &self.shareholders_equity,
            _ => return self.extra.get(label).map(Vec::as_slice),
        };
        fixed.as_deref()
    }

    /// Series values by label; absent series read as empty.
    pub fn values(&self, label: &str) -> &[f64] {
        self.series(label).unwrap_or(&[])
    }

    /// Most recent value of a series, if it has any periods.
    pub fn latest(&self, label: &str) -> Option<f64> {
        self.values(label).last().copied()
    }

    /// Store a series under `label`, routing base statements to their fields.
    pub fn set(&mut self, label: &str, values: Vec<f64>) {
        match label {
            labels::REVENUE => self.revenue = Some(values),
            labels::NET_INCOME => self.net_income = Some(values),
            labels::TOTAL_ASSETS => self.total_assets = Some(values),
            labels::TOTAL_LIABILITIES => self.total_liabilities = Some(values),
            labels::SHAREHOLDERS_EQUITY => self.shareholders_equity = Some(values),
            _ => {
                self.extra.insert(label.to_string(), values);
            }
        }
    }

    /// Iterate over every present series as `(label, values)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        labels::BASE_SERIES
            .iter()
            .filter_map(|label| self.series(label).map(|values| (*label, values)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_slice())))
    }
}

/// A company in the analyzed portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    /// Opaque industry label; peers are companies sharing the exact string.
    pub industry: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub financial_data: FinancialData,
}

impl Company {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industry: industry.into(),
            market_cap: None,
            financial_data: FinancialData::default(),
        }
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    pub fn with_series(mut self, label: &str, values: Vec<f64>) -> Self {
        self.financial_data.set(label, values);
        self
    }

    pub fn values(&self, label: &str) -> &[f64] {
        self.financial_data.values(label)
    }

    pub fn latest(&self, label: &str) -> Option<f64> {
        self.financial_data.latest(label)
    }
}

/// Direction of a series from its first to its last point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Upward,
    Downward,
    Sideways,
}

impl TrendDirection {
    /// Classify a first-to-last percent change against a symmetric threshold
    /// (inclusive on both sides).
    pub fn from_change(change_pct: f64, threshold_pct: f64) -> Self {
        if change_pct >= threshold_pct {
            TrendDirection::Upward
        } else if change_pct <= -threshold_pct {
            TrendDirection::Downward
        } else {
            TrendDirection::Sideways
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Upward => "upward",
            TrendDirection::Downward => "downward",
            TrendDirection::Sideways => "sideways",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction_thresholds_inclusive() {
        assert_eq!(TrendDirection::from_change(5.0, 5.0), TrendDirection::Upward);
        assert_eq!(TrendDirection::from_change(-5.0, 5.0), TrendDirection::Downward);
        assert_eq!(TrendDirection::from_change(4.99, 5.0), TrendDirection::Sideways);
        assert_eq!(TrendDirection::from_change(0.0, 5.0), TrendDirection::Sideways);
        assert_eq!(
            serde_json::to_string(&TrendDirection::Upward).unwrap(),
            "\"upward\""
        );
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let mut data = FinancialData::default();
        assert!(data.series(labels::REVENUE).is_none());

        data.set(labels::REVENUE, Vec::new());
        assert_eq!(data.series(labels::REVENUE), Some(&[][..]));
        assert!(data.latest(labels::REVENUE).is_none());
    }

    #[test]
    fn test_extra_series_lookup() {
        let company = Company::new("a", "Alpha", "Technology")
            .with_series("Operating Cash Flow", vec![1.0, 2.0])
            .with_series(labels::NET_INCOME, vec![5.0, 6.0]);

        assert_eq!(company.values("Operating Cash Flow"), &[1.0, 2.0]);
        assert_eq!(company.latest(labels::NET_INCOME), Some(6.0));
        assert!(company.financial_data.extra.get(labels::NET_INCOME).is_none());
        assert!(company.values("Missing").is_empty());
    }

    #[test]
    fn test_company_json_shape() {
        let json = r#"{
            "id": "acme",
            "name": "Acme Corp",
            "industry": "Industrials",
            "marketCap": 1200.0,
            "financialData": {
                "Revenue": [100.0, 110.0],
                "Shareholders Equity": [50.0],
                "Free Cash Flow": [3.0, 4.0]
            }
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.market_cap, Some(1200.0));
        assert_eq!(company.values(labels::REVENUE), &[100.0, 110.0]);
        assert_eq!(company.values("Free Cash Flow"), &[3.0, 4.0]);
        assert!(company.financial_data.net_income.is_none());

        let labels: Vec<&str> = company.financial_data.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Revenue", "Shareholders Equity", "Free Cash Flow"]);
    }
}
