use crate::models::{CompanyPerformance, PerformanceMetrics};
use crate::shared_math::{self, finite_or_zero};
use crate::weights::weighted_sum;
use analysis_core::{labels, Company};
use serde::{Deserialize, Serialize};

/// The five standard ratios used for performance and peer benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatioMetric {
    Roe,
    Roa,
    RevenueGrowth,
    NetMargin,
    AssetTurnover,
}

impl RatioMetric {
    pub const ALL: [RatioMetric; 5] = [
        RatioMetric::Roe,
        RatioMetric::Roa,
        RatioMetric::RevenueGrowth,
        RatioMetric::NetMargin,
        RatioMetric::AssetTurnover,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatioMetric::Roe => "ROE",
            RatioMetric::Roa => "ROA",
            RatioMetric::RevenueGrowth => "Revenue Growth",
            RatioMetric::NetMargin => "Net Margin",
            RatioMetric::AssetTurnover => "Asset Turnover",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Latest-period value, or `None` when an input series is missing or empty.
    /// Revenue growth additionally needs two periods.
    pub fn value(&self, company: &Company) -> Option<f64> {
        let ni = || company.latest(labels::NET_INCOME);
        let equity = || company.latest(labels::SHAREHOLDERS_EQUITY);
        let assets = || company.latest(labels::TOTAL_ASSETS);
        let revenue = || company.latest(labels::REVENUE);

        match self {
            RatioMetric::Roe => Some(calculate_roe(ni()?, equity()?)),
            RatioMetric::Roa => Some(calculate_roa(ni()?, assets()?)),
            RatioMetric::NetMargin => Some(calculate_net_margin(ni()?, revenue()?)),
            RatioMetric::AssetTurnover => Some(calculate_asset_turnover(revenue()?, assets()?)),
            RatioMetric::RevenueGrowth => {
                let series = company.values(labels::REVENUE);
                if series.len() < 2 {
                    None
                } else {
                    Some(shared_math::growth_rate(series))
                }
            }
        }
    }

    /// Per-period series of this ratio, aligned by index over the periods
    /// where every input is reported. Revenue growth is period-over-period
    /// growth in percent.
    pub fn history(&self, company: &Company) -> Vec<f64> {
        let pairwise = |num: &str, den: &str, f: fn(f64, f64) -> f64| -> Vec<f64> {
            company
                .values(num)
                .iter()
                .zip(company.values(den))
                .map(|(&n, &d)| f(n, d))
                .collect()
        };

        match self {
            RatioMetric::Roe => {
                pairwise(labels::NET_INCOME, labels::SHAREHOLDERS_EQUITY, calculate_roe)
            }
            RatioMetric::Roa => pairwise(labels::NET_INCOME, labels::TOTAL_ASSETS, calculate_roa),
            RatioMetric::NetMargin => {
                pairwise(labels::NET_INCOME, labels::REVENUE, calculate_net_margin)
            }
            RatioMetric::AssetTurnover => {
                pairwise(labels::REVENUE, labels::TOTAL_ASSETS, calculate_asset_turnover)
            }
            RatioMetric::RevenueGrowth => {
                shared_math::period_returns(company.values(labels::REVENUE))
                    .into_iter()
                    .map(|r| r * 100.0)
                    .collect()
            }
        }
    }
}

/// Historical series for a metric label: the reported series when present,
/// otherwise the derived ratio history for the five standard ratio labels,
/// otherwise empty.
pub fn metric_history(company: &Company, label: &str) -> Vec<f64> {
    if let Some(series) = company.financial_data.series(label) {
        return series.to_vec();
    }
    RatioMetric::from_label(label)
        .map(|metric| metric.history(company))
        .unwrap_or_default()
}

fn calculate_roe(net_income: f64, equity: f64) -> f64 {
    if equity > 0.0 {
        finite_or_zero(net_income / equity * 100.0)
    } else {
        0.0
    }
}

fn calculate_roa(net_income: f64, assets: f64) -> f64 {
    if assets > 0.0 {
        finite_or_zero(net_income / assets * 100.0)
    } else {
        0.0
    }
}

fn calculate_net_margin(net_income: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        finite_or_zero(net_income / revenue * 100.0)
    } else {
        0.0
    }
}

fn calculate_asset_turnover(revenue: f64, assets: f64) -> f64 {
    if assets > 0.0 {
        finite_or_zero(revenue / assets)
    } else {
        0.0
    }
}

fn calculate_debt_to_equity(liabilities: f64, equity: f64) -> f64 {
    if equity > 0.0 {
        finite_or_zero(liabilities / equity)
    } else {
        0.0
    }
}

pub struct PerformanceCalculator;

impl PerformanceCalculator {
    /// Latest-period ratios for one company, missing inputs read as 0.
    pub fn company(company: &Company) -> CompanyPerformance {
        let value = |metric: RatioMetric| metric.value(company).unwrap_or(0.0);
        let debt_to_equity = match (
            company.latest(labels::TOTAL_LIABILITIES),
            company.latest(labels::SHAREHOLDERS_EQUITY),
        ) {
            (Some(liabilities), Some(equity)) => calculate_debt_to_equity(liabilities, equity),
            _ => 0.0,
        };

        CompanyPerformance {
            company_id: company.id.clone(),
            roe: value(RatioMetric::Roe),
            roa: value(RatioMetric::Roa),
            net_margin: value(RatioMetric::NetMargin),
            asset_turnover: value(RatioMetric::AssetTurnover),
            revenue_growth: value(RatioMetric::RevenueGrowth),
            debt_to_equity,
        }
    }

    /// Weighted performance aggregates. `concentration_risk` and
    /// `diversification_ratio` come from the risk side and feed the
    /// risk-adjusted return.
    pub fn compute(
        companies: &[Company],
        weights: &[f64],
        concentration_risk: f64,
        diversification_ratio: f64,
    ) -> PerformanceMetrics {
        let per_company: Vec<CompanyPerformance> = companies.iter().map(Self::company).collect();

        let roes: Vec<f64> = per_company.iter().map(|p| p.roe).collect();
        let roas: Vec<f64> = per_company.iter().map(|p| p.roa).collect();
        let growths: Vec<f64> = per_company.iter().map(|p| p.revenue_growth).collect();

        let weighted_roe = weighted_sum(weights, &roes);
        let weighted_roa = weighted_sum(weights, &roas);
        let weighted_revenue_growth = weighted_sum(weights, &growths);

        // Simplified composite risk figure
        let portfolio_risk = concentration_risk + (1.0 - diversification_ratio);
        let risk_adjusted_return = if portfolio_risk > 0.0 {
            finite_or_zero(weighted_roe / portfolio_risk)
        } else {
            0.0
        };

        PerformanceMetrics {
            companies: per_company,
            weighted_roe,
            weighted_roa,
            weighted_revenue_growth,
            risk_adjusted_return,
        }
    }
}
