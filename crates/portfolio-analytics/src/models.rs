use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRisk {
    pub company_id: String,
    /// Population std dev of raw Revenue values.
    pub volatility: f64,
    /// Population std dev of Revenue period returns, in percent.
    pub return_volatility: f64,
}

/// Pairwise Revenue correlations, rows and columns in company input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub company_ids: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.company_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.company_ids.is_empty()
    }

    /// Correlation between two companies by id.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.company_ids.iter().position(|id| id == a)?;
        let j = self.company_ids.iter().position(|id| id == b)?;
        Some(self.values[i][j])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub companies: Vec<CompanyRisk>,
    pub correlation_matrix: CorrelationMatrix,
    pub portfolio_volatility: f64,
    pub diversification_ratio: f64,
    /// Herfindahl index of the portfolio weights.
    pub concentration_risk: f64,
}

/// Latest-period ratios for one company. Percentages are on a 0-100 scale;
/// every ratio with a non-positive denominator or missing input is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPerformance {
    pub company_id: String,
    pub roe: f64,
    pub roa: f64,
    pub net_margin: f64,
    pub asset_turnover: f64,
    pub revenue_growth: f64,
    pub debt_to_equity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub companies: Vec<CompanyPerformance>,
    pub weighted_roe: f64,
    pub weighted_roa: f64,
    pub weighted_revenue_growth: f64,
    /// Weighted ROE over (concentration + (1 - diversification ratio)).
    pub risk_adjusted_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryBreakdown {
    pub industry: String,
    pub company_count: usize,
    pub weight: f64,
    pub average_roe: f64,
    pub average_revenue_growth: f64,
    /// Sum over companies that report a market cap; `None` if none do.
    pub total_market_cap: Option<f64>,
}

/// Standout companies by id. All `None` for an empty portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparativeMetrics {
    pub highest_roe: Option<String>,
    pub lowest_roe: Option<String>,
    pub highest_revenue_growth: Option<String>,
    pub lowest_volatility: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub company_count: usize,
    pub risk: RiskMetrics,
    pub performance: PerformanceMetrics,
    pub comparative: ComparativeMetrics,
    pub industry_breakdown: Vec<IndustryBreakdown>,
}

impl PortfolioMetrics {
    /// Number of distinct industry labels in the analyzed set.
    pub fn industry_count(&self) -> usize {
        self.industry_breakdown.len()
    }
}
