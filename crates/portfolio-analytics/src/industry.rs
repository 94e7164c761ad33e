//! Industry breakdown and standout-company comparisons.

use crate::models::{ComparativeMetrics, CompanyPerformance, CompanyRisk, IndustryBreakdown};
use crate::shared_math::{finite_or_zero, mean};
use analysis_core::Company;
use std::collections::BTreeMap;

/// Group companies by industry label. `performance` and `weights` are aligned
/// with `companies` by index. Output is sorted by industry label.
pub fn industry_breakdown(
    companies: &[Company],
    performance: &[CompanyPerformance],
    weights: &[f64],
) -> Vec<IndustryBreakdown> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, company) in companies.iter().enumerate() {
        groups.entry(company.industry.as_str()).or_default().push(i);
    }

    groups
        .into_iter()
        .map(|(industry, members)| {
            let weight: f64 = members.iter().filter_map(|&i| weights.get(i)).sum();
            let roes: Vec<f64> = members.iter().map(|&i| performance[i].roe).collect();
            let growths: Vec<f64> =
                members.iter().map(|&i| performance[i].revenue_growth).collect();

            let caps: Vec<f64> = members.iter().filter_map(|&i| companies[i].market_cap).collect();
            let total_market_cap = if caps.is_empty() {
                None
            } else {
                Some(finite_or_zero(caps.iter().sum()))
            };

            IndustryBreakdown {
                industry: industry.to_string(),
                company_count: members.len(),
                weight,
                average_roe: mean(&roes),
                average_revenue_growth: mean(&growths),
                total_market_cap,
            }
        })
        .collect()
}

/// Ids of the standout companies. Ties go to the earliest company.
pub fn comparative_metrics(
    performance: &[CompanyPerformance],
    risks: &[CompanyRisk],
) -> ComparativeMetrics {
    ComparativeMetrics {
        highest_roe: pick(performance, |p| p.roe, |p| &p.company_id, Extreme::Max),
        lowest_roe: pick(performance, |p| p.roe, |p| &p.company_id, Extreme::Min),
        highest_revenue_growth: pick(
            performance,
            |p| p.revenue_growth,
            |p| &p.company_id,
            Extreme::Max,
        ),
        lowest_volatility: pick(risks, |r| r.volatility, |r| &r.company_id, Extreme::Min),
    }
}

#[derive(Clone, Copy)]
enum Extreme {
    Max,
    Min,
}

fn pick<T>(
    items: &[T],
    value: impl Fn(&T) -> f64,
    id: impl Fn(&T) -> &String,
    extreme: Extreme,
) -> Option<String> {
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let v = value(item);
        let better = match (best, extreme) {
            (None, _) => true,
            (Some((_, b)), Extreme::Max) => v > b,
            (Some((_, b)), Extreme::Min) => v < b,
        };
        if better {
            best = Some((item, v));
        }
    }
    best.map(|(item, _)| id(item).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(id: &str, roe: f64, growth: f64) -> CompanyPerformance {
        CompanyPerformance {
            company_id: id.to_string(),
            roe,
            roa: 0.0,
            net_margin: 0.0,
            asset_turnover: 0.0,
            revenue_growth: growth,
            debt_to_equity: 0.0,
        }
    }

    fn risk(id: &str, volatility: f64) -> CompanyRisk {
        CompanyRisk {
            company_id: id.to_string(),
            volatility,
            return_volatility: 0.0,
        }
    }

    #[test]
    fn test_breakdown_groups_by_label() {
        let companies = vec![
            Company::new("a", "A", "Technology").with_market_cap(100.0),
            Company::new("b", "B", "Energy"),
            Company::new("c", "C", "Technology").with_market_cap(50.0),
        ];
        let performance = vec![perf("a", 10.0, 4.0), perf("b", 5.0, 1.0), perf("c", 20.0, 8.0)];
        let weights = vec![1.0 / 3.0; 3];

        let breakdown = industry_breakdown(&companies, &performance, &weights);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].industry, "Energy");
        assert_eq!(breakdown[0].total_market_cap, None);

        let tech = &breakdown[1];
        assert_eq!(tech.company_count, 2);
        assert!((tech.weight - 2.0 / 3.0).abs() < 1e-12);
        assert!((tech.average_roe - 15.0).abs() < 1e-12);
        assert!((tech.average_revenue_growth - 6.0).abs() < 1e-12);
        assert_eq!(tech.total_market_cap, Some(150.0));
    }

    #[test]
    fn test_comparative_ties_go_to_first() {
        let performance = vec![perf("a", 10.0, 2.0), perf("b", 10.0, 9.0), perf("c", -1.0, 9.0)];
        let risks = vec![risk("a", 3.0), risk("b", 1.0), risk("c", 1.0)];

        let comparative = comparative_metrics(&performance, &risks);
        assert_eq!(comparative.highest_roe.as_deref(), Some("a"));
        assert_eq!(comparative.lowest_roe.as_deref(), Some("c"));
        assert_eq!(comparative.highest_revenue_growth.as_deref(), Some("b"));
        assert_eq!(comparative.lowest_volatility.as_deref(), Some("b"));
    }

    #[test]
    fn test_overflowing_market_caps_sum_to_zero() {
        let companies = vec![
            Company::new("a", "A", "Technology").with_market_cap(f64::MAX),
            Company::new("b", "B", "Technology").with_market_cap(f64::MAX),
        ];
        let performance = vec![perf("a", 1.0, 1.0), perf("b", 3.0, 1.0)];
        let breakdown = industry_breakdown(&companies, &performance, &[0.5, 0.5]);
        assert_eq!(breakdown[0].total_market_cap, Some(0.0));
        assert!((breakdown[0].average_roe - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(industry_breakdown(&[], &[], &[]).is_empty());
        assert_eq!(comparative_metrics(&[], &[]), ComparativeMetrics::default());
    }
}
