//! portfolio-cli: Run the full analytics suite over a portfolio snapshot.
//!
//! The snapshot is a JSON array of companies (`id`, `name`, `industry`,
//! optional `marketCap`, and `financialData` mapping metric labels to
//! per-period values, earliest first).
//!
//! Usage:
//!   cargo run -p portfolio-cli -- portfolio.json
//!   cargo run -p portfolio-cli -- portfolio.json --metric Revenue --metric ROE --pretty

use analysis_core::{labels, AnalyticsConfig, Company};
use analysis_orchestrator::AnalyticsEngine;
use anyhow::Context;
use chrono::{DateTime, Utc};
use peer_benchmark::BenchmarkingResult;
use portfolio_analytics::{PortfolioMetrics, RatioMetric};
use portfolio_insights::Insight;
use serde::Serialize;
use std::path::PathBuf;
use trend_analysis::TrendAnalysis;

#[derive(Debug, Serialize)]
struct AnalyticsReport {
    generated_at: DateTime<Utc>,
    source: String,
    config: AnalyticsConfig,
    portfolio: PortfolioMetrics,
    benchmarks: Vec<BenchmarkingResult>,
    trends: Vec<TrendAnalysis>,
    insights: Vec<Insight>,
}

struct CliArgs {
    snapshot: PathBuf,
    metrics: Vec<String>,
    pretty: bool,
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let pretty = args.iter().any(|a| a == "--pretty");

    let metrics: Vec<String> = args
        .iter()
        .enumerate()
        .filter(|(_, a)| *a == "--metric")
        .filter_map(|(i, _)| args.get(i + 1).cloned())
        .collect();

    // First argument that is neither a flag nor a flag's value
    let snapshot = args
        .iter()
        .enumerate()
        .skip(1)
        .find(|(i, a)| !a.starts_with("--") && args[i - 1] != "--metric")
        .map(|(_, a)| PathBuf::from(a))?;

    Some(CliArgs {
        snapshot,
        metrics,
        pretty,
    })
}

fn default_metrics() -> Vec<String> {
    std::iter::once(labels::REVENUE)
        .chain(RatioMetric::ALL.iter().map(|m| m.label()))
        .map(str::to_string)
        .collect()
}

fn init_tracing() {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("portfolio_cli=info,analysis_orchestrator=info")
        })
    };

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    // Logs go to stderr so stdout stays a clean JSON report
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(cli) = parse_args(&args) else {
        eprintln!("Usage:");
        eprintln!("  portfolio-cli <snapshot.json> [--metric NAME]... [--pretty]");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --metric NAME   Metric to analyze for trends (repeatable)");
        eprintln!("                  Default: Revenue and the five ratios");
        eprintln!("  --pretty        Pretty-print the JSON report");
        std::process::exit(1);
    };

    let config = AnalyticsConfig::from_env().context("invalid ANALYTICS_* configuration")?;
    let engine = AnalyticsEngine::with_config(config)?;

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("failed to read {}", cli.snapshot.display()))?;
    let companies: Vec<Company> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse companies from {}", cli.snapshot.display()))?;

    let metrics = if cli.metrics.is_empty() {
        default_metrics()
    } else {
        cli.metrics
    };
    tracing::info!(
        "portfolio-cli: {} companies from {}, trend metrics: {:?}",
        companies.len(),
        cli.snapshot.display(),
        metrics
    );

    let report = AnalyticsReport {
        generated_at: Utc::now(),
        source: cli.snapshot.display().to_string(),
        config: engine.config().clone(),
        portfolio: engine.analyze_portfolio(&companies)?,
        benchmarks: engine.benchmark_companies(&companies)?,
        trends: engine.analyze_trends(&companies, &metrics)?,
        insights: engine.portfolio_insights(&companies)?,
    };

    for insight in &report.insights {
        tracing::info!("{:?}: {}", insight.severity, insight.message);
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
