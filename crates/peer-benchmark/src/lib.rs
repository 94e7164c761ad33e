//! Peer Benchmarking Module
//!
//! Compares each company against same-industry peers on the five standard
//! ratios and ranks it across the whole portfolio.

pub mod benchmark;
pub mod models;
pub mod ranker;

pub use benchmark::{descending_rank_percentile, PeerBenchmarker};
pub use models::{BenchmarkingResult, MetricComparison};
pub use ranker::OverallRanker;
