pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::AnalyticsConfig;
pub use error::*;
pub use types::*;
pub use validation::validate_companies;
