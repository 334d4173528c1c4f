pub mod aggregator;
pub mod app;
pub mod chart;
pub mod cli;
pub mod error;
pub mod export;
pub mod github;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod types;

pub use aggregator::aggregate;
pub use error::{RepoStatsError, Result};
pub use models::{Aggregation, LanguageDistribution, RepositoryRecord, SummaryStatistics};
pub use parser::{parse, ParseOutcome};
