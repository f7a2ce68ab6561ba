//! Batch analytics pipeline over customer review records.
//!
//! Runs descriptive statistics, lexicon sentiment classification, keyword
//! frequency extraction, and calendar aggregation over one in-memory batch
//! of review records, then merges the four reports into a single
//! [`InsightReport`] for an external rendering stage.

pub mod classifier;
pub mod error;
pub mod insights;
pub mod keywords;
pub mod pipeline;
pub mod stats;
pub mod temporal;
pub mod types;

pub use classifier::{classify_content, classify_records};
pub use error::AnalyticsError;
pub use insights::{synthesize, InsightReport};
pub use keywords::{extract_keyword_frequencies, KeywordFrequencyReport};
pub use pipeline::run_review_analysis;
pub use stats::{compute_statistics, StatisticsReport};
pub use temporal::{aggregate_temporal, TemporalReport};
pub use types::{ReviewRecord, SentimentDistribution, SentimentLabel};
