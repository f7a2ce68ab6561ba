//! Pipeline orchestration.

use reviewlens_core::LexiconConfig;

use crate::classifier::classify_records;
use crate::error::AnalyticsError;
use crate::insights::{synthesize, InsightReport};
use crate::keywords::extract_keyword_frequencies;
use crate::stats::compute_statistics;
use crate::temporal::aggregate_temporal;
use crate::types::ReviewRecord;

/// Run the full analysis over one batch of review records.
///
/// 1. Compute descriptive statistics.
/// 2. Classify sentiment, writing each record's label in place.
/// 3. Extract keyword frequencies per configured category.
/// 4. Aggregate calendar activity.
/// 5. Synthesize the final insight report.
///
/// Single-threaded and batch: every stage runs to completion over the
/// whole collection before the report is returned; there are no partial
/// results. The label write in step 2 is the only record mutation and is
/// a committed result the caller may read back.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptyInput`] for a zero-record batch,
/// [`AnalyticsError::MissingField`] when a record lacks `rating` or
/// `quantity`, and [`AnalyticsError::InvalidTimestamp`] when a record
/// lacks a usable `review_date`. Failures propagate unmodified; the core
/// never retries or cleans input on the caller's behalf.
pub fn run_review_analysis(
    records: &mut [ReviewRecord],
    lexicon: &LexiconConfig,
) -> Result<InsightReport, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    tracing::info!(total = records.len(), "starting review analysis");

    let statistics = compute_statistics(records)?;
    tracing::debug!(
        unique_buyers = statistics.unique_buyers,
        "computed descriptive statistics"
    );

    let sentiment = classify_records(records, lexicon);
    tracing::debug!(
        positive = sentiment.positive,
        negative = sentiment.negative,
        neutral = sentiment.neutral,
        "classified sentiment"
    );

    let keyword_frequencies = extract_keyword_frequencies(records, &lexicon.categories);
    tracing::debug!(
        categories = keyword_frequencies.categories.len(),
        "extracted keyword frequencies"
    );

    let temporal = aggregate_temporal(records)?;
    tracing::debug!(months = temporal.monthly.len(), "aggregated calendar activity");

    let report = synthesize(statistics, sentiment, keyword_frequencies, temporal);
    tracing::info!("review analysis complete");

    Ok(report)
}
