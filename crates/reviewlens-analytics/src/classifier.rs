//! Rule-based sentiment classification from the configured keyword lexicon.

use reviewlens_core::LexiconConfig;

use crate::types::{ReviewRecord, SentimentDistribution, SentimentLabel};

/// Classify one review text against the sentiment lexicon.
///
/// Each positive keyword found as a case-sensitive substring contributes
/// exactly 1 to the positive side, no matter how often it repeats within
/// the text; likewise for negative keywords. Presence, not frequency,
/// keeps the rule auditable. The neutral list is configuration-only and
/// takes no part in scoring.
///
/// Decision order: more positive hits wins Positive, more negative hits
/// wins Negative, everything else (ties, including 0/0) is Neutral.
#[must_use]
pub fn classify_content(content: &str, lexicon: &LexiconConfig) -> SentimentLabel {
    let hits = |keywords: &[String]| {
        keywords
            .iter()
            .filter(|keyword| content.contains(keyword.as_str()))
            .count()
    };

    let positive_count = hits(&lexicon.positive_keywords);
    let negative_count = hits(&lexicon.negative_keywords);

    match positive_count.cmp(&negative_count) {
        std::cmp::Ordering::Greater => SentimentLabel::Positive,
        std::cmp::Ordering::Less => SentimentLabel::Negative,
        std::cmp::Ordering::Equal => SentimentLabel::Neutral,
    }
}

/// Classify every record in the batch, writing each label in place.
///
/// This is the single authorized mutation of the record collection: each
/// record's `sentiment_label` is set from its `content` alone, so
/// reclassifying is idempotent. A record with missing or empty content
/// has zero keyword hits and lands on Neutral; that is a legitimate
/// outcome, not an error.
///
/// The returned distribution counts sum to `records.len()`.
pub fn classify_records(
    records: &mut [ReviewRecord],
    lexicon: &LexiconConfig,
) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for record in records {
        let label = classify_content(record.content.as_deref().unwrap_or(""), lexicon);
        record.sentiment_label = Some(label);
        distribution.record(label);
    }
    distribution
}
