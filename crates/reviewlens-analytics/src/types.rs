use chrono::{DateTime, Utc};
use serde::Serialize;

/// One review row handed to the pipeline by an external loader.
///
/// The loader owns parsing and schema coercion; optional fields are `None`
/// when the source row lacked a usable value. The collection is immutable
/// for the duration of a run except for `sentiment_label`, which the
/// classifier writes exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRecord {
    /// Opaque buyer identifier, used only for uniqueness counting.
    pub buyer_id: String,
    pub review_date: Option<DateTime<Utc>>,
    pub rating: Option<u8>,
    pub quantity: Option<u32>,
    pub content: Option<String>,
    /// `None` until the classifier runs.
    pub sentiment_label: Option<SentimentLabel>,
}

impl ReviewRecord {
    #[must_use]
    pub fn new(
        buyer_id: impl Into<String>,
        review_date: Option<DateTime<Utc>>,
        rating: Option<u8>,
        quantity: Option<u32>,
        content: Option<String>,
    ) -> Self {
        Self {
            buyer_id: buyer_id.into(),
            review_date,
            rating,
            quantity,
            content,
            sentiment_label: None,
        }
    }
}

/// Rule-based sentiment label attached to a record by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-label counts over one classified collection.
///
/// The three counts always sum to the size of the collection they were
/// computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub(crate) fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}
