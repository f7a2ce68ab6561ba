use thiserror::Error;

/// Structural failures abort the component that detected them and
/// propagate to the caller; nothing is retried or masked inside the core.
/// Silently dropping a bad record would make the per-component totals
/// diverge from each other.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("no review records to analyze")]
    EmptyInput,

    #[error("record '{buyer_id}' is missing required field '{field}'")]
    MissingField {
        buyer_id: String,
        field: &'static str,
    },

    #[error("record '{buyer_id}' has a missing or invalid review timestamp")]
    InvalidTimestamp { buyer_id: String },
}
