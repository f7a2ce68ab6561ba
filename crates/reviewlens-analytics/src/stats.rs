//! Descriptive statistics over one batch of review records.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AnalyticsError;
use crate::types::ReviewRecord;

/// Earliest and latest review timestamps observed in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingStats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `None` for a single-record batch, where
    /// it is undefined rather than zero.
    pub std_dev: Option<f64>,
    /// Exact counts keyed by observed rating value. No binning.
    pub distribution: BTreeMap<u8, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityStats {
    pub mean: f64,
    pub total: u64,
    pub distribution: BTreeMap<u32, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub total_reviews: usize,
    pub unique_buyers: usize,
    /// `None` when no record in the batch carries a timestamp.
    pub date_range: Option<DateRange>,
    pub rating: RatingStats,
    pub quantity: QuantityStats,
}

/// Compute the descriptive statistics report for a batch.
///
/// Pure function of its input; records are never mutated here.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptyInput`] for a zero-record batch and
/// [`AnalyticsError::MissingField`] when any record lacks `rating` or
/// `quantity`.
pub fn compute_statistics(records: &[ReviewRecord]) -> Result<StatisticsReport, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut ratings = Vec::with_capacity(records.len());
    let mut quantities = Vec::with_capacity(records.len());
    for record in records {
        let rating = record.rating.ok_or_else(|| AnalyticsError::MissingField {
            buyer_id: record.buyer_id.clone(),
            field: "rating",
        })?;
        let quantity = record.quantity.ok_or_else(|| AnalyticsError::MissingField {
            buyer_id: record.buyer_id.clone(),
            field: "quantity",
        })?;
        ratings.push(rating);
        quantities.push(quantity);
    }

    let unique_buyers = records
        .iter()
        .map(|r| r.buyer_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let date_range = date_range(records);

    Ok(StatisticsReport {
        total_reviews: records.len(),
        unique_buyers,
        date_range,
        rating: rating_stats(&ratings),
        quantity: quantity_stats(&quantities),
    })
}

fn date_range(records: &[ReviewRecord]) -> Option<DateRange> {
    let mut present = records.iter().filter_map(|r| r.review_date);
    let first = present.next()?;
    let (start, end) = present.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange { start, end })
}

#[allow(clippy::cast_precision_loss)]
fn rating_stats(ratings: &[u8]) -> RatingStats {
    let n = ratings.len();
    let sum: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
    let mean = sum as f64 / n as f64;

    let mut sorted = ratings.to_vec();
    sorted.sort_unstable();
    let median = if n % 2 == 1 {
        f64::from(sorted[n / 2])
    } else {
        (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
    };

    // Sample formula (n - 1 denominator); undefined for n == 1.
    let std_dev = if n < 2 {
        None
    } else {
        let sum_sq: f64 = ratings
            .iter()
            .map(|&r| {
                let delta = f64::from(r) - mean;
                delta * delta
            })
            .sum();
        Some((sum_sq / (n - 1) as f64).sqrt())
    };

    let mut distribution = BTreeMap::new();
    for &rating in ratings {
        *distribution.entry(rating).or_insert(0) += 1;
    }

    RatingStats {
        mean,
        median,
        std_dev,
        distribution,
    }
}

#[allow(clippy::cast_precision_loss)]
fn quantity_stats(quantities: &[u32]) -> QuantityStats {
    let total: u64 = quantities.iter().map(|&q| u64::from(q)).sum();
    let mean = total as f64 / quantities.len() as f64;

    let mut distribution = BTreeMap::new();
    for &quantity in quantities {
        *distribution.entry(quantity).or_insert(0) += 1;
    }

    QuantityStats {
        mean,
        total,
        distribution,
    }
}
