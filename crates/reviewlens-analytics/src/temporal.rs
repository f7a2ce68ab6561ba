//! Calendar-based activity aggregation.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike, Weekday};
use serde::Serialize;

use crate::error::AnalyticsError;
use crate::types::ReviewRecord;

/// Review activity bucketed by month (1-12), English weekday name, and
/// hour of day (0-23).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemporalReport {
    pub monthly: BTreeMap<u32, usize>,
    pub weekday: BTreeMap<String, usize>,
    pub hourly: BTreeMap<u32, usize>,
}

impl TemporalReport {
    /// Total records counted, as implied by the month distribution.
    #[must_use]
    pub fn total(&self) -> usize {
        self.monthly.values().sum()
    }
}

/// Bucket every record's timestamp into the three calendar distributions.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidTimestamp`] for a record without a
/// usable `review_date`. Bad rows are never silently dropped: dropping
/// one would make this report's totals diverge from the statistics
/// report over the same batch.
pub fn aggregate_temporal(records: &[ReviewRecord]) -> Result<TemporalReport, AnalyticsError> {
    let mut report = TemporalReport::default();

    for record in records {
        let date = record
            .review_date
            .ok_or_else(|| AnalyticsError::InvalidTimestamp {
                buyer_id: record.buyer_id.clone(),
            })?;

        *report.monthly.entry(date.month()).or_insert(0) += 1;
        *report
            .weekday
            .entry(weekday_name(date.weekday()).to_string())
            .or_insert(0) += 1;
        *report.hourly.entry(date.hour()).or_insert(0) += 1;
    }

    Ok(report)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn dated(buyer_id: &str, y: i32, m: u32, d: u32, h: u32) -> ReviewRecord {
        let date = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        ReviewRecord::new(buyer_id, Some(date), Some(5), Some(1), None)
    }

    #[test]
    fn buckets_month_weekday_and_hour() {
        // 2024-03-15 is a Friday
        let records = vec![
            dated("b-1", 2024, 3, 15, 9),
            dated("b-2", 2024, 3, 16, 9),
            dated("b-3", 2024, 7, 1, 22),
        ];
        let report = aggregate_temporal(&records).unwrap();

        assert_eq!(report.monthly, BTreeMap::from([(3, 2), (7, 1)]));
        assert_eq!(report.weekday.get("Friday"), Some(&1));
        assert_eq!(report.weekday.get("Saturday"), Some(&1));
        assert_eq!(report.weekday.get("Monday"), Some(&1));
        assert_eq!(report.hourly, BTreeMap::from([(9, 2), (22, 1)]));
    }

    #[test]
    fn totals_match_batch_size() {
        let records = vec![
            dated("b-1", 2024, 1, 1, 0),
            dated("b-2", 2024, 6, 12, 13),
            dated("b-3", 2024, 12, 31, 23),
        ];
        let report = aggregate_temporal(&records).unwrap();
        assert_eq!(report.total(), records.len());
        assert_eq!(report.weekday.values().sum::<usize>(), records.len());
        assert_eq!(report.hourly.values().sum::<usize>(), records.len());
    }

    #[test]
    fn missing_date_fails_instead_of_dropping() {
        let records = vec![
            dated("b-1", 2024, 3, 15, 9),
            ReviewRecord::new("b-2", None, Some(4), Some(1), None),
        ];
        let result = aggregate_temporal(&records);
        assert!(
            matches!(
                result,
                Err(AnalyticsError::InvalidTimestamp { ref buyer_id }) if buyer_id == "b-2"
            ),
            "expected InvalidTimestamp for b-2, got: {result:?}"
        );
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let report = aggregate_temporal(&[]).unwrap();
        assert_eq!(report.total(), 0);
        assert!(report.weekday.is_empty());
        assert!(report.hourly.is_empty());
    }
}
