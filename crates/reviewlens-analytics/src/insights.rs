//! Final report synthesis: merges the four component reports and derives
//! the editorial facts the rendering stage presents.

use serde::Serialize;

use crate::keywords::{CategoryFrequencies, KeywordFrequencyReport};
use crate::stats::StatisticsReport;
use crate::temporal::TemporalReport;
use crate::types::SentimentDistribution;

/// How many keywords to keep per category in the ranked view.
pub const TOP_KEYWORDS_PER_CATEGORY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentPercentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthActivity {
    pub month: u32,
    pub review_count: usize,
}

/// The terminal artifact of one pipeline run, handed whole to rendering.
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    pub statistics: StatisticsReport,
    pub sentiment: SentimentDistribution,
    /// Absent when the sentiment distribution total is zero; never NaN.
    pub sentiment_percentages: Option<SentimentPercentages>,
    pub keyword_frequencies: KeywordFrequencyReport,
    /// Per category: top keywords by count, ties kept in configured
    /// keyword order.
    pub top_keywords: Vec<CategoryFrequencies>,
    pub temporal: TemporalReport,
    /// Strict maximum over the month distribution; on ties the smallest
    /// month number wins. Absent for an empty distribution.
    pub most_active_month: Option<MonthActivity>,
}

/// Combine the four component reports into the final insight report.
///
/// Purely combinational over already-computed reports; upstream components
/// stay reusable by keeping every derived fact here.
#[must_use]
pub fn synthesize(
    statistics: StatisticsReport,
    sentiment: SentimentDistribution,
    keyword_frequencies: KeywordFrequencyReport,
    temporal: TemporalReport,
) -> InsightReport {
    let sentiment_percentages = percentages(sentiment);
    let top_keywords = top_keywords(&keyword_frequencies);
    let most_active_month = most_active_month(&temporal);

    InsightReport {
        statistics,
        sentiment,
        sentiment_percentages,
        keyword_frequencies,
        top_keywords,
        temporal,
        most_active_month,
    }
}

/// A zero total is a legitimate degenerate case: the percentages are
/// simply omitted rather than computed as NaN.
#[allow(clippy::cast_precision_loss)]
fn percentages(distribution: SentimentDistribution) -> Option<SentimentPercentages> {
    let total = distribution.total();
    if total == 0 {
        return None;
    }
    let pct = |count: usize| count as f64 / total as f64 * 100.0;
    Some(SentimentPercentages {
        positive: pct(distribution.positive),
        negative: pct(distribution.negative),
        neutral: pct(distribution.neutral),
    })
}

fn top_keywords(report: &KeywordFrequencyReport) -> Vec<CategoryFrequencies> {
    report
        .categories
        .iter()
        .map(|category| {
            let mut keywords = category.keywords.clone();
            // Stable sort: equal counts keep configured keyword order, so
            // the ranking is reproducible from configuration alone.
            keywords.sort_by(|a, b| b.count.cmp(&a.count));
            keywords.truncate(TOP_KEYWORDS_PER_CATEGORY);
            CategoryFrequencies {
                category: category.category.clone(),
                keywords,
            }
        })
        .collect()
}

fn most_active_month(temporal: &TemporalReport) -> Option<MonthActivity> {
    let mut best: Option<MonthActivity> = None;
    // Ascending month order with a strict comparison: the smallest month
    // number wins ties.
    for (&month, &review_count) in &temporal.monthly {
        match best {
            Some(current) if review_count <= current.review_count => {}
            _ => {
                best = Some(MonthActivity {
                    month,
                    review_count,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::keywords::KeywordCount;

    use super::*;

    fn stats_report() -> StatisticsReport {
        StatisticsReport {
            total_reviews: 4,
            unique_buyers: 4,
            date_range: None,
            rating: crate::stats::RatingStats {
                mean: 4.5,
                median: 4.5,
                std_dev: Some(0.5),
                distribution: BTreeMap::from([(4, 2), (5, 2)]),
            },
            quantity: crate::stats::QuantityStats {
                mean: 1.0,
                total: 4,
                distribution: BTreeMap::from([(1, 4)]),
            },
        }
    }

    fn counts(category: &str, pairs: &[(&str, usize)]) -> CategoryFrequencies {
        CategoryFrequencies {
            category: category.to_string(),
            keywords: pairs
                .iter()
                .map(|&(keyword, count)| KeywordCount {
                    keyword: keyword.to_string(),
                    count,
                })
                .collect(),
        }
    }

    #[test]
    fn percentages_derive_from_counts() {
        let sentiment = SentimentDistribution {
            positive: 3,
            negative: 1,
            neutral: 0,
        };
        let report = synthesize(
            stats_report(),
            sentiment,
            KeywordFrequencyReport::default(),
            TemporalReport::default(),
        );
        let pct = report.sentiment_percentages.unwrap();
        assert!((pct.positive - 75.0).abs() < 1e-9);
        assert!((pct.negative - 25.0).abs() < 1e-9);
        assert!((pct.neutral - 0.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_omits_percentages() {
        let report = synthesize(
            stats_report(),
            SentimentDistribution::default(),
            KeywordFrequencyReport::default(),
            TemporalReport::default(),
        );
        assert!(
            report.sentiment_percentages.is_none(),
            "zero-total percentages must be omitted, not NaN"
        );
    }

    #[test]
    fn month_tie_resolves_to_smallest_month() {
        let temporal = TemporalReport {
            monthly: BTreeMap::from([(3, 10), (7, 10)]),
            ..TemporalReport::default()
        };
        let report = synthesize(
            stats_report(),
            SentimentDistribution::default(),
            KeywordFrequencyReport::default(),
            temporal,
        );
        assert_eq!(
            report.most_active_month,
            Some(MonthActivity {
                month: 3,
                review_count: 10
            })
        );
    }

    #[test]
    fn strict_maximum_picks_busiest_month() {
        let temporal = TemporalReport {
            monthly: BTreeMap::from([(1, 2), (5, 9), (11, 4)]),
            ..TemporalReport::default()
        };
        let report = synthesize(
            stats_report(),
            SentimentDistribution::default(),
            KeywordFrequencyReport::default(),
            temporal,
        );
        assert_eq!(report.most_active_month.unwrap().month, 5);
    }

    #[test]
    fn empty_month_distribution_yields_no_most_active_month() {
        let report = synthesize(
            stats_report(),
            SentimentDistribution::default(),
            KeywordFrequencyReport::default(),
            TemporalReport::default(),
        );
        assert!(report.most_active_month.is_none());
    }

    #[test]
    fn top_keywords_sorted_descending_and_truncated() {
        let frequencies = KeywordFrequencyReport {
            categories: vec![counts(
                "food",
                &[("a", 2), ("b", 9), ("c", 4), ("d", 1), ("e", 7), ("f", 3)],
            )],
        };
        let report = synthesize(
            stats_report(),
            SentimentDistribution::default(),
            frequencies,
            TemporalReport::default(),
        );
        let ranked: Vec<(&str, usize)> = report.top_keywords[0]
            .keywords
            .iter()
            .map(|k| (k.keyword.as_str(), k.count))
            .collect();
        assert_eq!(
            ranked,
            [("b", 9), ("e", 7), ("c", 4), ("f", 3), ("a", 2)],
            "expected top {TOP_KEYWORDS_PER_CATEGORY} by count"
        );
    }

    #[test]
    fn top_keyword_ties_keep_configured_order() {
        // "짜" and "달" tie. "짜" comes first in configuration and must
        // stay ahead, even though "달" would sort first alphabetically.
        let frequencies = KeywordFrequencyReport {
            categories: vec![counts("taste", &[("맛있", 5), ("짜", 2), ("달", 2)])],
        };
        let report = synthesize(
            stats_report(),
            SentimentDistribution::default(),
            frequencies,
            TemporalReport::default(),
        );
        let ranked: Vec<&str> = report.top_keywords[0]
            .keywords
            .iter()
            .map(|k| k.keyword.as_str())
            .collect();
        assert_eq!(ranked, ["맛있", "짜", "달"]);
    }
}
