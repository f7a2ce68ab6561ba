//! Thematic keyword frequency counts across the whole batch.

use reviewlens_core::KeywordCategory;
use serde::Serialize;

use crate::types::ReviewRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Counts for one configured category, in configured keyword order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFrequencies {
    pub category: String,
    /// Zero-count keywords are omitted.
    pub keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordFrequencyReport {
    pub categories: Vec<CategoryFrequencies>,
}

impl KeywordFrequencyReport {
    /// Look up one category's counts by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryFrequencies> {
        self.categories.iter().find(|c| c.category == name)
    }
}

/// Count total keyword occurrences across all records' content.
///
/// Unlike the sentiment classifier, this counts every (non-overlapping)
/// occurrence: a keyword appearing three times in one review contributes
/// three. The reduction sums per-record counts, so record order cannot
/// affect the totals. Every configured category appears in the report
/// even when none of its keywords occur.
#[must_use]
pub fn extract_keyword_frequencies(
    records: &[ReviewRecord],
    categories: &[KeywordCategory],
) -> KeywordFrequencyReport {
    let categories = categories
        .iter()
        .map(|category| {
            let keywords = category
                .keywords
                .iter()
                .filter_map(|keyword| {
                    let count: usize = records
                        .iter()
                        .map(|record| {
                            occurrence_count(record.content.as_deref().unwrap_or(""), keyword)
                        })
                        .sum();
                    (count > 0).then(|| KeywordCount {
                        keyword: keyword.clone(),
                        count,
                    })
                })
                .collect();
            CategoryFrequencies {
                category: category.name.clone(),
                keywords,
            }
        })
        .collect();

    KeywordFrequencyReport { categories }
}

fn occurrence_count(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    text.matches(keyword).count()
}
