use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A named group of keywords counted together in the frequency report.
///
/// Keyword order is significant: the insight stage breaks count ties by
/// configured order, so reordering a list changes top-keyword rankings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Static keyword configuration consumed by the analytics pipeline.
///
/// The neutral list takes no part in scoring today; it is carried so the
/// classifier's configuration stays complete and auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
    #[serde(default)]
    pub neutral_keywords: Vec<String>,
    pub categories: Vec<KeywordCategory>,
}

impl Default for LexiconConfig {
    /// The curated lexicon for the baby-food review corpus.
    fn default() -> Self {
        let list = |words: &[&str]| words.iter().map(ToString::to_string).collect();
        Self {
            positive_keywords: list(&[
                "맛있", "좋", "만족", "감사", "잘먹", "훌륭", "대만족", "최고",
            ]),
            negative_keywords: list(&["안먹", "별로", "아쉬", "실망", "부족", "불안"]),
            neutral_keywords: list(&["처음", "시도", "지켜"]),
            categories: vec![
                KeywordCategory {
                    name: "food".to_string(),
                    keywords: list(&["반찬", "국", "죽", "밥", "떡볶이", "크림", "짜장", "고기"]),
                },
                KeywordCategory {
                    name: "age".to_string(),
                    keywords: list(&["개월", "살", "아기", "아이"]),
                },
                KeywordCategory {
                    name: "taste".to_string(),
                    keywords: list(&["맛있", "짜", "달", "부드러", "간"]),
                },
                KeywordCategory {
                    name: "behavior".to_string(),
                    keywords: list(&["잘먹", "안먹", "거부", "편식"]),
                },
            ],
        }
    }
}

/// Load and validate the keyword lexicon from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_lexicon(path: &Path) -> Result<LexiconConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: LexiconConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::LexiconFileParse)?;

    validate_lexicon(&config)?;

    Ok(config)
}

fn validate_lexicon(config: &LexiconConfig) -> Result<(), ConfigError> {
    if config.positive_keywords.is_empty() {
        return Err(ConfigError::Validation(
            "positive_keywords must not be empty".to_string(),
        ));
    }
    if config.negative_keywords.is_empty() {
        return Err(ConfigError::Validation(
            "negative_keywords must not be empty".to_string(),
        ));
    }

    let sentiment_lists = [
        ("positive_keywords", &config.positive_keywords),
        ("negative_keywords", &config.negative_keywords),
        ("neutral_keywords", &config.neutral_keywords),
    ];
    for (list_name, keywords) in sentiment_lists {
        validate_keywords(list_name, keywords)?;
    }

    let mut seen_names = HashSet::new();
    for category in &config.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }
        if !seen_names.insert(category.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }
        validate_keywords(&category.name, &category.keywords)?;
    }

    Ok(())
}

/// An empty keyword would match every text as a substring, so it is
/// rejected outright rather than matched everywhere.
fn validate_keywords(list_name: &str, keywords: &[String]) -> Result<(), ConfigError> {
    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "'{list_name}' contains an empty keyword"
            )));
        }
    }
    Ok(())
}
