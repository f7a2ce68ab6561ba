//! Shared configuration for the ReviewLens analytics pipeline.
//!
//! Holds the keyword lexicon (sentiment lists and thematic categories)
//! together with its YAML loading and validation.

pub mod lexicon;

pub use lexicon::{load_lexicon, KeywordCategory, LexiconConfig};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read lexicon file '{path}': {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("invalid lexicon config: {0}")]
    Validation(String),
}
