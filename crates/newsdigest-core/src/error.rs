//! Error types for the digest pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Trend source error: {0}")]
    TrendSource(String),

    #[error("Article source error: {0}")]
    ArticleSource(String),

    #[error("Language detection error: {0}")]
    LanguageDetection(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
