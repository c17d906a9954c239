//! Pipeline configuration and its documented defaults.

use serde::{Deserialize, Serialize};

/// Sentences kept in a summary unless the caller asks for another length.
pub const DEFAULT_SUMMARY_LENGTH: usize = 3;

/// Cosine similarity above which two articles count as near-duplicates.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.2;

/// Minimum character count of normalized content; shorter articles are dropped.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 50;

/// Trending topics processed per run.
pub const DEFAULT_MAX_TOPICS: usize = 5;

/// Articles fetched per topic.
pub const DEFAULT_MAX_ARTICLES_PER_TOPIC: usize = 10;

/// Region passed to the trending-topic source.
pub const DEFAULT_LOCALE: &str = "india";

/// ISO 639-1 code articles must match to survive the language filter.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Category attached when classification fails or returns no labels.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Candidate labels handed to the topic classifier.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "politics",
    "technology",
    "sports",
    "entertainment",
    "science",
    "health",
    "business",
    "world news",
];

/// Run-level configuration, built once and shared by every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Sentences per summary.
    pub summary_length: usize,
    /// Near-duplicate cosine threshold, exclusive.
    pub similarity_threshold: f64,
    /// Minimum normalized content length in characters.
    pub min_content_length: usize,
    /// Trending topics taken per run.
    pub max_topics: usize,
    /// Articles fetched per topic.
    pub max_articles_per_topic: usize,
    /// Region for the trending-topic source.
    pub locale: String,
    /// Language articles must match, as an ISO 639-1 code.
    pub language: String,
    /// Candidate labels for classification.
    pub categories: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summary_length: DEFAULT_SUMMARY_LENGTH,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            max_topics: DEFAULT_MAX_TOPICS,
            max_articles_per_topic: DEFAULT_MAX_ARTICLES_PER_TOPIC,
            locale: DEFAULT_LOCALE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
