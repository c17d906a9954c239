//! Traits for the external collaborators the pipeline drives.
//!
//! The pipeline itself is pure and CPU-bound. Everything that talks to the
//! network or a model lives behind one of these traits so the runtime can be
//! exercised with in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Article;

/// Source of trending topic strings for a region.
#[async_trait]
pub trait TrendingSource: Send + Sync {
    /// Current trending topics, most popular first.
    async fn trending_topics(&self, locale: &str) -> Result<Vec<String>>;
}

/// Source of scraped articles for a topic.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Up to `max_articles` parsed articles for `topic`. Sources drop pages
    /// they fail to parse, so short or empty batches are normal.
    async fn fetch_articles(&self, topic: &str, max_articles: usize) -> Result<Vec<Article>>;
}

/// Identifies the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-1 code, e.g. `"en"`. An error means the language could not
    /// be determined; the filter treats that as an exclusion.
    fn detect(&self, text: &str) -> Result<String>;
}

/// A candidate label with classifier confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub label: String,
    pub confidence: f64,
}

/// Zero-shot topic classifier.
#[async_trait]
pub trait TopicClassifier: Send + Sync {
    /// Scores `labels` against `text`, ordered by descending confidence.
    /// The runtime reads only the first entry.
    async fn classify(&self, text: &str, labels: &[String]) -> Result<Vec<ScoredLabel>>;
}
