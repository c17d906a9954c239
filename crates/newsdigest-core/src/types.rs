//! Article types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A scraped news article.
///
/// Produced by an [`ArticleSource`](crate::sources::ArticleSource) with only
/// `url`, `title`, and `content` set. The runtime attaches `category` and
/// `summary` after filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub content: String,
    /// Classifier label, or the fallback category when classification fails.
    pub category: Option<String>,
    /// Extractive summary, one sentence per line.
    pub summary: Option<String>,
}

impl Article {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
            category: None,
            summary: None,
        }
    }
}

/// Articles in discovery order. Order is meaningful: the deduplicator keeps
/// the first-seen member of each near-duplicate cluster.
pub type ArticleBatch = Vec<Article>;
