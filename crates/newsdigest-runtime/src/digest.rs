//! Digest orchestration — coordinates the external collaborators.

use std::sync::Arc;

use tracing::{debug, info, warn};

use newsdigest_core::config::FALLBACK_CATEGORY;
use newsdigest_core::sources::{ArticleSource, LanguageDetector, TopicClassifier, TrendingSource};
use newsdigest_core::types::ArticleBatch;
use newsdigest_core::{PipelineConfig, Result};
use newsdigest_filter::FilterPipeline;
use newsdigest_text::{StopWords, Summarizer};

/// Top-level pipeline: trending topics in, filtered, categorized, and
/// summarized articles out.
///
/// Collaborator failures degrade per article or per topic; the only fatal
/// error is the trending-topic lookup itself, without which there is
/// nothing to process.
pub struct DigestPipeline {
    config: PipelineConfig,
    stop_words: StopWords,
    summarizer: Summarizer,
    trends: Arc<dyn TrendingSource>,
    articles: Arc<dyn ArticleSource>,
    detector: Arc<dyn LanguageDetector>,
    classifier: Arc<dyn TopicClassifier>,
}

impl DigestPipeline {
    /// New pipeline with the built-in English stop words.
    pub fn new(
        config: PipelineConfig,
        trends: Arc<dyn TrendingSource>,
        articles: Arc<dyn ArticleSource>,
        detector: Arc<dyn LanguageDetector>,
        classifier: Arc<dyn TopicClassifier>,
    ) -> Self {
        let stop_words = StopWords::english();
        let summarizer = Summarizer::with_config(stop_words.clone(), config.summary_length);
        Self {
            config,
            stop_words,
            summarizer,
            trends,
            articles,
            detector,
            classifier,
        }
    }

    /// Swap the stop-word set, rebuilding the summarizer to match. This is
    /// the only knob needed for another language.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.summarizer = Summarizer::with_config(stop_words.clone(), self.config.summary_length);
        self.stop_words = stop_words;
        self
    }

    /// One full digest run.
    pub async fn run(&self) -> Result<ArticleBatch> {
        let topics: Vec<String> = self
            .trends
            .trending_topics(&self.config.locale)
            .await?
            .into_iter()
            .take(self.config.max_topics)
            .collect();
        info!(
            "Digest run started: {} trending topics for locale '{}'",
            topics.len(),
            self.config.locale
        );

        let batch = self.fetch(&topics).await;
        Ok(self.digest(batch).await)
    }

    /// Filter, classify, and summarize an already-fetched batch.
    pub async fn digest(&self, batch: ArticleBatch) -> ArticleBatch {
        let filter = FilterPipeline::new(&self.config, &self.stop_words, self.detector.as_ref());
        let (mut batch, _report) = filter.run(batch);

        for article in &mut batch {
            article.category = Some(self.classify(&article.content).await);
            article.summary = Some(self.summarizer.summarize(&article.content));
        }
        info!("Digest complete: {} articles enriched", batch.len());
        batch
    }

    /// Fetch up to the configured number of articles per topic. A failed
    /// topic is logged and skipped.
    async fn fetch(&self, topics: &[String]) -> ArticleBatch {
        let mut batch = ArticleBatch::new();
        for topic in topics {
            match self
                .articles
                .fetch_articles(topic, self.config.max_articles_per_topic)
                .await
            {
                Ok(articles) => {
                    debug!("Fetched {} articles for topic '{}'", articles.len(), topic);
                    batch.extend(articles);
                }
                Err(e) => warn!("Skipping topic '{}': {}", topic, e),
            }
        }
        batch
    }

    /// Top classifier label, or the fallback category when the call fails
    /// or returns nothing.
    async fn classify(&self, text: &str) -> String {
        match self.classifier.classify(text, &self.config.categories).await {
            Ok(labels) => labels
                .into_iter()
                .next()
                .map(|scored| scored.label)
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            Err(e) => {
                warn!("Classification failed, using fallback: {}", e);
                FALLBACK_CATEGORY.to_string()
            }
        }
    }
}
