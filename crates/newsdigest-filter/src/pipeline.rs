//! Article filter pipeline execution.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use newsdigest_core::sources::LanguageDetector;
use newsdigest_core::types::{Article, ArticleBatch};
use newsdigest_core::PipelineConfig;
use newsdigest_text::normalize::similarity_text;
use newsdigest_text::StopWords;

use crate::dedup::dedupe;

/// Stage counts from one filtering run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterReport {
    pub input: usize,
    pub too_short: usize,
    pub wrong_language: usize,
    pub near_duplicates: usize,
    pub output: usize,
    pub duration_ms: u64,
}

/// Order-preserving batch filter: length gate, language gate, then
/// near-duplicate removal.
pub struct FilterPipeline<'a> {
    config: &'a PipelineConfig,
    stop_words: &'a StopWords,
    detector: &'a dyn LanguageDetector,
}

impl<'a> FilterPipeline<'a> {
    pub fn new(
        config: &'a PipelineConfig,
        stop_words: &'a StopWords,
        detector: &'a dyn LanguageDetector,
    ) -> Self {
        Self {
            config,
            stop_words,
            detector,
        }
    }

    /// Run all stages in input order and report per-stage counts.
    pub fn run(&self, articles: ArticleBatch) -> (ArticleBatch, FilterReport) {
        let start = Instant::now();
        let mut report = FilterReport {
            input: articles.len(),
            ..Default::default()
        };

        // Stage 1: drop articles with too little normalized content
        let sized = self.drop_short(articles, &mut report);

        // Stage 2: drop articles not in the configured language
        let in_language = self.drop_foreign(sized, &mut report);

        // Stage 3: drop near-duplicates of earlier articles
        let before = in_language.len();
        let unique = dedupe(
            in_language,
            self.stop_words,
            self.config.similarity_threshold,
        );
        report.near_duplicates = before - unique.len();

        report.output = unique.len();
        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Filtered batch: input={}, too_short={}, wrong_language={}, near_duplicates={}, output={}, duration={}ms",
            report.input,
            report.too_short,
            report.wrong_language,
            report.near_duplicates,
            report.output,
            report.duration_ms
        );

        (unique, report)
    }

    fn drop_short(&self, articles: ArticleBatch, report: &mut FilterReport) -> ArticleBatch {
        let min = self.config.min_content_length;
        let before = articles.len();
        let kept: ArticleBatch = articles
            .into_iter()
            .filter(|article| {
                similarity_text(&article.content, self.stop_words)
                    .chars()
                    .count()
                    >= min
            })
            .collect();
        report.too_short = before - kept.len();
        kept
    }

    fn drop_foreign(&self, articles: ArticleBatch, report: &mut FilterReport) -> ArticleBatch {
        let before = articles.len();
        let kept: ArticleBatch = articles
            .into_iter()
            .filter(|article| match self.matches_language(article) {
                Ok(matched) => matched,
                Err(e) => {
                    debug!("Language detection failed for {}: {}", article.url, e);
                    false
                }
            })
            .collect();
        report.wrong_language = before - kept.len();
        kept
    }

    /// Both title and content must detect as the configured language.
    fn matches_language(&self, article: &Article) -> newsdigest_core::Result<bool> {
        let title = self.detector.detect(&article.title)?;
        let content = self.detector.detect(&article.content)?;
        Ok(title == self.config.language && content == self.config.language)
    }
}
