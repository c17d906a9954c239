//! NewsDigest Core — shared types, configuration, and collaborator traits.

pub mod config;
pub mod error;
pub mod sources;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use sources::{ArticleSource, LanguageDetector, ScoredLabel, TopicClassifier, TrendingSource};
pub use types::{Article, ArticleBatch};
