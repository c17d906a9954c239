//! NewsDigest Text — normalization, entity heuristics, term importance,
//! sentence ranking, and extractive summarization for one document at a
//! time. Everything here is pure and synchronous.

pub mod entity;
pub mod importance;
pub mod normalize;
pub mod rank;
pub mod sentence;
pub mod stopwords;
pub mod summarize;

pub use rank::SentenceScore;
pub use stopwords::StopWords;
pub use summarize::Summarizer;
