//! NewsDigest Filter — batch-level gates and near-duplicate removal.
//!
//! Stages are order-preserving: articles that survive come out in the same
//! order they went in, and the first-seen member of a near-duplicate
//! cluster is the one that survives.

pub mod dedup;
pub mod pipeline;
pub mod tfidf;

pub use dedup::{dedupe, similarity_matrix};
pub use pipeline::{FilterPipeline, FilterReport};
pub use tfidf::tfidf_vectors;
