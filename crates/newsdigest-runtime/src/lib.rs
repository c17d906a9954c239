//! NewsDigest Runtime — drives the external collaborators through one
//! digest run: trending topics, article fetch, filtering, classification,
//! summarization.

pub mod digest;

pub use digest::DigestPipeline;
