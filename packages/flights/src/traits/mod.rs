//! Boundary trait abstractions.
//!
//! The pipeline's collaborators (the browser-driven scraper, the hosted
//! summarization model, and the artifact sink) live behind these traits.
//! The library ships no real scraper or model client; hosts plug in their
//! own, and [`crate::testing`] provides mocks.

pub mod source;
pub mod store;
pub mod summarizer;

pub use source::ListingSource;
pub use store::ArtifactStore;
pub use summarizer::Summarizer;
