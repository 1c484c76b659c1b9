//! Flight-Listing Normalization and Ranking Pipeline
//!
//! Turns a batch of raw, noisy per-listing text fragments, as pulled out
//! of a travel search page by an external scraper, into a clean,
//! deduplicated, price-sorted set of structured flight records plus a
//! fixed-width text table.
//!
//! # Design Philosophy
//!
//! **Deterministic core, pluggable edges**
//!
//! - The pipeline is pure: fragments in, records and table out
//! - Garbage input is filtered, never fatal
//! - Extraction heuristics sit behind a policy trait so site layout
//!   drift stays out of dedup/rank/render
//! - The scraper and the summarization model are trait boundaries; this
//!   library ships neither
//!
//! # Usage
//!
//! ```rust
//! use flights::{Pipeline, PipelineConfig, RawListing};
//!
//! let batch = vec![
//!     RawListing::new()
//!         .with_airline("8:00 AM\nround trip\nDelta")
//!         .with_price("Round trip$341")
//!         .with_departure("8:00AMDallas")
//!         .with_arrival("2:35 PM"),
//! ];
//!
//! let output = Pipeline::new(PipelineConfig::default()).process(&batch);
//! assert_eq!(output.records[0].airline, "Delta");
//! assert_eq!(output.records[0].price_value, 341);
//! println!("{}", output.table);
//! ```
//!
//! # Modules
//!
//! - [`fields`] - Field extraction policies (price, airline, first line)
//! - [`normalize`] - Mojibake and word-boundary repair
//! - [`pipeline`] - Build, dedup/rank, render, summarizer prompt
//! - [`traits`] - Boundaries: listing source, summarizer, artifact store
//! - [`stores`] - Artifact store implementations
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod fields;
pub mod normalize;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{PipelineError, Result, SourceError, SourceResult};
pub use fields::{first_line, FieldPolicy, GoogleFlightsFields, NO_AIRLINE};
pub use normalize::normalize;
pub use pipeline::{
    build_record, dedup_and_rank, format_summarize_prompt, render_table, Pipeline, PipelineOutput,
    DEFAULT_QUOTE_ROWS, SUMMARIZE_PROMPT,
};
pub use stores::{FsArtifactStore, MemoryArtifactStore};
pub use traits::{ArtifactStore, ListingSource, Summarizer};
pub use types::{FlightRecord, PipelineConfig, RawListing, SearchQuery};
