//! Typed errors for the flight pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Rejected listings are never errors: a listing without a price or a
//! usable airline is a filter outcome, and an empty batch is a valid
//! terminal state. Errors exist only at the I/O and collaborator seams.

use thiserror::Error;

/// Errors that can occur around the pipeline (never inside it).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Listing source failed to produce a batch
    #[error("listing source failed: {0}")]
    Source(#[from] SourceError),

    /// Summarizer service unavailable or failed
    #[error("summarizer error: {0}")]
    Summarizer(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Table rendering failed (callers degrade to an empty table)
    #[error("table rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Artifact write failed
    #[error("failed to write artifact {path}: {source}")]
    Artifact {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the external listing source boundary.
///
/// The browser-driven scraper is a host-controlled collaborator; these
/// variants describe the ways its batches can fail to arrive. "No results"
/// is not among them; an empty batch is returned as `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source could not be reached or refused to start
    #[error("listing source unavailable: {0}")]
    Unavailable(String),

    /// Source gave no batch within its time limit
    #[error("timed out waiting for listings after {seconds}s")]
    Timeout { seconds: u64 },

    /// Collection was cancelled by the host
    #[error("listing collection cancelled")]
    Cancelled,
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for listing source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
