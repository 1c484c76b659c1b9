//! Summarizer trait - the boundary to the hosted model.
//!
//! Summarization is entirely the host's concern; the pipeline only
//! prepares the prompt (see [`crate::pipeline::prompts`]) and hands over
//! the rendered table. No model client ships with this library.

use async_trait::async_trait;

use crate::error::Result;

/// A text summarization service.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a summary for a fully formatted prompt.
    async fn summarize(&self, prompt: &str) -> Result<String>;

    /// Service name for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
