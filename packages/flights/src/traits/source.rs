//! Listing source trait - the boundary to the external scraper.
//!
//! The browser automation producing raw listings (DOM traversal, waits,
//! selectors) is a host-controlled external system. Here it is modeled
//! purely as a data source yielding [`RawListing`] batches; the pipeline
//! knows nothing about markup, selectors, or timing.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::types::{listing::RawListing, query::SearchQuery};

/// A source of raw listing batches.
///
/// One collection call maps to one pipeline invocation; implementations
/// must not interleave two sessions' listings into a single batch.
///
/// An empty batch is a valid result (`Ok(vec![])`), distinct from the
/// source failing, so callers can tell "no flights found" apart from
/// "scraper broke".
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Collect one batch of raw listings for a query.
    async fn collect(&self, query: &SearchQuery) -> SourceResult<Vec<RawListing>>;

    /// Source name for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
