//! Testing utilities including mock implementations.
//!
//! Useful for testing hosts of the pipeline without a live browser
//! session or model calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{Result, SourceError, SourceResult};
use crate::traits::{source::ListingSource, summarizer::Summarizer};
use crate::types::{listing::RawListing, query::SearchQuery};

/// A mock listing source returning predefined batches.
#[derive(Default)]
pub struct MockListingSource {
    /// Batch returned by every collect call
    listings: Arc<RwLock<Vec<RawListing>>>,

    /// Error to return instead of a batch
    failure: Arc<RwLock<Option<SourceError>>>,

    /// Queries seen, for assertions
    calls: Arc<RwLock<Vec<SearchQuery>>>,
}

impl MockListingSource {
    /// Create a source that yields an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one predefined listing.
    pub fn with_listing(self, listing: RawListing) -> Self {
        self.listings.write().unwrap().push(listing);
        self
    }

    /// Add multiple predefined listings.
    pub fn with_listings(self, listings: impl IntoIterator<Item = RawListing>) -> Self {
        self.listings.write().unwrap().extend(listings);
        self
    }

    /// Make every collect call fail.
    pub fn failing(self, error: SourceError) -> Self {
        *self.failure.write().unwrap() = Some(error);
        self
    }

    /// Queries passed to this mock so far.
    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn collect(&self, query: &SearchQuery) -> SourceResult<Vec<RawListing>> {
        self.calls.write().unwrap().push(query.clone());

        if let Some(error) = self.failure.read().unwrap().as_ref() {
            return Err(match error {
                SourceError::Unavailable(reason) => SourceError::Unavailable(reason.clone()),
                SourceError::Timeout { seconds } => SourceError::Timeout { seconds: *seconds },
                SourceError::Cancelled => SourceError::Cancelled,
            });
        }

        Ok(self.listings.read().unwrap().clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// A mock summarizer returning a canned response.
#[derive(Default)]
pub struct MockSummarizer {
    /// Canned response; a generic line when unset
    response: Arc<RwLock<Option<String>>>,

    /// Prompts seen, for assertions
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockSummarizer {
    /// Create a summarizer with a generic response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(response.into());
        self
    }

    /// Prompts passed to this mock so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        Ok(self
            .response
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "Mock summary of flight listings".to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Build a plausible raw listing without spelling out every field.
pub fn sample_listing(airline: &str, price: &str) -> RawListing {
    RawListing::new()
        .with_departure("8:00 AM")
        .with_arrival("10:10 AM")
        .with_airline(format!("8:00 AM\nround trip\n{airline}"))
        .with_duration("2 hr 10 min")
        .with_stops("Nonstop")
        .with_price(format!("Round trip{price}"))
}
