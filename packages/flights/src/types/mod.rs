//! Data types for the flight pipeline.

pub mod config;
pub mod listing;
pub mod query;
pub mod record;

pub use config::PipelineConfig;
pub use listing::RawListing;
pub use query::SearchQuery;
pub use record::FlightRecord;
