//! Raw listing type - the unprocessed input unit.

use serde::{Deserialize, Serialize};

/// An opaque bundle of raw text snippets for one scraped flight entry.
///
/// Every field is free-form text straight out of the page: possibly empty,
/// possibly concatenated without separators, possibly mojibake. The bundle
/// is produced once by the external scraping collaborator and consumed
/// exactly once by the record builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListing {
    /// Displayed departure time text
    #[serde(default)]
    pub departure_time_text: String,

    /// Displayed arrival time text
    #[serde(default)]
    pub arrival_time_text: String,

    /// Airline block text (often several lines; the name tends to come last)
    #[serde(default)]
    pub airline_text: String,

    /// Trip duration text
    #[serde(default)]
    pub duration_text: String,

    /// Stop count text
    #[serde(default)]
    pub stops_text: String,

    /// Price block text
    #[serde(default)]
    pub price_text: String,
}

impl RawListing {
    /// Create an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the departure time text.
    pub fn with_departure(mut self, text: impl Into<String>) -> Self {
        self.departure_time_text = text.into();
        self
    }

    /// Set the arrival time text.
    pub fn with_arrival(mut self, text: impl Into<String>) -> Self {
        self.arrival_time_text = text.into();
        self
    }

    /// Set the airline block text.
    pub fn with_airline(mut self, text: impl Into<String>) -> Self {
        self.airline_text = text.into();
        self
    }

    /// Set the duration text.
    pub fn with_duration(mut self, text: impl Into<String>) -> Self {
        self.duration_text = text.into();
        self
    }

    /// Set the stops text.
    pub fn with_stops(mut self, text: impl Into<String>) -> Self {
        self.stops_text = text.into();
        self
    }

    /// Set the price block text.
    pub fn with_price(mut self, text: impl Into<String>) -> Self {
        self.price_text = text.into();
        self
    }

    /// Check whether any field carries non-blank text.
    pub fn has_content(&self) -> bool {
        [
            &self.departure_time_text,
            &self.arrival_time_text,
            &self.airline_text,
            &self.duration_text,
            &self.stops_text,
            &self.price_text,
        ]
        .iter()
        .any(|f| !f.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_builder() {
        let listing = RawListing::new()
            .with_airline("Delta")
            .with_price("$341")
            .with_departure("8:00 AM");

        assert_eq!(listing.airline_text, "Delta");
        assert_eq!(listing.price_text, "$341");
        assert_eq!(listing.departure_time_text, "8:00 AM");
        assert!(listing.has_content());
    }

    #[test]
    fn test_blank_listing_has_no_content() {
        assert!(!RawListing::new().has_content());
        assert!(!RawListing::new().with_airline("   ").has_content());
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let listing: RawListing = serde_json::from_str(r#"{"price_text": "$99"}"#).unwrap();
        assert_eq!(listing.price_text, "$99");
        assert!(listing.airline_text.is_empty());
    }
}
