//! Flight record type - the cleaned, structured output unit.

use serde::{Deserialize, Serialize};

/// A cleaned, structured flight offer.
///
/// Built from at most one [`RawListing`](super::listing::RawListing); a
/// listing that fails the acceptance filter produces no record. Within a
/// ranked collection every record has a numeric price, a non-empty,
/// non-numeric airline, and a unique dedup key.
///
/// The serialized form uses the public field names consumers expect:
/// `price` for the display price and `price_number` for the numeric one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Airline name (never empty, never purely numeric)
    pub airline: String,

    /// Display price, currency symbol plus digits/grouping (e.g. `$341`)
    #[serde(rename = "price")]
    pub price_display: String,

    /// Parsed numeric price; records without one are rejected upstream
    #[serde(rename = "price_number")]
    pub price_value: u32,

    /// Cleaned trip duration text
    pub duration: String,

    /// Cleaned stop count text
    pub stops: String,

    /// Cleaned departure time text
    pub departure: String,

    /// Cleaned arrival time text
    pub arrival: String,
}

impl FlightRecord {
    /// Composite key identifying one offer.
    ///
    /// Two records with equal keys are the same listing seen twice; only
    /// the first occurrence in scan order survives deduplication.
    pub fn dedup_key(&self) -> (&str, &str, &str, &str) {
        (
            &self.airline,
            &self.departure,
            &self.arrival,
            &self.price_display,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FlightRecord {
        FlightRecord {
            airline: "Delta".to_string(),
            price_display: "$341".to_string(),
            price_value: 341,
            duration: "2h 10 min".to_string(),
            stops: "Nonstop".to_string(),
            departure: "8:00 AM".to_string(),
            arrival: "10:10 AM".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_public_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["price"], "$341");
        assert_eq!(json["price_number"], 341);
        assert!(json.get("price_display").is_none());
        assert!(json.get("price_value").is_none());
    }

    #[test]
    fn test_dedup_key_ignores_duration_and_stops() {
        let a = record();
        let mut b = record();
        b.duration = "5h".to_string();
        b.stops = "1 stop".to_string();
        assert_eq!(a.dedup_key(), b.dedup_key());

        let mut c = record();
        c.departure = "9:00 AM".to_string();
        assert_ne!(a.dedup_key(), c.dedup_key());
    }
}
