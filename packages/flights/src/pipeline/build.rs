//! Record builder - one structured record per accepted listing.

use tracing::debug;

use crate::fields::{FieldPolicy, NO_AIRLINE};
use crate::normalize::normalize;
use crate::types::{listing::RawListing, record::FlightRecord};

/// Build a [`FlightRecord`] from one raw listing, or reject it.
///
/// A listing is dropped when price parsing yields no numeric value, or
/// when the airline slot holds nothing usable. The airline check runs on
/// the normalized name so the "never empty, never purely numeric"
/// invariant holds even when the raw text only becomes digits (or
/// nothing) after mojibake repair.
pub fn build_record<P: FieldPolicy + ?Sized>(
    listing: &RawListing,
    policy: &P,
) -> Option<FlightRecord> {
    let (price_display, price_value) = policy.price(&listing.price_text);
    let Some(price_value) = price_value else {
        debug!("listing rejected: no numeric price");
        return None;
    };

    let airline = normalize(&policy.airline(&listing.airline_text));
    if airline.is_empty() || airline == NO_AIRLINE || is_purely_numeric(&airline) {
        debug!(airline = %airline, "listing rejected: no usable airline");
        return None;
    }

    Some(FlightRecord {
        airline,
        price_display,
        price_value,
        duration: normalize(&policy.duration(&listing.duration_text)),
        stops: normalize(&policy.stops(&listing.stops_text)),
        departure: normalize(&listing.departure_time_text),
        arrival: normalize(&listing.arrival_time_text),
    })
}

/// Heuristic guard against upstream selector misses: time or price text
/// that landed in the airline slot shows up as an all-digit "name".
fn is_purely_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::GoogleFlightsFields;

    fn listing() -> RawListing {
        RawListing::new()
            .with_departure("8:00AM")
            .with_arrival("10:10 AM")
            .with_airline("8:00 AM\nround trip\nDelta")
            .with_duration("2 hr 10 min DFW–ORD")
            .with_stops("Nonstop\nmore detail")
            .with_price("Round trip$341 total")
    }

    #[test]
    fn test_accepted_listing_is_normalized() {
        let record = build_record(&listing(), &GoogleFlightsFields).unwrap();

        assert_eq!(record.airline, "Delta");
        assert_eq!(record.price_display, "$341");
        assert_eq!(record.price_value, 341);
        assert_eq!(record.duration, "2 hr 10 min");
        assert_eq!(record.stops, "Nonstop");
        assert_eq!(record.departure, "8:00 AM");
        assert_eq!(record.arrival, "10:10 AM");
    }

    #[test]
    fn test_rejects_missing_price() {
        let listing = listing().with_price("call for fare");
        assert!(build_record(&listing, &GoogleFlightsFields).is_none());
    }

    #[test]
    fn test_rejects_missing_airline() {
        let listing = listing().with_airline("");
        assert!(build_record(&listing, &GoogleFlightsFields).is_none());

        let listing = self::listing().with_airline("round trip\n  ");
        assert!(build_record(&listing, &GoogleFlightsFields).is_none());
    }

    #[test]
    fn test_rejects_numeric_airline() {
        // A time or price read into the airline slot by a selector miss.
        let listing = listing().with_airline("1045");
        assert!(build_record(&listing, &GoogleFlightsFields).is_none());
    }

    #[test]
    fn test_empty_listing_rejected_not_fatal() {
        assert!(build_record(&RawListing::new(), &GoogleFlightsFields).is_none());
    }
}
