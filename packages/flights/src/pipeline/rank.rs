//! Deduplication and ranking.

use std::collections::HashSet;

use crate::types::record::FlightRecord;

/// Drop repeated offers and order by ascending numeric price.
///
/// The dedup key is `(airline, departure, arrival, price_display)`; the
/// first occurrence in scan order survives, so a duplicate differing only
/// in duration or stops text keeps the first-seen values. The sort is
/// stable: equal prices retain scan order, with no secondary key.
pub fn dedup_and_rank(records: Vec<FlightRecord>) -> Vec<FlightRecord> {
    let mut seen: HashSet<(String, String, String, String)> = HashSet::new();
    let mut unique: Vec<FlightRecord> = Vec::with_capacity(records.len());

    for record in records {
        let (airline, departure, arrival, price) = record.dedup_key();
        let key = (
            airline.to_string(),
            departure.to_string(),
            arrival.to_string(),
            price.to_string(),
        );
        if seen.insert(key) {
            unique.push(record);
        }
    }

    unique.sort_by_key(|record| record.price_value);
    unique
}
