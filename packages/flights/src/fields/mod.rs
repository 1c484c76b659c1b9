//! Field extraction policies.
//!
//! Pulling an airline, a price, or a duration out of a raw text fragment
//! is pattern matching against one site's current text layout. Those
//! heuristics live behind [`FieldPolicy`] so layout drift stays isolated
//! here and never touches dedup, ranking, or rendering.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency symbol, optional space, then digits with optional grouping.
    static ref PRICE_REGEX: Regex = Regex::new(r"[$€£]\s?\d[\d,]*").unwrap();

    // Two 3-letter airport codes joined by an en dash, e.g. "DFW–CDG".
    static ref LEG_CODES_REGEX: Regex = Regex::new(r"[A-Z]{3}–[A-Z]{3}").unwrap();
}

/// Marker for a listing with no usable airline text.
pub const NO_AIRLINE: &str = "N/A";

/// Return the first non-empty trimmed line of `text`, or `""`.
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Per-field extraction heuristics for one listing layout.
pub trait FieldPolicy: Send + Sync {
    /// Extract a display price and its numeric value from raw text.
    ///
    /// Returns `("", None)` when no currency amount is present. Only the
    /// first match counts; later amounts in the same fragment (a second
    /// leg's price) are ignored.
    fn price(&self, raw: &str) -> (String, Option<u32>);

    /// Extract a clean airline name, or [`NO_AIRLINE`].
    fn airline(&self, raw: &str) -> String;

    /// Extract a single-line duration.
    fn duration(&self, raw: &str) -> String;

    /// Extract a single-line stop count.
    fn stops(&self, raw: &str) -> String;
}

/// Default policy for the Google Flights results layout.
///
/// Assumptions baked in: the airline label is the last line of its text
/// block (flight times come first in concatenated inner text), and the
/// first currency amount in the price block is the fare.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleFlightsFields;

impl FieldPolicy for GoogleFlightsFields {
    fn price(&self, raw: &str) -> (String, Option<u32>) {
        let Some(matched) = PRICE_REGEX.find(raw) else {
            return (String::new(), None);
        };

        let display = matched.as_str().replace(' ', "");
        let digits: String = display.chars().filter(char::is_ascii_digit).collect();
        let value = digits.parse::<u32>().ok();
        (display, value)
    }

    fn airline(&self, raw: &str) -> String {
        let Some(last) = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
        else {
            return NO_AIRLINE.to_string();
        };

        let name = last.replace("round trip", "");
        let name = name.trim();
        if name.is_empty() {
            NO_AIRLINE.to_string()
        } else {
            name.to_string()
        }
    }

    fn duration(&self, raw: &str) -> String {
        LEG_CODES_REGEX
            .replace_all(first_line(raw), "")
            .trim()
            .to_string()
    }

    fn stops(&self, raw: &str) -> String {
        first_line(raw).to_string()
    }
}
