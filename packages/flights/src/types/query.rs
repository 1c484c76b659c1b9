//! Search query type - what the listing source is asked to collect.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An origin/destination/month triple for one collection run.
///
/// The month is kept as the user typed it; [`month_param`](Self::month_param)
/// normalizes it for sources that need a `YYYY-MM` value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Departure city or airport (e.g. "Dallas")
    pub origin: String,

    /// Destination city or airport (e.g. "Paris")
    pub destination: String,

    /// Travel month as entered (e.g. "Jan 2026" or "January 2026")
    pub month: String,
}

impl SearchQuery {
    /// Create a new query.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        month: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            month: month.into(),
        }
    }

    /// Normalize the travel month to `YYYY-MM`.
    ///
    /// Accepts abbreviated ("Jan 2026") and full ("January 2026") month
    /// names. Unparseable input falls back to the current month rather
    /// than failing the run.
    pub fn month_param(&self) -> String {
        let text = self.month.trim();
        let padded = format!("1 {text}");
        let parsed = NaiveDate::parse_from_str(&padded, "%d %b %Y")
            .or_else(|_| NaiveDate::parse_from_str(&padded, "%d %B %Y"));

        match parsed {
            Ok(date) => date.format("%Y-%m").to_string(),
            Err(_) => {
                warn!("invalid travel month {text:?}, using current month");
                Utc::now().format("%Y-%m").to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_param_abbreviated() {
        let query = SearchQuery::new("Dallas", "Paris", "Jan 2026");
        assert_eq!(query.month_param(), "2026-01");
    }

    #[test]
    fn test_month_param_full_name() {
        let query = SearchQuery::new("Dallas", "Paris", "December 2025");
        assert_eq!(query.month_param(), "2025-12");
    }

    #[test]
    fn test_month_param_falls_back_to_current_month() {
        let query = SearchQuery::new("Dallas", "Paris", "sometime soon");
        let param = query.month_param();
        assert_eq!(param, Utc::now().format("%Y-%m").to_string());
    }
}
