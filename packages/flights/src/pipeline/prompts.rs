//! Prompt for the downstream summarizer.
//!
//! The pipeline never calls a model itself; it only prepares the text a
//! host hands to its [`Summarizer`](crate::traits::summarizer::Summarizer).

/// Prompt asking for a cheapest-flights quote plus light commentary.
///
/// `{quote_rows}` is the caller's presentation cap (conventionally 3) and
/// is independent of the row cap on the persisted table.
pub const SUMMARIZE_PROMPT: &str = r#"You are a precise and funny AI travel assistant. Analyze the following flight listings and output two sections.

1. TOP CHEAPEST FLIGHTS — show ONLY a neat table with exactly these columns:
Airline | Price | Duration | Stops | Departure | Arrival
Include only the {quote_rows} cheapest flights (even if prices repeat).

2. THOUGHTS SECTION — below the table, add a heading in bold 'Thoughts:'
For each line under Thoughts, start it with a bullet point.
Then give one short, witty line per flight — light humor, friendly tone, no negativity.
Add a blank line before this section so it visually separates from the table.
Keep it conversational like a fun travel buddy.

{table}"#;

/// Default number of cheapest flights the summarizer is asked to quote.
pub const DEFAULT_QUOTE_ROWS: usize = 3;

/// Format the summarize prompt around a rendered table.
pub fn format_summarize_prompt(table: &str, quote_rows: usize) -> String {
    SUMMARIZE_PROMPT
        .replace("{quote_rows}", &quote_rows.to_string())
        .replace("{table}", table)
}
