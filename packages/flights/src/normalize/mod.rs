//! Text normalization - turn raw scraped fragments into display text.
//!
//! Two independent concerns, applied in order:
//! - [`encoding`] repairs mojibake from an upstream encoding mismatch
//! - [`spacing`] restores word/number boundaries lost in DOM extraction

pub mod encoding;
pub mod spacing;

/// Full display cleanup: encoding repair, then boundary repair.
pub fn normalize(text: &str) -> String {
    spacing::repair(&encoding::repair(text))
}
