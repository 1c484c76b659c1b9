//! Word and number boundary repair.
//!
//! DOM text extraction loses the separators between adjacent elements, so
//! times, airport names, and durations arrive glued together
//! ("8:00AMChicagoO'Hare"). Repair runs ten ordered substitutions; the
//! order matters because the comma insertion and double-space collapse
//! assume the earlier boundary insertions already ran.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digit glued to AM/PM that itself touches more text: "7:05PMDallas"
    static ref MERIDIEM_TIGHT: Regex = Regex::new(r"([0-9])(AM|PM)(\S)").unwrap();

    // Normalize the gap between a digit and AM/PM to one space
    static ref MERIDIEM_BEFORE: Regex = Regex::new(r"([0-9])\s*(AM|PM)").unwrap();

    // AM/PM glued to a following word
    static ref MERIDIEM_AFTER: Regex = Regex::new(r"(AM|PM)([A-Za-z])").unwrap();

    // Word boundaries lost between elements
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref DIGIT_UPPER: Regex = Regex::new(r"([0-9])([A-Z])").unwrap();

    // Airport codes glued to neighboring words
    static ref CODE_UPPER: Regex = Regex::new(r"([A-Z]{3})([A-Z])").unwrap();
    static ref LOWER_CODE: Regex = Regex::new(r"([a-z])([A-Z]{3})").unwrap();
}

/// Insert the separators DOM extraction lost.
pub fn repair(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = MERIDIEM_TIGHT.replace_all(text, "${1} ${2} ${3}");
    let text = MERIDIEM_BEFORE.replace_all(&text, "${1} ${2}");
    let text = MERIDIEM_AFTER.replace_all(&text, "${1} ${2}");

    let text = LOWER_UPPER.replace_all(&text, "${1} ${2}");
    let text = DIGIT_UPPER.replace_all(&text, "${1} ${2}");
    let text = CODE_UPPER.replace_all(&text, "${1} ${2}");
    let text = LOWER_CODE.replace_all(&text, "${1} ${2}");

    let text = text.replace("Airport ", "Airport, ");
    let text = text.replace("min", " min");

    // The min rule re-fires on already-spaced text; collapsing doubles
    // last is what keeps the whole sequence idempotent.
    let text = text.replace("  ", " ");
    text.trim().to_string()
}
