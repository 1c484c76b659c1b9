//! Mojibake repair.
//!
//! Scraped text often arrives as UTF-8 bytes that were mis-read as a
//! single-byte Western encoding somewhere upstream. Repair re-encodes the
//! string as latin-1 (dropping what doesn't fit), re-decodes it as UTF-8
//! (dropping invalid sequences), then applies a fixed ordered table of
//! literal substitutions for the artifacts that survive the round trip.
//! Best effort and non-reversible: clean input passes through, garbage
//! bytes are dropped, nothing ever errors.

/// Ordered literal substitutions for residual corrupted glyphs.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("â€¯", " "),      // narrow no-break space artifact
    ("â€“", "-"),      // en dash artifact
    ("â€”", "-"),      // em dash artifact
    ("Â", ""),         // stray latin-1 lead byte
    ("Ã", ""),         // stray latin-1 lead byte
    ("\u{202f}", " "), // narrow no-break space
    ("\u{a0}", " "),   // no-break space
    ("†", ""),
    ("¤", ""),
    ("‰", ""),
    ("œ", "oe"),
    ("”", ""),
    ("“", ""),
    ("‘", ""),
    ("’", ""),
    ("\u{fffd}", ""), // replacement-character glyph present in the input itself
];

/// Repair mis-decoded text, dropping anything unrepresentable.
pub fn repair(text: &str) -> String {
    // Latin-1 round trip: keep the low byte of every char that has one,
    // then re-read the byte stream as UTF-8, skipping invalid sequences.
    let bytes: Vec<u8> = text
        .chars()
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .collect();

    let mut repaired: String = String::from_utf8_lossy(&bytes)
        .chars()
        .filter(|c| *c != '\u{fffd}')
        .collect();

    for (artifact, fixed) in REPLACEMENTS {
        if repaired.contains(artifact) {
            repaired = repaired.replace(artifact, fixed);
        }
    }

    repaired.trim().to_string()
}
