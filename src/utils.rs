//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Maximum length, in characters, of a web-search query built from a
/// submission. Search collaborators truncate long queries anyway; sending
/// the first hundred characters of the cleaned text matches what they can
/// actually use.
pub const QUERY_MAX_CHARS: usize = 100;

/// Normalize a string for query building: lowercase, strip diacritics, and
/// collapse whitespace.
///
/// This is for talking to search collaborators, NOT for match equality -
/// the engine's token comparison folds case only, so "café" and "cafe" are
/// different tokens even though they normalize identically here.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Build the query string a caller hands to its web-search collaborator:
/// the normalized submission truncated to [`QUERY_MAX_CHARS`] characters on
/// a character boundary.
pub fn search_query(text: &str) -> String {
    let cleaned = normalize(text);
    match cleaned.char_indices().nth(QUERY_MAX_CHARS) {
        Some((idx, _)) => cleaned[..idx].to_string(),
        None => cleaned,
    }
}

/// Round a collaborator percentage to two decimals for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncate a preview to `max_chars` characters, appending an ellipsis when
/// anything was cut. Used for history-match previews.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
