//! Shared test utilities and fixtures.

#![allow(dead_code)]

use parex::HighlightSegment;

// Re-export canonical test utilities from parex::testing
pub use parex::testing::{make_file_record, make_hit, make_record, ConstScorer, WordOverlapScorer};

/// Concatenate a segment sequence back into the text it was rendered from.
pub fn reassemble(segments: &[HighlightSegment<'_>]) -> String {
    segments.iter().map(|s| s.text).collect()
}

/// The texts of the matched segments only, in order.
pub fn matched_words<'a>(segments: &[HighlightSegment<'a>]) -> Vec<&'a str> {
    segments.iter().filter(|s| s.matched).map(|s| s.text).collect()
}
