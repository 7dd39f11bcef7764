//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers - including stand-in
//! scorers for the remote similarity collaborator, which production code
//! never implements locally.

#![doc(hidden)]

use crate::check::{HistoryRecord, WebHit};
use crate::score::SimilarityScorer;
use std::collections::HashSet;

/// A scorer that returns the same percentage for every pair.
pub struct ConstScorer(pub f64);

impl SimilarityScorer for ConstScorer {
    fn similarity(&self, _a: &str, _b: &str) -> f64 {
        self.0
    }
}

/// A deterministic stand-in for the remote scorer: Jaccard overlap of the
/// folded word sets, as a percentage. Good enough to rank test fixtures;
/// nothing production-grade.
pub struct WordOverlapScorer;

impl SimilarityScorer for WordOverlapScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let words_a: HashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
        let words_b: HashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();
        if words_a.is_empty() || words_b.is_empty() {
            return 0.0;
        }
        let intersection = words_a.intersection(&words_b).count();
        let union = words_a.union(&words_b).count();
        100.0 * intersection as f64 / union as f64
    }
}

/// Create a manual-entry history record holding one stored text.
pub fn make_record(id: &str, text: &str) -> HistoryRecord {
    HistoryRecord {
        id: id.to_string(),
        label: None,
        text_a: text.to_string(),
        text_b: String::new(),
    }
}

/// Create a history record for a file-upload comparison.
pub fn make_file_record(id: &str, file_name: &str, text_a: &str, text_b: &str) -> HistoryRecord {
    HistoryRecord {
        id: id.to_string(),
        label: Some(file_name.to_string()),
        text_a: text_a.to_string(),
        text_b: text_b.to_string(),
    }
}

/// Create a web hit with a derived title and URL.
pub fn make_hit(title: &str, snippet: &str) -> WebHit {
    WebHit {
        title: title.to_string(),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        snippet: snippet.to_string(),
    }
}
