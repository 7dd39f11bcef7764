// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! History checks: a submission against the user's stored records.
//!
//! Persistence lives outside this crate; the drivers take a plain slice of
//! records and leave fetching to the caller. Each record holds the two texts
//! of a past comparison - the collaborator scores the submission against
//! both, the better side is kept, and the engine runs against that side for
//! the phrase summary. Scanning is embarrassingly parallel, so under the
//! `parallel` feature records fan out over rayon.

use crate::compare::compare;
use crate::score::SimilarityScorer;
use crate::types::MinMatchWords;
use crate::utils::{round2, truncate_preview};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::DEFAULT_MIN_SIMILARITY;

/// Preview lengths the history responses commit to: 200 characters for the
/// matched text, 100 for each stored original.
const MATCHED_PREVIEW_CHARS: usize = 200;
const ORIGINAL_PREVIEW_CHARS: usize = 100;

/// The file route ignores submissions whose extracted text is shorter than
/// this; scanned PDFs routinely produce a few junk characters.
const MIN_EXTRACTED_CHARS: usize = 50;

/// One stored comparison, as handed over by whatever owns persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    /// File name for upload-based records; `None` for manual text entries.
    pub label: Option<String>,
    pub text_a: String,
    pub text_b: String,
}

impl HistoryRecord {
    fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| "Text Comparison".to_string())
    }
}

/// A record the submission matched, with previews and the engine's summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryMatch {
    pub record_id: String,
    pub label: String,
    /// Collaborator similarity of the better-matching stored text.
    pub similarity: f64,
    /// Distinct matched word positions in the submission.
    pub matched_words: usize,
    /// Deduplicated matched phrases, submission casing.
    pub phrases: Vec<String>,
    pub matched_preview: String,
    pub preview_a: String,
    pub preview_b: String,
}

/// Result of scanning the history for a text submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryReport {
    pub matches_found: usize,
    /// Sorted by similarity, highest first.
    pub matches: Vec<HistoryMatch>,
    pub highest_similarity: f64,
}

/// Lighter per-record shape for the file route: previews only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHistoryMatch {
    pub record_id: String,
    pub label: String,
    pub similarity: f64,
    pub matched_words: usize,
    pub matched_preview: String,
    pub preview_a: String,
    pub preview_b: String,
}

/// Result of checking an extracted file against the history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHistoryReport {
    pub matches_found: usize,
    pub matches: Vec<FileHistoryMatch>,
    pub highest_similarity: f64,
}

/// A record that cleared the similarity threshold, with the better side.
struct ScanHit<'r> {
    record: &'r HistoryRecord,
    similarity: f64,
    matched_text: &'r str,
}

/// Score every record and keep those at or above `min_similarity`.
///
/// Ties between the two stored texts resolve to `text_b` (strict
/// greater-than picks the matched side); downstream consumers depend on the
/// tie-break being stable.
fn scan_records<'r>(
    text: &str,
    records: &'r [HistoryRecord],
    min_similarity: f64,
    scorer: &dyn SimilarityScorer,
) -> Vec<ScanHit<'r>> {
    let score_one = |record: &'r HistoryRecord| -> Option<ScanHit<'r>> {
        if record.text_a.is_empty() && record.text_b.is_empty() {
            return None;
        }
        let sim_a = if record.text_a.is_empty() {
            0.0
        } else {
            scorer.similarity(text, &record.text_a)
        };
        let sim_b = if record.text_b.is_empty() {
            0.0
        } else {
            scorer.similarity(text, &record.text_b)
        };

        let best = sim_a.max(sim_b);
        if best < min_similarity {
            return None;
        }
        let matched_text = if sim_a > sim_b { &record.text_a } else { &record.text_b };
        Some(ScanHit { record, similarity: round2(best), matched_text })
    };

    #[cfg(feature = "parallel")]
    let mut hits: Vec<ScanHit<'r>> = records.par_iter().filter_map(score_one).collect();
    #[cfg(not(feature = "parallel"))]
    let mut hits: Vec<ScanHit<'r>> = records.iter().filter_map(score_one).collect();

    hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    hits
}

fn highest(hits: &[ScanHit<'_>]) -> f64 {
    // Hits are sorted descending; the first one is the ceiling.
    hits.first().map_or(0.0, |hit| hit.similarity)
}

/// Scan the history for records similar to a text submission.
pub fn search_history(
    text: &str,
    records: &[HistoryRecord],
    min_similarity: f64,
    min_match_words: MinMatchWords,
    scorer: &dyn SimilarityScorer,
) -> HistoryReport {
    let hits = scan_records(text, records, min_similarity, scorer);
    let highest_similarity = highest(&hits);

    let matches: Vec<HistoryMatch> = hits
        .into_iter()
        .map(|hit| {
            let comparison = compare(text, hit.matched_text, min_match_words);
            HistoryMatch {
                record_id: hit.record.id.clone(),
                label: hit.record.display_label(),
                similarity: hit.similarity,
                matched_words: comparison.matched_words,
                phrases: comparison.phrases.iter().map(|p| (*p).to_string()).collect(),
                matched_preview: truncate_preview(hit.matched_text, MATCHED_PREVIEW_CHARS),
                preview_a: truncate_preview(&hit.record.text_a, ORIGINAL_PREVIEW_CHARS),
                preview_b: truncate_preview(&hit.record.text_b, ORIGINAL_PREVIEW_CHARS),
            }
        })
        .collect();

    HistoryReport {
        matches_found: matches.len(),
        matches,
        highest_similarity,
    }
}

/// Same scan as [`search_history`] with the default threshold.
pub fn search_history_default(
    text: &str,
    records: &[HistoryRecord],
    min_match_words: MinMatchWords,
    scorer: &dyn SimilarityScorer,
) -> HistoryReport {
    search_history(text, records, DEFAULT_MIN_SIMILARITY, min_match_words, scorer)
}

/// Check already-extracted file text against the history.
///
/// Extraction itself happens upstream; this driver only sees plain text.
/// Text shorter than 50 characters (after trimming) yields an empty report
/// rather than an error - image-based PDFs produce exactly that, and there
/// is nothing useful to check in it.
pub fn check_extracted_file(
    text: &str,
    records: &[HistoryRecord],
    min_similarity: f64,
    min_match_words: MinMatchWords,
    scorer: &dyn SimilarityScorer,
) -> FileHistoryReport {
    if text.trim().chars().count() < MIN_EXTRACTED_CHARS {
        return FileHistoryReport {
            matches_found: 0,
            matches: Vec::new(),
            highest_similarity: 0.0,
        };
    }

    let hits = scan_records(text, records, min_similarity, scorer);
    let highest_similarity = highest(&hits);

    let matches: Vec<FileHistoryMatch> = hits
        .into_iter()
        .map(|hit| {
            let comparison = compare(text, hit.matched_text, min_match_words);
            FileHistoryMatch {
                record_id: hit.record.id.clone(),
                label: hit.record.display_label(),
                similarity: hit.similarity,
                matched_words: comparison.matched_words,
                matched_preview: truncate_preview(hit.matched_text, MATCHED_PREVIEW_CHARS),
                preview_a: truncate_preview(&hit.record.text_a, ORIGINAL_PREVIEW_CHARS),
                preview_b: truncate_preview(&hit.record.text_b, ORIGINAL_PREVIEW_CHARS),
            }
        })
        .collect();

    FileHistoryReport {
        matches_found: matches.len(),
        matches,
        highest_similarity,
    }
}
