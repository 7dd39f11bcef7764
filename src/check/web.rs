//! Web-snippet check: a submission against search-result snippets.
//!
//! The search itself belongs to a collaborator; whatever it returns arrives
//! here as [`WebHit`]s and each snippet is treated as just another document
//! to diff against. The submission is rendered once, against the union of
//! matched indices across every snippet, so phrases found by different
//! sources light up in a single annotated view - the engine emits segments,
//! and markup stays out of it.

use crate::compare::collect_phrases;
use crate::highlight;
use crate::matcher::find_matches;
use crate::score::SimilarityScorer;
use crate::tokenize::tokenize;
use crate::types::{HighlightSegment, MatchedIndices, MinMatchWords};
use crate::utils::round2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sources beyond this many are counted but not reported in detail.
pub const MAX_SOURCES: usize = 5;

/// One result from the caller's web-search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A hit that actually contributed: a score, matching phrases, or both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSource {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub similarity: f64,
    /// Phrases this snippet shares with the submission, submission casing.
    pub matching_phrases: Vec<String>,
}

/// The web call site's report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebReport<'a> {
    /// Highest collaborator similarity across all sources.
    pub similarity: f64,
    /// Distinct matched word positions in the submission, across all sources.
    pub matched_words: usize,
    /// The submission rendered once against the union of every source's
    /// matched indices.
    pub segments: Vec<HighlightSegment<'a>>,
    /// Contributing sources, best first, capped at [`MAX_SOURCES`].
    pub sources: Vec<WebSource>,
    /// Contributing sources before the cap.
    pub total_sources: usize,
    /// Every matched phrase across all sources, deduplicated
    /// case-insensitively in discovery order.
    pub all_phrases: Vec<String>,
}

/// Check a submission against a batch of web-search snippets.
///
/// Hits that neither score above zero nor share any qualifying phrase are
/// dropped entirely; only sources with something to show are reported.
pub fn check<'a>(
    text: &'a str,
    hits: &[WebHit],
    min_match_words: MinMatchWords,
    scorer: &dyn SimilarityScorer,
) -> WebReport<'a> {
    let tokens = tokenize(text);

    let mut union = MatchedIndices::new();
    let mut sources: Vec<WebSource> = Vec::new();
    let mut all_phrases: Vec<String> = Vec::new();
    let mut seen_phrases: HashSet<String> = HashSet::new();
    let mut max_similarity = 0.0_f64;

    for hit in hits {
        let snippet_tokens = tokenize(&hit.snippet);
        let outcome = find_matches(&tokens, &snippet_tokens, min_match_words);
        let phrases = collect_phrases(text, &tokens, &outcome.runs);
        let similarity = round2(scorer.similarity(text, &hit.snippet));

        if similarity <= 0.0 && outcome.runs.is_empty() {
            continue;
        }

        union.union_with(&outcome.matched_a);
        for phrase in &phrases {
            if seen_phrases.insert(phrase.to_lowercase()) {
                all_phrases.push((*phrase).to_string());
            }
        }
        max_similarity = max_similarity.max(similarity);

        sources.push(WebSource {
            title: hit.title.clone(),
            url: hit.url.clone(),
            snippet: hit.snippet.clone(),
            similarity,
            matching_phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
        });
    }

    sources.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    let total_sources = sources.len();
    sources.truncate(MAX_SOURCES);

    WebReport {
        similarity: max_similarity,
        matched_words: union.len(),
        segments: highlight::render(text, &union),
        sources,
        total_sources,
        all_phrases,
    }
}
