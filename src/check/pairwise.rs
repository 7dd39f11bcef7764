//! Pairwise check: two user-submitted texts.

use crate::compare::compare;
use crate::score::{AiAnalysis, SimilarityScorer, Verdict};
use crate::types::{Comparison, MinMatchWords};
use crate::utils::round2;
use serde::Serialize;

/// The pairwise call site's report: the engine's comparison plus the
/// collaborator's score, banded into a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseReport<'a, 'b> {
    pub comparison: Comparison<'a, 'b>,
    /// Collaborator similarity percentage, rounded to two decimals.
    pub similarity: f64,
    pub verdict: Verdict,
    pub message: &'static str,
    /// AI classification, if the caller obtained one. Opaque passthrough.
    pub ai: Option<AiAnalysis>,
}

/// Compare two submissions and band the collaborator's score.
pub fn check<'a, 'b>(
    text_a: &'a str,
    text_b: &'b str,
    min_match_words: MinMatchWords,
    scorer: &dyn SimilarityScorer,
) -> PairwiseReport<'a, 'b> {
    let similarity = round2(scorer.similarity(text_a, text_b));
    let verdict = Verdict::for_score(similarity);

    PairwiseReport {
        comparison: compare(text_a, text_b, min_match_words),
        similarity,
        verdict,
        message: verdict.message(),
        ai: None,
    }
}
