//! Shared-phrase matching and highlighting for plagiarism checks.
//!
//! Given two text documents, parex finds every run of consecutive,
//! identically-ordered words they share and produces an annotated rendering
//! of each document with the shared words flagged. One pure engine backs
//! every feature: pairwise text comparison, history scans, and web-snippet
//! checks all go through the same four contracts.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │ tokenize.rs  │────▶│  matcher.rs   │────▶│ highlight.rs  │
//! │  (tokenize)  │     │ (find_matches)│     │  (segments)   │
//! └──────────────┘     └───────────────┘     └───────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       compare.rs                        │
//! │        (the orchestrator every feature drives)          │
//! └─────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │            check/ (pairwise, history, web)              │
//! │   feature drivers + collaborator score passthrough      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is synchronous, stateless, and side-effect free; comparisons
//! can run fully in parallel across threads with no locking. Cost is driven
//! purely by input size (the match grid is cubic in the worst case), so
//! callers bound input size up front instead of expecting cancellation
//! mid-grid.
//!
//! # Usage
//!
//! ```
//! use parex::{compare, MinMatchWords};
//!
//! let result = compare(
//!     "the quick brown fox jumps",
//!     "the quick brown fox runs",
//!     MinMatchWords::default(),
//! );
//!
//! assert_eq!(result.matched_words, 4);
//! assert_eq!(result.phrases[0], "the quick brown fox");
//! ```

// Module declarations
pub mod check;
mod compare;
mod highlight;
mod matcher;
pub mod markup;
mod score;
pub mod testing;
mod tokenize;
mod types;
mod utils;

// Re-exports for public API
pub use compare::compare;
pub use highlight::{render, segments, Segments};
pub use matcher::{find_matches, MatchOutcome};
pub use score::{AiAnalysis, AiIndicator, SimilarityScorer, Verdict};
pub use tokenize::tokenize;
pub use types::{
    Comparison, ConfigError, HighlightSegment, MatchRun, MatchedIndices, MinMatchWords, Token,
};
pub use utils::{normalize, search_query, truncate_preview, QUERY_MAX_CHARS};

#[cfg(test)]
mod tests {
    //! Property tests for the engine's contracts.
    //!
    //! The five properties below are the load-bearing guarantees every
    //! caller depends on; the worked examples live in `tests/engine.rs`.

    use super::*;
    use proptest::prelude::*;

    /// Short documents over a two-letter alphabet, so shared runs are
    /// common enough for the interesting branches to fire.
    fn word_doc_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::string::string_regex("[ab]{1,2}").unwrap(), 0..12)
            .prop_map(|words| words.join(" "))
    }

    /// The union of a run list's index ranges for one side.
    fn union_of_runs(runs: &[MatchRun], side_a: bool) -> MatchedIndices {
        let mut set = MatchedIndices::new();
        for run in runs {
            let start = if side_a { run.start_a } else { run.start_b };
            set.mark_run(start, run.len);
        }
        set
    }

    proptest! {
        #[test]
        fn round_trip_reconstructs_any_text(text in any::<String>(), indices in prop::collection::hash_set(0usize..64, 0..16)) {
            let matched: MatchedIndices = indices.into_iter().collect();
            let reassembled: String = segments(&text, &matched).map(|s| s.text).collect();
            prop_assert_eq!(reassembled, text);
        }

        #[test]
        fn index_sets_are_exactly_the_union_of_qualifying_runs(
            a in word_doc_strategy(),
            b in word_doc_strategy(),
            min in 1usize..4,
        ) {
            let tokens_a = tokenize(&a);
            let tokens_b = tokenize(&b);
            let outcome = find_matches(&tokens_a, &tokens_b, MinMatchWords::new(min).unwrap());

            for run in &outcome.runs {
                prop_assert!(run.len >= min);
            }
            prop_assert_eq!(&union_of_runs(&outcome.runs, true), &outcome.matched_a);
            prop_assert_eq!(&union_of_runs(&outcome.runs, false), &outcome.matched_b);
        }

        #[test]
        fn swapping_arguments_swaps_the_sets(
            a in word_doc_strategy(),
            b in word_doc_strategy(),
            min in 1usize..4,
        ) {
            let min = MinMatchWords::new(min).unwrap();
            let tokens_a = tokenize(&a);
            let tokens_b = tokenize(&b);
            let forward = find_matches(&tokens_a, &tokens_b, min);
            let backward = find_matches(&tokens_b, &tokens_a, min);

            prop_assert_eq!(&forward.matched_a, &backward.matched_b);
            prop_assert_eq!(&forward.matched_b, &backward.matched_a);
        }

        #[test]
        fn comparing_a_text_with_itself_marks_everything(a in word_doc_strategy()) {
            let tokens = tokenize(&a);
            prop_assume!(tokens.len() >= 3);
            let outcome = find_matches(&tokens, &tokens, MinMatchWords::DEFAULT);
            prop_assert_eq!(outcome.matched_a.len(), tokens.len());
            prop_assert_eq!(outcome.matched_b.len(), tokens.len());
        }

        #[test]
        fn lowering_the_threshold_never_loses_matches(
            a in word_doc_strategy(),
            b in word_doc_strategy(),
            lower in 1usize..3,
            delta in 1usize..3,
        ) {
            let tokens_a = tokenize(&a);
            let tokens_b = tokenize(&b);
            let strict = find_matches(
                &tokens_a,
                &tokens_b,
                MinMatchWords::new(lower + delta).unwrap(),
            );
            let loose = find_matches(&tokens_a, &tokens_b, MinMatchWords::new(lower).unwrap());

            for ordinal in strict.matched_a.iter() {
                prop_assert!(loose.matched_a.contains(ordinal));
            }
            for ordinal in strict.matched_b.iter() {
                prop_assert!(loose.matched_b.contains(ordinal));
            }
            prop_assert!(loose.matched_a.len() >= strict.matched_a.len());
        }

        #[test]
        fn matched_word_count_is_symmetric(
            a in word_doc_strategy(),
            b in word_doc_strategy(),
        ) {
            // Comparing A to B, then B to A: the count of matched positions
            // in A is the same whichever argument slot A sits in.
            let forward = compare(&a, &b, MinMatchWords::DEFAULT);
            let backward = compare(&b, &a, MinMatchWords::DEFAULT);
            let backward_count_for_a = backward
                .segments_b
                .iter()
                .filter(|s| s.matched)
                .count();
            let forward_count_for_a = forward
                .segments_a
                .iter()
                .filter(|s| s.matched)
                .count();
            prop_assert_eq!(forward_count_for_a, backward_count_for_a);
            prop_assert_eq!(forward.matched_words, forward_count_for_a);
        }
    }
}
