// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The comparison orchestrator: the one driver every feature goes through.
//!
//! Pairwise checks, history scans, and web-snippet checks all used to carry
//! their own copy of the tokenize/match/highlight loop with cosmetic
//! differences. This module is the single shared path: tokenize both inputs,
//! run the finder, render both sides, and resolve the matched phrases for
//! the callers that want a textual summary instead of a rendering.

use crate::highlight;
use crate::matcher::find_matches;
use crate::tokenize::tokenize;
use crate::types::{Comparison, MatchRun, MinMatchWords, Token};
use std::collections::HashSet;

/// Compare two documents and produce renderings plus a match summary.
///
/// Degenerate inputs (empty, all whitespace, fewer words than the threshold)
/// produce an empty match set and an all-plain rendering - never an error.
/// Invalid configuration is unrepresentable: the [`MinMatchWords`] argument
/// was validated at construction.
///
/// Swapping the arguments swaps which document owns which rendering, but the
/// total number of matched positions found is the same either way - the
/// finder's grid is symmetric.
pub fn compare<'a, 'b>(
    text_a: &'a str,
    text_b: &'b str,
    min_match_words: MinMatchWords,
) -> Comparison<'a, 'b> {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);
    let outcome = find_matches(&tokens_a, &tokens_b, min_match_words);

    Comparison {
        matched_words: outcome.matched_a.len(),
        phrases: collect_phrases(text_a, &tokens_a, &outcome.runs),
        segments_a: highlight::render(text_a, &outcome.matched_a),
        segments_b: highlight::render(text_b, &outcome.matched_b),
    }
}

/// Resolve each run against document A's original text and deduplicate.
///
/// The phrase is the exact source slice from the first to the last token of
/// the run, interior whitespace and casing preserved. Duplicates are
/// collapsed case-insensitively, keeping the first occurrence - so "The
/// Quick Fox" and "the quick fox" report as one phrase, in discovery order.
pub(crate) fn collect_phrases<'a>(
    text: &'a str,
    tokens: &[Token<'a>],
    runs: &[MatchRun],
) -> Vec<&'a str> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut phrases = Vec::new();

    for run in runs {
        let first = &tokens[run.start_a];
        let last = &tokens[run.end_a() - 1];
        let phrase = &text[first.offset..last.end_offset()];
        if seen.insert(phrase.to_lowercase()) {
            phrases.push(phrase);
        }
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min(words: usize) -> MinMatchWords {
        MinMatchWords::new(words).unwrap()
    }

    fn reassemble(segments: &[crate::types::HighlightSegment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn shared_prefix_end_to_end() {
        let result = compare(
            "the quick brown fox jumps",
            "the quick brown fox runs",
            min(3),
        );
        assert_eq!(result.matched_words, 4);
        // The (1, 1) grid start yields its own qualifying sub-run, so the
        // shorter phrase is reported too.
        assert_eq!(result.phrases, vec!["the quick brown fox", "quick brown fox"]);

        let matched_a: Vec<_> = result
            .segments_a
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text)
            .collect();
        assert_eq!(matched_a, vec!["the", "quick", "brown", "fox"]);
        // "jumps" and "runs" stay plain.
        assert!(result.segments_a.iter().any(|s| s.text == "jumps" && !s.matched));
        assert!(result.segments_b.iter().any(|s| s.text == "runs" && !s.matched));
    }

    #[test]
    fn no_run_reaches_the_threshold() {
        let result = compare("hello world", "goodbye world", min(3));
        assert!(result.is_clean());
        assert!(result.phrases.is_empty());
        assert!(result.segments_a.iter().all(|s| !s.matched));
        assert!(result.segments_b.iter().all(|s| !s.matched));
    }

    #[test]
    fn empty_input_renders_empty() {
        let result = compare("", "anything here", min(3));
        assert_eq!(result.matched_words, 0);
        assert!(result.segments_a.is_empty());
        assert_eq!(reassemble(&result.segments_b), "anything here");
    }

    #[test]
    fn phrases_preserve_casing_and_interior_whitespace() {
        let result = compare(
            "said The  Quick Fox again",
            "behold the quick fox",
            min(3),
        );
        assert_eq!(result.phrases, vec!["The  Quick Fox"]);
    }

    #[test]
    fn phrases_dedupe_case_insensitively_keeping_first() {
        // The same phrase appears twice in A with different casing; both
        // occurrences match B, but only the first survives.
        let result = compare(
            "One Two Three stop one two three",
            "one two three",
            min(3),
        );
        assert_eq!(result.phrases, vec!["One Two Three"]);
        // Both occurrences still highlight.
        assert_eq!(result.matched_words, 6);
    }

    #[test]
    fn overlapping_runs_yield_distinct_phrases() {
        // min 2: "a b c" produces sub-run phrases "a b c", "b c" from
        // different grid starts; dedup keeps them apart (different text).
        let result = compare("a b c", "a b c", min(2));
        assert_eq!(result.phrases, vec!["a b c", "b c"]);
    }

    #[test]
    fn renderings_round_trip_both_documents() {
        let a = " The quick\tbrown fox.\n";
        let b = "A quick\tbrown fox!";
        let result = compare(a, b, min(2));
        assert_eq!(reassemble(&result.segments_a), a);
        assert_eq!(reassemble(&result.segments_b), b);
    }
}
