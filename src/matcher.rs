// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match finder: every shared run of consecutive words between two
//! documents.
//!
//! # Algorithm
//!
//! For every pair of start positions `(i, j)` the finder extends greedily
//! while `a[i + k]` equals `b[j + k]` case-insensitively, and records the run
//! if it reaches the minimum length. That is O(|A|·|B|) pair starts, each
//! extending up to O(min(|A|, |B|)) - cubic in the worst case (two identical
//! documents). Simplicity and exactness win over asymptotics here; typical
//! inputs are a few hundred to a few thousand words, and callers are expected
//! to bound input size before invoking the finder rather than relying on any
//! internal cancellation (there is none - the grid runs to completion).
//!
//! # Semantics that must not change
//!
//! - Overlapping runs are all recorded. A run starting inside another run is
//!   a distinct `(i, j)` pair and produces its own entry; the index sets
//!   union them away. There is no "longest run wins" policy.
//! - Sub-runs qualify on their own: if `(i, j)` starts a run of length 5 with
//!   minimum 3, then `(i+1, j+1)` starts a qualifying run of length 4, and so
//!   on. All of them mark the same indices, so the union is unchanged, but
//!   the runs list reflects discovery order faithfully.
//! - A faster mechanism (suffix automaton, rolling hash) is fair game only if
//!   it reproduces the exact same index sets for all inputs.

use crate::types::{MatchRun, MatchedIndices, MinMatchWords, Token};

/// Everything the finder learns about one document pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Qualifying runs in discovery order (outer loop over A, inner over B).
    pub runs: Vec<MatchRun>,
    /// Ordinals of document A covered by at least one run.
    pub matched_a: MatchedIndices,
    /// Ordinals of document B covered by at least one run.
    pub matched_b: MatchedIndices,
}

/// Find all shared runs of at least `min_match_words` consecutive words.
///
/// Pure function of its inputs: no hidden state, no randomness, identical
/// inputs always produce identical outcomes. Either sequence may be empty,
/// in which case the outcome is empty too.
pub fn find_matches(
    tokens_a: &[Token<'_>],
    tokens_b: &[Token<'_>],
    min_match_words: MinMatchWords,
) -> MatchOutcome {
    let min = min_match_words.get();
    let mut outcome = MatchOutcome::default();

    for i in 0..tokens_a.len() {
        for j in 0..tokens_b.len() {
            let mut len = 0;
            while i + len < tokens_a.len()
                && j + len < tokens_b.len()
                && tokens_a[i + len].matches(&tokens_b[j + len])
            {
                len += 1;
            }

            if len >= min {
                outcome.runs.push(MatchRun { start_a: i, start_b: j, len });
                outcome.matched_a.mark_run(i, len);
                outcome.matched_b.mark_run(j, len);
            }
        }
    }

    outcome
}
