// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a comparison.
//!
//! These types define how tokens, match runs, and highlight segments fit
//! together. The whole engine is pure data-in data-out, so everything here is
//! ephemeral: built for one comparison, dropped after rendering.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchRun**: `len >= min_match_words` for whatever `MinMatchWords` the
//!   finder ran with. Shorter runs are never recorded, so they can never mark
//!   an index.
//!
//! - **MatchedIndices**: membership only. Two overlapping runs marking the
//!   same ordinal are indistinguishable from one - that is what merges
//!   adjacent highlights into a single span downstream.
//!
//! - **HighlightSegment**: concatenating `text` over a document's segment
//!   sequence reproduces the source text byte-for-byte. The renderer adds
//!   flags, never characters.
//!
//! Rather than trusting callers to pass a sane minimum run length,
//! `MinMatchWords` makes the zero case unrepresentable.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Validated minimum length (in words) for a run to count as a match.
///
/// A zero minimum would mark every token of both documents matched, which is
/// never what a caller wants; construction fails fast instead of silently
/// substituting the default (see [`ConfigError`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
#[repr(transparent)]
pub struct MinMatchWords(usize);

impl MinMatchWords {
    /// The default threshold: three consecutive words.
    pub const DEFAULT: MinMatchWords = MinMatchWords(3);

    /// Create a validated threshold. Fails for zero.
    #[inline]
    pub fn new(words: usize) -> Result<Self, ConfigError> {
        if words == 0 {
            Err(ConfigError::ZeroMinMatchWords)
        } else {
            Ok(MinMatchWords(words))
        }
    }

    /// Get the underlying word count.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MinMatchWords {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for MinMatchWords {
    type Error = ConfigError;

    fn try_from(words: usize) -> Result<Self, ConfigError> {
        Self::new(words)
    }
}

impl fmt::Display for MinMatchWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller contract violations. The engine has no domain errors of its own:
/// every string input, including empty ones, produces a well-defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_match_words` was zero.
    ZeroMinMatchWords,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMinMatchWords => {
                write!(f, "invalid configuration: min-match-words must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// TOKENS AND RUNS
// =============================================================================

/// A whitespace-delimited word with its byte offset into the source text.
///
/// The ordinal position of a token is its index in the tokenizer's output;
/// it is not stored redundantly here. Attached punctuation stays part of the
/// token - "word," and "word" are different tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word exactly as it appears in the source, original casing intact.
    pub text: &'a str,
    /// Byte offset of the first character within the source text.
    pub offset: usize,
    /// Lowercased form, computed once so the match finder's inner loop is a
    /// plain string comparison.
    pub folded: String,
}

impl Token<'_> {
    /// Case-insensitive equality, the only equality the match finder uses.
    #[inline]
    pub fn matches(&self, other: &Token<'_>) -> bool {
        self.folded == other.folded
    }

    /// Byte offset one past the last character of this token.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// A run of `len` consecutive tokens shared between two documents:
/// `a[start_a..start_a + len]` equals `b[start_b..start_b + len]` under
/// case-insensitive comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRun {
    /// Starting token ordinal in document A.
    pub start_a: usize,
    /// Starting token ordinal in document B.
    pub start_b: usize,
    /// Run length in tokens. Always `>= min_match_words`.
    pub len: usize,
}

impl MatchRun {
    /// One past the last matched ordinal in document A.
    #[inline]
    pub fn end_a(&self) -> usize {
        self.start_a + self.len
    }

    /// One past the last matched ordinal in document B.
    #[inline]
    pub fn end_b(&self) -> usize {
        self.start_b + self.len
    }
}

// =============================================================================
// MATCHED INDEX SETS
// =============================================================================

/// The set of token ordinals of one document covered by at least one
/// qualifying run.
///
/// Union semantics: runs are not deduplicated before insertion, so
/// overlapping and adjacent runs collapse naturally. Order is irrelevant,
/// membership is everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedIndices {
    set: HashSet<usize>,
}

impl MatchedIndices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `len` consecutive ordinals starting at `start`.
    pub fn mark_run(&mut self, start: usize, len: usize) {
        for ordinal in start..start + len {
            self.set.insert(ordinal);
        }
    }

    /// Whether a word ordinal belongs to any qualifying run.
    #[inline]
    pub fn contains(&self, ordinal: usize) -> bool {
        self.set.contains(&ordinal)
    }

    /// Number of distinct matched ordinals.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Fold another document-aligned set into this one. Used when one
    /// submission is compared against many sources and all matches should
    /// light up in a single rendering.
    pub fn union_with(&mut self, other: &MatchedIndices) {
        self.set.extend(other.set.iter().copied());
    }

    /// Ordinals in ascending order. Handy for tests and debugging output;
    /// the renderer itself only needs `contains`.
    pub fn to_sorted_vec(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.set.iter().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.set.iter().copied()
    }
}

impl FromIterator<usize> for MatchedIndices {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        MatchedIndices {
            set: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// A contiguous slice of the original text, flagged matched or plain.
///
/// Whitespace chunks are always plain. Concatenating the `text` of every
/// segment in order reconstructs the source exactly; markup is someone
/// else's job (see the `markup` module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSegment<'a> {
    /// The literal substring, untouched.
    pub text: &'a str,
    /// Whether this chunk is a word covered by a qualifying run.
    pub matched: bool,
}

/// Everything the orchestrator produces for one document pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<'a, 'b> {
    /// Document A, chunked and flagged.
    pub segments_a: Vec<HighlightSegment<'a>>,
    /// Document B, chunked and flagged.
    pub segments_b: Vec<HighlightSegment<'b>>,
    /// Count of distinct matched token ordinals in document A.
    pub matched_words: usize,
    /// Deduplicated surface strings of the matched runs, resolved against
    /// document A's original casing, in discovery order.
    pub phrases: Vec<&'a str>,
}

impl Comparison<'_, '_> {
    /// True when nothing reached the match threshold.
    pub fn is_clean(&self) -> bool {
        self.matched_words == 0
    }
}
