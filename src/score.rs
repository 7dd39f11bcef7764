// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interfaces to the remote scoring collaborators.
//!
//! The engine never computes a similarity percentage or an AI-content
//! classification itself; those arrive from external services and flow
//! through the reports as opaque display values. This module defines the
//! trait the feature drivers call and the records they pass along.

use serde::{Deserialize, Serialize};

/// The remote similarity scorer, as seen from this crate.
///
/// Implementations return a percentage in `0.0..=100.0`. The drivers only
/// ever compare and display the value; its meaning belongs to the
/// collaborator.
///
/// `Sync` is required so history scans can fan records out across threads.
pub trait SimilarityScorer: Sync {
    /// Score the similarity of two texts as a percentage.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<T: SimilarityScorer + ?Sized> SimilarityScorer for &T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        (**self).similarity(a, b)
    }
}

/// Severity banding for a similarity percentage, with the user-facing
/// message each band carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    High,
    Moderate,
    Low,
}

impl Verdict {
    /// Band a collaborator score: >= 80 High, >= 50 Moderate, else Low.
    pub fn for_score(score: f64) -> Verdict {
        if score >= 80.0 {
            Verdict::High
        } else if score >= 50.0 {
            Verdict::Moderate
        } else {
            Verdict::Low
        }
    }

    /// The message shown alongside a pairwise check result.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::High => "High similarity detected - Likely plagiarism",
            Verdict::Moderate => "Moderate similarity detected - Review recommended",
            Verdict::Low => "Low similarity - Content appears original",
        }
    }
}

/// One suspicious phrase flagged by the AI-content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiIndicator {
    pub phrase: String,
    pub context: String,
}

/// The AI-content classification for a submission, delivered by the remote
/// collaborator and carried through reports unchanged. Nothing in this crate
/// computes or interprets these numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub ai_probability: f64,
    pub human_probability: f64,
    pub confidence: String,
    pub message: String,
    pub indicators: Vec<AiIndicator>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::for_score(100.0), Verdict::High);
        assert_eq!(Verdict::for_score(80.0), Verdict::High);
        assert_eq!(Verdict::for_score(79.9), Verdict::Moderate);
        assert_eq!(Verdict::for_score(50.0), Verdict::Moderate);
        assert_eq!(Verdict::for_score(49.9), Verdict::Low);
        assert_eq!(Verdict::for_score(0.0), Verdict::Low);
    }

    #[test]
    fn verdict_messages_match_the_bands() {
        assert!(Verdict::High.message().contains("Likely plagiarism"));
        assert!(Verdict::Moderate.message().contains("Review recommended"));
        assert!(Verdict::Low.message().contains("appears original"));
    }
}
