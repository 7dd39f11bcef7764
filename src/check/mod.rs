// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The feature layer: one thin driver per call site.
//!
//! Every checking feature is the same engine with different inputs:
//!
//! | Driver                          | Compares a submission against      |
//! |---------------------------------|------------------------------------|
//! | [`pairwise::check`]             | a second submission                |
//! | [`history::search_history`]     | the user's stored records          |
//! | [`history::check_extracted_file`] | stored records, file-route shape |
//! | [`web::check`]                  | web-search snippets                |
//!
//! Each driver returns its own report type embedding the engine's output;
//! [`CheckReport`] is the tagged union callers persist or serialize when
//! they need one shape for all of them. The `check_type` discriminator is
//! what history entries store and downstream consumers dispatch on.

pub mod history;
pub mod pairwise;
pub mod web;

use serde::Serialize;

pub use history::{FileHistoryMatch, FileHistoryReport, HistoryMatch, HistoryRecord, HistoryReport};
pub use pairwise::PairwiseReport;
pub use web::{WebHit, WebReport, WebSource};

/// Minimum collaborator similarity (percent) for a history record to count
/// as a match.
pub const DEFAULT_MIN_SIMILARITY: f64 = 50.0;

/// Any feature's report, tagged by which check produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "check_type", rename_all = "snake_case")]
pub enum CheckReport<'a, 'b> {
    TextComparison(PairwiseReport<'a, 'b>),
    HistorySearch(HistoryReport),
    FileHistory(FileHistoryReport),
    WebSearch(WebReport<'a>),
}
