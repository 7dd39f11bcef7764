// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the parex command-line interface.
//!
//! Two subcommands: `compare` renders both documents with shared phrases
//! highlighted, `phrases` prints just the deduplicated phrase list for
//! scripting. Everything the commands do is a thin wrapper over the library;
//! the CLI owns file reading and output formatting, nothing else.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "parex",
    about = "Find and highlight phrases shared between two text documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two text files and render both with shared phrases marked
    Compare {
        /// First document (the submission)
        file_a: String,

        /// Second document (the source candidate)
        file_b: String,

        /// Minimum run length, in words, for a match to count
        #[arg(long, default_value_t = 3)]
        min_words: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Ansi)]
        format: Format,
    },

    /// Print the deduplicated matched phrases, one per line
    Phrases {
        /// First document (phrases are resolved against this one's casing)
        file_a: String,

        /// Second document
        file_b: String,

        /// Minimum run length, in words, for a match to count
        #[arg(long, default_value_t = 3)]
        min_words: usize,
    },
}

/// How `compare` writes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Colored terminal rendering with a match summary
    Ansi,
    /// HTML fragment with `<mark>` elements
    Html,
    /// The full comparison as JSON
    Json,
    /// Plain text (the identity rendering, useful for sanity checks)
    Text,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Format::Ansi => "ansi",
            Format::Html => "html",
            Format::Json => "json",
            Format::Text => "text",
        })
    }
}
