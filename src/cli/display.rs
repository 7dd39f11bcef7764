// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the parex CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `PAREX_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then macOS system appearance, then defaults to dark because most
//! developers live there.
//!
//! Matched phrases render as bold text over the theme's yellow - close to
//! what a `<mark>` looks like in a browser, which is where the other
//! renderer of these segments ends up. Respects `NO_COLOR` and falls back
//! to `»…«` delimiters when stdout is not a TTY, so piped output still
//! shows where the matches are.
//!
//! # Theme detection order
//!
//! 1. `PAREX_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use parex::HighlightSegment;
use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via PAREX_THEME
    if let Ok(theme) = std::env::var("PAREX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HIGHLIGHT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Render a segment sequence for the terminal.
///
/// Matched words come out bold in the theme's yellow; with colors disabled
/// they are wrapped in `»…«` instead so the marks survive a pipe.
pub fn render_segments(segments: &[HighlightSegment<'_>]) -> String {
    let colored = use_colors();
    let mut out = String::new();
    for segment in segments {
        if segment.matched {
            if colored {
                out.push_str(BOLD);
                out.push_str(&YELLOW());
                out.push_str(segment.text);
                out.push_str(RESET);
            } else {
                out.push('»');
                out.push_str(segment.text);
                out.push('«');
            }
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

/// A section header for one document's rendering.
pub fn document_header(label: &str) -> String {
    themed(BLUE, &[BOLD], &format!("── {} ──", label))
}

/// The one-line match summary printed under both renderings.
pub fn match_summary(matched_words: usize, phrase_count: usize) -> String {
    let line = format!(
        "{} matched word{}, {} distinct phrase{}",
        matched_words,
        if matched_words == 1 { "" } else { "s" },
        phrase_count,
        if phrase_count == 1 { "" } else { "s" },
    );
    if matched_words == 0 {
        themed(GREEN, &[], "no shared phrases found")
    } else {
        themed(YELLOW, &[], &line)
    }
}

/// Dim styling for secondary lines (phrase listings).
pub fn dim_line(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}
