// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Invocation options for both tools.
//!
//! Flag combinations with precedence rules are represented as tagged
//! enums rather than independent booleans, so "these two flags combine
//! into a third mode" is explicit instead of an artifact of assignment
//! order.

/// Output mode for `mgrep`, derived from the `-c` and `-l` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Print every matching line.
    #[default]
    Lines,
    /// Print only a per-source match count (`-c`).
    Count,
    /// Print only names of sources with at least one match (`-l`).
    Files,
    /// `-l` combined with `-c`: print the name when the count is
    /// positive, never the count itself.
    FilesFromCount,
}

impl OutputMode {
    pub fn from_flags(files_with_matches: bool, count: bool) -> Self {
        match (files_with_matches, count) {
            (true, true) => OutputMode::FilesFromCount,
            (true, false) => OutputMode::Files,
            (false, true) => OutputMode::Count,
            (false, false) => OutputMode::Lines,
        }
    }

    /// Whether each match produces per-line output.
    pub fn per_line(self) -> bool {
        matches!(self, OutputMode::Lines)
    }

    /// Whether scanning can stop at the first match. Both filename-only
    /// modes need nothing beyond "did anything match".
    pub fn stops_after_first_match(self) -> bool {
        matches!(self, OutputMode::Files | OutputMode::FilesFromCount)
    }
}

/// Immutable configuration snapshot for one `mgrep` invocation.
#[derive(Debug, Clone, Default)]
pub struct GrepOptions {
    pub case_insensitive: bool,
    pub invert: bool,
    pub line_numbers: bool,
    pub mode: OutputMode,
}

/// Line numbering mode for `mcat`. `-b` overrides `-n` when both are
/// given, matching GNU cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numbering {
    #[default]
    None,
    /// Number every line (`-n`).
    All,
    /// Number non-blank lines only (`-b`).
    NonBlank,
}

impl Numbering {
    pub fn from_flags(number: bool, number_nonblank: bool) -> Self {
        if number_nonblank {
            Numbering::NonBlank
        } else if number {
            Numbering::All
        } else {
            Numbering::None
        }
    }
}

/// Immutable configuration snapshot for one `mcat` invocation.
#[derive(Debug, Clone, Default)]
pub struct CatOptions {
    pub numbering: Numbering,
    pub show_ends: bool,
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
