// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Per-source scanning for `mgrep`.
//!
//! Drives one source to completion: pulls lines, delegates to the line
//! matcher, accumulates the match count, and invokes the caller's
//! per-match callback when the output mode wants per-line output.

use std::io::{self, BufRead};

use crate::line_reader::LineReader;
use crate::matcher::matches_line;
use crate::options::GrepOptions;
use crate::pattern::PatternSet;

/// Result of scanning one source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total lines read. Truncated segments count as whole lines.
    pub lines: u64,
    /// Lines that matched, after inversion.
    pub matches: u64,
    /// False when the scan stopped early at the first match.
    pub reached_eof: bool,
    /// Lines that were split at the length bound.
    pub truncated: u64,
}

/// Scan `reader` against `set` until end of stream.
///
/// `on_match` receives the line text, its 1-based line number, and the
/// running match count. It is never invoked in count or filename-only
/// modes. In the filename-only modes scanning stops right after the
/// first match, so the rest of the source is never read and read errors
/// past that point are never surfaced.
pub fn scan<R: BufRead>(
    reader: &mut LineReader<R>,
    name: &str,
    set: &PatternSet,
    options: &GrepOptions,
    mut on_match: impl FnMut(&str, u64, u64) -> io::Result<()>,
) -> io::Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    while let Some(line) = reader.next_line()? {
        summary.lines += 1;
        if line.truncated {
            summary.truncated += 1;
            tracing::warn!(
                "{name}: line {} truncated at {} bytes",
                summary.lines,
                line.text.len()
            );
        }
        if !matches_line(&line.text, set, options.invert) {
            continue;
        }
        summary.matches += 1;
        if options.mode.per_line() {
            on_match(&line.text, summary.lines, summary.matches)?;
        }
        if options.mode.stops_after_first_match() {
            return Ok(summary);
        }
    }

    summary.reached_eof = true;
    Ok(summary)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
