// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Output formatting for `mgrep`.
//!
//! Two writers over any `io::Write` sink: one per matching line, one for
//! the end-of-source summary. The output modes are mutually exclusive;
//! which writer produces output is decided entirely by `OutputMode`.

use std::io::{self, Write};

use crate::options::{GrepOptions, OutputMode};

/// Write one matching line.
///
/// Prefixes `filename:` when scanning multiple sources and
/// `line_number:` when requested. Exactly one trailing newline is
/// emitted regardless of whether the line text carried one.
pub fn write_match(
    out: &mut impl Write,
    filename: &str,
    line: &str,
    line_number: u64,
    options: &GrepOptions,
    multiple_sources: bool,
) -> io::Result<()> {
    if multiple_sources {
        write!(out, "{filename}:")?;
    }
    if options.line_numbers {
        write!(out, "{line_number}:")?;
    }
    let text = line.strip_suffix('\n').unwrap_or(line);
    writeln!(out, "{text}")
}

/// Write the end-of-source summary.
///
/// `Count` emits `filename:count` across multiple sources and a bare
/// count otherwise. The filename-only modes emit the name exactly once
/// when anything matched; the combined list+count mode never prints the
/// count itself. Per-line mode has no summary.
pub fn write_summary(
    out: &mut impl Write,
    filename: &str,
    match_count: u64,
    options: &GrepOptions,
    multiple_sources: bool,
) -> io::Result<()> {
    match options.mode {
        OutputMode::Lines => Ok(()),
        OutputMode::Count => {
            if multiple_sources {
                writeln!(out, "{filename}:{match_count}")
            } else {
                writeln!(out, "{match_count}")
            }
        }
        OutputMode::Files | OutputMode::FilesFromCount => {
            if match_count > 0 {
                writeln!(out, "{filename}")
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
