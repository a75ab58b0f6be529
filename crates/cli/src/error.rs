// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Error types and process exit codes.

use std::io;

use thiserror::Error;

/// Failure to compile one pattern of a pattern set.
///
/// Carries the offending raw pattern so the message can point at the
/// argument the user actually typed.
#[derive(Debug, Error)]
#[error("could not compile pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The raw pattern text that failed to compile.
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// An input source that could not be opened.
///
/// Recoverable: the caller reports it, skips the source, and continues
/// with any remaining sources.
#[derive(Debug, Error)]
#[error("{name}: {source}")]
pub struct SourceError {
    /// The source name as given on the command line.
    pub name: String,
    #[source]
    pub source: io::Error,
}

/// Process exit codes shared by both binaries.
///
/// `mgrep` follows the conventional grep contract: 0 when at least one
/// line matched, 1 when the scan completed without a match, 2 when
/// arguments or patterns were invalid or a source could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success; for `mgrep`, at least one match was found.
    Success = 0,
    /// Scanning completed but no line matched.
    NoMatch = 1,
    /// Argument or pattern errors, or a source failed.
    Error = 2,
}

impl ExitCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}
