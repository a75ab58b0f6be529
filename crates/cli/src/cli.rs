// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! CLI argument parsing with clap derive.

use clap::Parser;

use crate::options::{CatOptions, GrepOptions, Numbering, OutputMode};

/// Search for lines matching patterns in files or standard input
#[derive(Parser)]
#[command(name = "mgrep")]
#[command(version, about, long_about = None)]
pub struct GrepCli {
    /// Pattern to match; repeatable, a line matching any pattern is selected
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Ignore case distinctions in patterns and input
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Select lines that do not match any pattern
    #[arg(short = 'v', long = "invert-match")]
    pub invert_match: bool,

    /// Print only a count of matching lines per source
    #[arg(short = 'c', long = "count")]
    pub count: bool,

    /// Print only names of sources with at least one match
    #[arg(short = 'l', long = "files-with-matches")]
    pub files_with_matches: bool,

    /// Prefix each matching line with its line number
    #[arg(short = 'n', long = "line-number")]
    pub line_number: bool,

    /// Pattern (unless -e was given), then input files; - reads standard input
    #[arg(value_name = "PATTERN_AND_FILES")]
    pub args: Vec<String>,
}

/// A fully resolved `mgrep` invocation.
pub struct GrepInvocation {
    pub patterns: Vec<String>,
    pub sources: Vec<String>,
    pub options: GrepOptions,
}

impl GrepCli {
    /// Resolve positionals into patterns and sources.
    ///
    /// When no `-e` pattern was given, the first positional is the
    /// pattern, per the classic grep calling convention. Returns `None`
    /// when no pattern is available at all. Sources default to standard
    /// input when none are named.
    pub fn into_invocation(self) -> Option<GrepInvocation> {
        let mut patterns = self.patterns;
        let mut sources = self.args;
        if patterns.is_empty() {
            if sources.is_empty() {
                return None;
            }
            patterns.push(sources.remove(0));
        }
        if sources.is_empty() {
            sources.push("-".to_string());
        }
        let options = GrepOptions {
            case_insensitive: self.ignore_case,
            invert: self.invert_match,
            line_numbers: self.line_number,
            mode: OutputMode::from_flags(self.files_with_matches, self.count),
        };
        Some(GrepInvocation {
            patterns,
            sources,
            options,
        })
    }
}

/// Concatenate files to standard output
#[derive(Parser)]
#[command(name = "mcat")]
#[command(version, about, long_about = None)]
pub struct CatCli {
    /// Number all output lines
    #[arg(short = 'n', long = "number")]
    pub number: bool,

    /// Number non-blank output lines; overrides -n
    #[arg(short = 'b', long = "number-nonblank")]
    pub number_nonblank: bool,

    /// Display $ at the end of each line
    #[arg(short = 'E', long = "show-ends")]
    pub show_ends: bool,

    /// Files to concatenate; - or no file reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl CatCli {
    pub fn into_invocation(self) -> (CatOptions, Vec<String>) {
        let options = CatOptions {
            numbering: Numbering::from_flags(self.number, self.number_nonblank),
            show_ends: self.show_ends,
        };
        let mut sources = self.files;
        if sources.is_empty() {
            sources.push("-".to_string());
        }
        (options, sources)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
