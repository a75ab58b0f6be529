// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Pattern set compilation.
//!
//! An ordered set of raw patterns is compiled into one `Regex` handle per
//! pattern, index-aligned with the input. Compilation is all-or-nothing:
//! the first pattern that fails aborts the build, and handles compiled
//! before the failure are dropped before the error is returned. Release
//! is `Drop`, so every successful build is paired with exactly one
//! release on every exit path.

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// An ordered set of compiled patterns sharing one case-sensitivity flag.
#[derive(Debug)]
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    /// Compile every raw pattern, applying `case_insensitive` uniformly
    /// across the whole set.
    ///
    /// An empty pattern list builds an empty, valid set.
    pub fn build(patterns: &[String], case_insensitive: bool) -> Result<Self, PatternError> {
        let mut regexes = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|source| PatternError {
                    pattern: pattern.clone(),
                    source,
                })?;
            regexes.push(regex);
        }
        Ok(PatternSet { regexes })
    }

    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }

    /// Compiled handles in command-line order.
    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.regexes.iter()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
