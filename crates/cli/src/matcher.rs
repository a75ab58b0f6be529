// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Line matching against a compiled pattern set.

use crate::pattern::PatternSet;

/// Evaluate one line against every pattern in order, short-circuiting on
/// the first hit, then apply inversion.
///
/// "Any pattern matches" semantics: logical OR across the set. A line
/// evaluated against an empty set never matches, so with `invert` every
/// line matches. `Regex::is_match` cannot fail at match time, which
/// makes "treat an erroring pattern as non-matching and keep going"
/// hold trivially.
pub fn matches_line(line: &str, set: &PatternSet, invert: bool) -> bool {
    let hit = set.iter().any(|regex| regex.is_match(line));
    hit ^ invert
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
