// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Minimal `cat` and `grep` clones sharing a line-scanning core.
//!
//! The library holds everything except argument handling at the process
//! boundary: bounded line reading, pattern compilation, line matching,
//! per-source scanning, and output formatting. The `mcat` and `mgrep`
//! binaries are thin drivers over these modules.

pub mod cat;
pub mod cli;
pub mod error;
pub mod line_reader;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod source;
