//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use predicates;

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;

/// Returns a Command configured to run the mgrep binary
pub fn mgrep() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mgrep"))
}

/// Returns a Command configured to run the mcat binary
pub fn mcat() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mcat"))
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}
