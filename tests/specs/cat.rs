//! Behavioral specs for `mcat`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn copies_a_file_verbatim() {
    let dir = tempdir();
    let file = write_file(&dir, "input.txt", "foo\n\nbar\n");

    mcat().arg(&file).assert().success().stdout("foo\n\nbar\n");
}

#[test]
fn concatenates_files_in_argument_order() {
    let dir = tempdir();
    let a = write_file(&dir, "a.txt", "first\n");
    let b = write_file(&dir, "b.txt", "second\n");

    mcat()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("first\nsecond\n");
}

#[test]
fn reads_standard_input_by_default() {
    mcat()
        .write_stdin("from stdin\n")
        .assert()
        .success()
        .stdout("from stdin\n");
}

#[test]
fn preserves_a_missing_final_newline() {
    let dir = tempdir();
    let file = write_file(&dir, "input.txt", "no newline");

    mcat().arg(&file).assert().success().stdout("no newline");
}

#[test]
fn numbers_every_line() {
    let dir = tempdir();
    let file = write_file(&dir, "input.txt", "foo\n\nbar\n");

    mcat()
        .arg("-n")
        .arg(&file)
        .assert()
        .success()
        .stdout("     1\tfoo\n     2\t\n     3\tbar\n");
}

#[test]
fn numbers_only_nonblank_lines() {
    let dir = tempdir();
    let file = write_file(&dir, "input.txt", "foo\n\nbar\n");

    mcat()
        .arg("-b")
        .arg(&file)
        .assert()
        .success()
        .stdout("     1\tfoo\n\n     2\tbar\n");
}

#[test]
fn nonblank_numbering_overrides_full_numbering() {
    let dir = tempdir();
    let file = write_file(&dir, "input.txt", "foo\n\n");

    mcat()
        .args(["-n", "-b"])
        .arg(&file)
        .assert()
        .success()
        .stdout("     1\tfoo\n\n");
}

#[test]
fn numbering_restarts_for_each_source() {
    let dir = tempdir();
    let a = write_file(&dir, "a.txt", "one\n");
    let b = write_file(&dir, "b.txt", "two\n");

    mcat()
        .arg("-n")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("     1\tone\n     1\ttwo\n");
}

#[test]
fn show_ends_marks_line_endings() {
    let dir = tempdir();
    let file = write_file(&dir, "input.txt", "foo\n\n");

    mcat()
        .arg("-E")
        .arg(&file)
        .assert()
        .success()
        .stdout("foo$\n$\n");
}

#[test]
fn missing_file_is_reported_and_siblings_still_copy() {
    let dir = tempdir();
    let good = write_file(&dir, "good.txt", "still here\n");
    let missing = dir.path().join("missing.txt");

    mcat()
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .code(1)
        .stdout("still here\n")
        .stderr(predicates::str::contains("missing.txt"));
}

#[test]
fn unknown_flag_exits_nonzero() {
    mcat().arg("-z").assert().failure().code(2);
}
