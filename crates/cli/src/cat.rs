// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! The `mcat` line pipeline: numbering and end-of-line markers.

use std::io::{self, BufRead, Write};

use crate::line_reader::LineReader;
use crate::options::{CatOptions, Numbering};

/// True when the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Copy one source to `out`, applying numbering and end markers.
///
/// The line counter restarts for each source. In non-blank numbering
/// mode, blank lines print unnumbered and do not advance the counter.
/// Without `-E` the output reproduces the input byte-for-byte (modulo
/// the length bound): a final line with no newline stays that way.
pub fn write_source<R: BufRead>(
    reader: &mut LineReader<R>,
    name: &str,
    options: &CatOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut line_number: u64 = 0;

    while let Some(line) = reader.next_line()? {
        if line.truncated {
            tracing::warn!("{name}: line truncated at {} bytes", line.text.len());
        }
        let number = match options.numbering {
            Numbering::None => None,
            Numbering::All => {
                line_number += 1;
                Some(line_number)
            }
            Numbering::NonBlank => {
                if is_blank(&line.text) {
                    None
                } else {
                    line_number += 1;
                    Some(line_number)
                }
            }
        };
        if let Some(n) = number {
            write!(out, "{n:>6}\t")?;
        }
        if options.show_ends {
            writeln!(out, "{}$", line.text)?;
        } else {
            out.write_all(line.text.as_bytes())?;
            if line.had_newline {
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cat_tests.rs"]
mod tests;
