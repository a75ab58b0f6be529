// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Bounded-buffer line reading.
//!
//! Lines are pulled from any `BufRead` with an explicit maximum length.
//! A physical line longer than the bound is split at the boundary: the
//! prefix is delivered as a complete line flagged `truncated`, and the
//! remainder continues as the following line(s). This mirrors reading
//! through a fixed-size `fgets` buffer, so pathological inputs behave
//! the same as in the classic tools.

use std::borrow::Cow;
use std::io::{self, BufRead};

use memchr::memchr;

/// Default maximum line length: 64 KiB.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// One line pulled from a reader, without its trailing newline.
#[derive(Debug)]
pub struct Line<'a> {
    /// Line content. Invalid UTF-8 is replaced with U+FFFD.
    pub text: Cow<'a, str>,
    /// Whether the source had a newline here. False on the final line of
    /// a stream that does not end in a newline, and on truncated lines.
    pub had_newline: bool,
    /// Whether the line was split at the length bound.
    pub truncated: bool,
}

/// Reads `\n`-terminated lines from a stream, bounding each line at a
/// configurable maximum length.
pub struct LineReader<R> {
    inner: R,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_max_len(inner, DEFAULT_MAX_LINE_LEN)
    }

    /// A zero bound could never make progress; it is clamped to one byte.
    pub fn with_max_len(inner: R, max_len: usize) -> Self {
        LineReader {
            inner,
            max_len: max_len.max(1),
            buf: Vec::new(),
        }
    }

    /// Pull the next line. Returns `Ok(None)` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        let mut had_newline = false;
        let mut truncated = false;

        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                if self.buf.is_empty() {
                    return Ok(None);
                }
                break;
            }
            let room = self.max_len - self.buf.len();
            match memchr(b'\n', available) {
                Some(pos) if pos < room => {
                    self.buf.extend_from_slice(&available[..pos]);
                    self.inner.consume(pos + 1);
                    had_newline = true;
                    break;
                }
                _ => {
                    let take = room.min(available.len());
                    self.buf.extend_from_slice(&available[..take]);
                    self.inner.consume(take);
                    if self.buf.len() == self.max_len {
                        truncated = true;
                        break;
                    }
                }
            }
        }

        Ok(Some(Line {
            text: String::from_utf8_lossy(&self.buf),
            had_newline,
            truncated,
        }))
    }
}

#[cfg(test)]
#[path = "line_reader_tests.rs"]
mod tests;
