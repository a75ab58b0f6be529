// SPDX-License-Identifier: MIT
// Copyright (c) 2026 minutils contributors

//! Input source resolution.
//!
//! Maps a source name from the command line to a buffered reader. The
//! sentinel `-` reads standard input. A failed open is returned as a
//! `SourceError` so the caller can report it, skip the source, and keep
//! going with any remaining sources.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::SourceError;

/// Display name used for standard input.
pub const STDIN_NAME: &str = "(standard input)";

/// A resolved input source: display name plus a buffered reader.
pub struct Source {
    pub name: String,
    pub reader: Box<dyn BufRead>,
}

/// Resolve a source name to a readable line stream.
pub fn open_source(name: &str) -> Result<Source, SourceError> {
    if name == "-" {
        return Ok(Source {
            name: STDIN_NAME.to_string(),
            reader: Box::new(BufReader::new(io::stdin())),
        });
    }
    let file = File::open(name).map_err(|source| SourceError {
        name: name.to_string(),
        source,
    })?;
    Ok(Source {
        name: name.to_string(),
        reader: Box::new(BufReader::new(file)),
    })
}
