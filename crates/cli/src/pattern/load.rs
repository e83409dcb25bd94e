// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Pattern set loading.

use std::fs;
use std::path::Path;

use super::{Pattern, PatternError, parse_pattern};
use crate::error::{Error, Result};

/// Parse a sequence of lines, skipping blank ones.
///
/// The first malformed line aborts the load; no partial set is returned.
pub fn load_patterns<I>(lines: I) -> std::result::Result<Vec<Pattern>, PatternError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !line.as_ref().trim().is_empty())
        .map(|line| parse_pattern(line.as_ref()))
        .collect()
}

/// Read and parse a pattern file, one pattern per line.
///
/// Errors carry the file path and the 1-based line number.
pub fn load_pattern_file(path: &Path) -> Result<Vec<Pattern>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let mut patterns = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let pattern = parse_pattern(line).map_err(|source| Error::PatternFile {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        patterns.push(pattern);
    }
    Ok(patterns)
}
