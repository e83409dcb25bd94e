// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Path exclusion lists.
//!
//! An exclusion file holds one path element per line. Any path containing
//! an entry as a substring is excluded; for directories that prunes the
//! whole subtree. The walker passes paths relative to its root, so the
//! root's own location never triggers an exclusion.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Substring-based path exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeList {
    entries: Vec<String>,
}

impl ExcludeList {
    /// Build from entries, trimming each and dropping blanks.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Read an exclusion file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(content.lines()))
    }

    /// Add entries from another list, skipping duplicates.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in Self::new(entries).entries {
            if !self.entries.contains(&entry) {
                self.entries.push(entry);
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `path` contains any entry.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.entries.iter().any(|entry| path.contains(entry.as_str()))
    }
}

#[cfg(test)]
#[path = "exclude_tests.rs"]
mod tests;
