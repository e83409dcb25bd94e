// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Match terms with leading/trailing `*` wildcards.

use std::fmt;

use serde::Serialize;

/// The wildcard marker.
pub const WILDCARD: char = '*';

/// A match expression as written in the pattern file.
///
/// Wildcard markers stay in the text and are interpreted on every match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Term(String);

/// How a term compares against a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard<'a> {
    /// `*inner*`
    Contains(&'a str),
    /// `*suffix`
    Suffix(&'a str),
    /// `prefix*`
    Prefix(&'a str),
    /// No markers.
    Exact(&'a str),
}

impl Term {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the term by its markers.
    pub fn wildcard(&self) -> Wildcard<'_> {
        let s = self.0.as_str();
        if let Some(inner) = s.strip_prefix(WILDCARD).and_then(|r| r.strip_suffix(WILDCARD)) {
            return Wildcard::Contains(inner);
        }
        match (s.strip_prefix(WILDCARD), s.strip_suffix(WILDCARD)) {
            // A lone marker is both ends at once.
            (Some(""), Some("")) => Wildcard::Contains(""),
            (Some(suffix), _) => Wildcard::Suffix(suffix),
            (None, Some(prefix)) => Wildcard::Prefix(prefix),
            (None, None) => Wildcard::Exact(s),
        }
    }

    /// Case-sensitive comparison against one token value.
    pub fn matches(&self, value: &str) -> bool {
        match self.wildcard() {
            Wildcard::Contains(inner) => value.contains(inner),
            Wildcard::Suffix(suffix) => value.ends_with(suffix),
            Wildcard::Prefix(prefix) => value.starts_with(prefix),
            Wildcard::Exact(exact) => value == exact,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
#[path = "term_tests.rs"]
mod tests;
