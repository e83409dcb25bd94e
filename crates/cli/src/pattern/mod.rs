// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Pattern model and grammar.
//!
//! A pattern file holds one pattern per line:
//! - `attorn*` is a keyword pattern (one term, wildcards allowed)
//! - `work product` is a proximity pattern with an implicit distance of 1
//! - `attorn* w/5 client*` is a proximity pattern with an explicit distance

mod load;
mod parser;
mod term;

use std::fmt;

use serde::Serialize;

pub use load::{load_pattern_file, load_patterns};
pub use parser::{DISTANCE_MARKER, parse_pattern};
pub use term::{Term, Wildcard};

/// The two kinds of pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// A single term matched against every token.
    Keyword,
    /// Two terms, the second within a bounded number of tokens after the first.
    Proximity,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Keyword => f.write_str("keyword"),
            PatternKind::Proximity => f.write_str("proximity"),
        }
    }
}

/// One parsed matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub term1: Term,
    /// Present for proximity patterns only.
    pub term2: Option<Term>,
    /// Maximum number of tokens after a `term1` hit searched for `term2`.
    /// Zero for keyword patterns.
    pub max_distance: usize,
    /// The source line as written, used when reporting.
    pub original_text: String,
}

impl Pattern {
    /// Build a keyword pattern whose source text is the term itself.
    pub fn keyword(term: impl Into<String>) -> Self {
        let term = Term::new(term);
        Self {
            kind: PatternKind::Keyword,
            original_text: term.as_str().to_string(),
            term1: term,
            term2: None,
            max_distance: 0,
        }
    }

    /// Build a proximity pattern with source text `term1 w/N term2`.
    pub fn proximity(
        term1: impl Into<String>,
        term2: impl Into<String>,
        max_distance: usize,
    ) -> Self {
        let term1 = Term::new(term1);
        let term2 = Term::new(term2);
        Self {
            kind: PatternKind::Proximity,
            original_text: format!("{term1} {DISTANCE_MARKER}{max_distance} {term2}"),
            term1,
            term2: Some(term2),
            max_distance,
        }
    }

    /// Replace the reported source text.
    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = text.into();
        self
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_text)
    }
}

/// A pattern line that violates the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("missing pattern")]
    Missing,

    #[error("malformed proximity pattern: {pattern:?}")]
    Malformed { pattern: String },

    #[error("invalid max distance in pattern: {pattern:?}")]
    InvalidDistance { pattern: String },
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
