// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Pattern evaluation over a token sequence.
//!
//! Keyword patterns report every matching token. Proximity patterns report
//! only the first `term1` token whose window holds a `term2` match.

use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::error::Result;
use crate::pattern::{Pattern, PatternKind, Term};
use crate::tokenizer::{Token, tokenize, tokenize_reader};

/// Whether to keep evaluating patterns once something has matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Evaluate every pattern.
    #[default]
    ReportAll,
    /// Return after the first pattern that yields a match.
    StopAtFirst,
}

impl MatchMode {
    pub fn from_match_one(match_one: bool) -> Self {
        if match_one { MatchMode::StopAtFirst } else { MatchMode::ReportAll }
    }
}

/// One reported occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matched {
    /// Value of the token that triggered the match.
    #[serde(rename = "text")]
    pub matched_text: String,
    /// Source text of the pattern.
    #[serde(rename = "pattern")]
    pub pattern_text: String,
    #[serde(rename = "kind")]
    pub pattern_kind: PatternKind,
    #[serde(rename = "line")]
    pub line_number: usize,
    #[serde(rename = "word")]
    pub word_number: usize,
}

impl Matched {
    fn new(token: &Token, pattern: &Pattern) -> Self {
        Self {
            matched_text: token.value.clone(),
            pattern_text: pattern.original_text.clone(),
            pattern_kind: pattern.kind,
            line_number: token.line_number,
            word_number: token.word_number,
        }
    }
}

/// `line,"pattern","text"`
impl fmt::Display for Matched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:?},{:?}", self.line_number, self.pattern_text, self.matched_text)
    }
}

/// Evaluate `patterns` in order against one document's tokens.
///
/// Results follow pattern order, then token order within a keyword pattern.
pub fn find_matches(tokens: &[Token], patterns: &[Pattern], mode: MatchMode) -> Vec<Matched> {
    let mut matches = Vec::new();

    for pattern in patterns {
        match pattern.kind {
            PatternKind::Keyword => {
                matches.extend(
                    tokens
                        .iter()
                        .filter(|token| pattern.term1.matches(&token.value))
                        .map(|token| Matched::new(token, pattern)),
                );
            }
            PatternKind::Proximity => {
                let anchor = pattern.term2.as_ref().and_then(|term2| {
                    check_proximity(tokens, &pattern.term1, term2, pattern.max_distance)
                });
                if let Some(token) = anchor {
                    matches.push(Matched::new(token, pattern));
                }
            }
        }

        if mode == MatchMode::StopAtFirst && !matches.is_empty() {
            break;
        }
    }

    matches
}

/// Find the first `term1` token followed by a `term2` token within
/// `max_distance` tokens.
///
/// The window for a hit at index `i` is `i + 1 ..= i + max_distance`,
/// clipped to the end of the sequence. Returns the `term1` token.
pub fn check_proximity<'a>(
    tokens: &'a [Token],
    term1: &Term,
    term2: &Term,
    max_distance: usize,
) -> Option<&'a Token> {
    tokens.iter().enumerate().find_map(|(i, token)| {
        if !term1.matches(&token.value) {
            return None;
        }
        let end = tokens.len().min(i.saturating_add(max_distance).saturating_add(1));
        tokens[i + 1..end]
            .iter()
            .any(|next| term2.matches(&next.value))
            .then_some(token)
    })
}

/// Tokenize in-memory text and evaluate `patterns` against it.
pub fn check_str(text: &str, patterns: &[Pattern], mode: MatchMode) -> Vec<Matched> {
    find_matches(&tokenize(text), patterns, mode)
}

/// Tokenize a stream and evaluate `patterns` against it.
pub fn check_reader<R: Read>(
    reader: R,
    patterns: &[Pattern],
    mode: MatchMode,
) -> Result<Vec<Matched>> {
    let tokens = tokenize_reader(reader)?;
    Ok(find_matches(&tokens, patterns, mode))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
