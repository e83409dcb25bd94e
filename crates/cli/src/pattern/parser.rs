// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Single-line pattern parser.

use super::{Pattern, PatternError, PatternKind, Term};

/// Prefix of the distance operator in `term1 w/N term2`.
pub const DISTANCE_MARKER: &str = "w/";

/// Distance used by the two-field `term1 term2` form.
const IMPLICIT_DISTANCE: usize = 1;

/// Parse one pattern line.
///
/// Fields are separated by whitespace:
/// - one field: keyword pattern
/// - two fields: proximity pattern with distance 1
/// - three fields: proximity pattern, the middle field being `w/N`
///
/// A distance operator as the first field, or as the last of two fields, is
/// malformed, as is a line with more than three fields.
pub fn parse_pattern(line: &str) -> Result<Pattern, PatternError> {
    let text = line.trim();
    let fields: Vec<&str> = text.split_whitespace().collect();
    let malformed = || PatternError::Malformed { pattern: text.to_string() };

    match fields.as_slice() {
        [] => Err(PatternError::Missing),
        [first, ..] if is_distance_operator(first) => Err(malformed()),
        [term] => Ok(Pattern {
            kind: PatternKind::Keyword,
            term1: Term::new(*term),
            term2: None,
            max_distance: 0,
            original_text: text.to_string(),
        }),
        [_, second] if is_distance_operator(second) => Err(malformed()),
        [term1, term2] => Ok(proximity(text, term1, term2, IMPLICIT_DISTANCE)),
        [term1, operator, term2] => {
            let distance = parse_distance(operator)
                .ok_or_else(|| PatternError::InvalidDistance { pattern: text.to_string() })?;
            Ok(proximity(text, term1, term2, distance))
        }
        _ => Err(malformed()),
    }
}

fn proximity(text: &str, term1: &str, term2: &str, max_distance: usize) -> Pattern {
    Pattern {
        kind: PatternKind::Proximity,
        term1: Term::new(term1),
        term2: Some(Term::new(term2)),
        max_distance,
        original_text: text.to_string(),
    }
}

fn is_distance_operator(field: &str) -> bool {
    field.starts_with(DISTANCE_MARKER)
}

/// `w/5` → 5. Anything else, including `w/` and `w/-1`, is rejected.
fn parse_distance(field: &str) -> Option<usize> {
    field.strip_prefix(DISTANCE_MARKER)?.parse().ok()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
