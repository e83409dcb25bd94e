// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Phrase checking for text documents.
//!
//! The core is a position-aware tokenizer ([`tokenizer`]), a pattern
//! grammar ([`pattern`]) and a matcher ([`matcher`]) that evaluates keyword
//! and proximity patterns against a token stream. The remaining modules are
//! the collaborators used by the `phrasecheck` binary: directory walking,
//! file reading, MIME lookup, configuration and report rendering.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exclude;
pub mod file_reader;
pub mod filetypes;
pub mod matcher;
pub mod pattern;
pub mod report;
pub mod tokenizer;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use matcher::{MatchMode, Matched, check_reader, check_str, find_matches};
pub use pattern::{
    Pattern, PatternError, PatternKind, load_pattern_file, load_patterns, parse_pattern,
};
pub use tokenizer::{Token, TokenReader, tokenize, tokenize_reader};
