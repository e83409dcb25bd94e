// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Report rendering.
//!
//! Every command collects its results first and hands them to a
//! [`ReportFormatter`], which writes the whole report to any `io::Write`.

mod csv;
mod json;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::filetypes::{FileType, FileTypeCount};
use crate::matcher::Matched;
use crate::tokenizer::Token;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;

/// Matches found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
    pub path: PathBuf,
    pub matches: Vec<Matched>,
}

/// Tokens read from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokens {
    pub path: PathBuf,
    pub tokens: Vec<Token>,
}

/// Flat record for a single match, tagged with its file.
#[derive(Serialize)]
struct MatchRecord<'a> {
    file: &'a Path,
    #[serde(flatten)]
    matched: &'a Matched,
}

/// Flat record for a single token, tagged with its file.
#[derive(Serialize)]
struct TokenRecord<'a> {
    file: &'a Path,
    #[serde(flatten)]
    token: &'a Token,
}

fn match_records(files: &[FileMatches]) -> impl Iterator<Item = MatchRecord<'_>> {
    files.iter().flat_map(|file| {
        file.matches.iter().map(move |matched| MatchRecord { file: &file.path, matched })
    })
}

fn token_records(files: &[FileTokens]) -> impl Iterator<Item = TokenRecord<'_>> {
    files.iter().flat_map(|file| {
        file.tokens.iter().map(move |token| TokenRecord { file: &file.path, token })
    })
}

/// Trait for writing command results in a particular format.
pub trait ReportFormatter {
    /// Write pattern matches, grouped by file in the given order.
    fn write_matches(&self, writer: &mut dyn Write, files: &[FileMatches]) -> anyhow::Result<()>;

    /// Write the token listing of one or more documents.
    fn write_tokens(&self, writer: &mut dyn Write, files: &[FileTokens]) -> anyhow::Result<()>;

    /// Write the MIME type of each walked file.
    fn write_file_types(&self, writer: &mut dyn Write, types: &[FileType]) -> anyhow::Result<()>;

    /// Write per-extension file counts.
    fn write_file_type_counts(
        &self,
        writer: &mut dyn Write,
        counts: &[FileTypeCount],
    ) -> anyhow::Result<()>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
