// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! CSV report output.
//!
//! Every field, headers included, is quoted.

use std::io::Write;

use ::csv::{QuoteStyle, WriterBuilder};

use crate::filetypes::{FileType, FileTypeCount};

use super::{FileMatches, FileTokens, ReportFormatter, match_records, token_records};

pub const MATCH_HEADER: [&str; 4] = ["filename", "line no", "pattern", "phrase"];
pub const TOKEN_HEADER: [&str; 4] = ["filename", "token", "word no", "line no"];
pub const FILE_TYPE_HEADER: [&str; 2] = ["file path", "mime type"];
pub const FILE_TYPE_COUNT_HEADER: [&str; 3] = ["file ext", "mime type", "count"];

/// CSV format report formatter.
pub struct CsvFormatter;

fn csv_writer(writer: &mut dyn Write) -> ::csv::Writer<&mut dyn Write> {
    WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(writer)
}

impl ReportFormatter for CsvFormatter {
    fn write_matches(&self, writer: &mut dyn Write, files: &[FileMatches]) -> anyhow::Result<()> {
        let mut out = csv_writer(writer);
        out.write_record(MATCH_HEADER)?;
        for record in match_records(files) {
            let file = record.file.to_string_lossy();
            let line = record.matched.line_number.to_string();
            out.write_record([
                &*file,
                line.as_str(),
                record.matched.pattern_text.as_str(),
                record.matched.matched_text.as_str(),
            ])?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_tokens(&self, writer: &mut dyn Write, files: &[FileTokens]) -> anyhow::Result<()> {
        let mut out = csv_writer(writer);
        out.write_record(TOKEN_HEADER)?;
        for record in token_records(files) {
            let file = record.file.to_string_lossy();
            let word = record.token.word_number.to_string();
            let line = record.token.line_number.to_string();
            out.write_record([&*file, record.token.value.as_str(), word.as_str(), line.as_str()])?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_file_types(&self, writer: &mut dyn Write, types: &[FileType]) -> anyhow::Result<()> {
        let mut out = csv_writer(writer);
        out.write_record(FILE_TYPE_HEADER)?;
        for file_type in types {
            let path = file_type.path.to_string_lossy();
            out.write_record([&*path, file_type.mime_type])?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_file_type_counts(
        &self,
        writer: &mut dyn Write,
        counts: &[FileTypeCount],
    ) -> anyhow::Result<()> {
        let mut out = csv_writer(writer);
        out.write_record(FILE_TYPE_COUNT_HEADER)?;
        for entry in counts {
            let count = entry.count.to_string();
            out.write_record([entry.extension.as_str(), entry.mime_type, count.as_str()])?;
        }
        out.flush()?;
        Ok(())
    }
}
