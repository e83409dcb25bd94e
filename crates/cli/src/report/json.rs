// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! JSON report output.

use std::io::Write;

use serde::Serialize;

use crate::filetypes::{FileType, FileTypeCount};

use super::{FileMatches, FileTokens, ReportFormatter, match_records, token_records};

/// JSON format report formatter.
///
/// Each report is a single pretty-printed array followed by a newline.
pub struct JsonFormatter;

fn write_array<T: Serialize>(writer: &mut dyn Write, items: &[T]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, items)?;
    writeln!(writer)?;
    Ok(())
}

impl ReportFormatter for JsonFormatter {
    fn write_matches(&self, writer: &mut dyn Write, files: &[FileMatches]) -> anyhow::Result<()> {
        let records: Vec<_> = match_records(files).collect();
        write_array(writer, &records)
    }

    fn write_tokens(&self, writer: &mut dyn Write, files: &[FileTokens]) -> anyhow::Result<()> {
        let records: Vec<_> = token_records(files).collect();
        write_array(writer, &records)
    }

    fn write_file_types(&self, writer: &mut dyn Write, types: &[FileType]) -> anyhow::Result<()> {
        write_array(writer, types)
    }

    fn write_file_type_counts(
        &self,
        writer: &mut dyn Write,
        counts: &[FileTypeCount],
    ) -> anyhow::Result<()> {
        write_array(writer, counts)
    }
}
