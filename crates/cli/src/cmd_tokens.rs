// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! `phrasecheck tokens` command implementation.

use std::io::{self, Write};

use anyhow::Context;

use phrasecheck::cli::TokensArgs;
use phrasecheck::error::ExitCode;
use phrasecheck::file_reader::FileContent;
use phrasecheck::report::{self, FileTokens};
use phrasecheck::tokenizer::tokenize;

/// Run `phrasecheck tokens`.
pub fn run(args: &TokensArgs) -> anyhow::Result<ExitCode> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let content = FileContent::read(path)?;
        let tokens = tokenize(&content.as_text());
        tracing::debug!("{}: {} tokens", path.display(), tokens.len());
        files.push(FileTokens { path: path.clone(), tokens });
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::formatter(args.output)
        .write_tokens(&mut out, &files)
        .context("failed to write token listing")?;
    out.flush()?;
    Ok(ExitCode::Success)
}
