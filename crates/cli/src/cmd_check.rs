// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! `phrasecheck check` and `phrasecheck check-directory` implementation.
//!
//! Each document is tokenized and matched on its own against one shared,
//! read-only pattern set. Directory runs fan the documents out over rayon
//! and report them in walk order.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;

use phrasecheck::cli::{CheckArgs, CheckDirectoryArgs, OutputFormat};
use phrasecheck::config::Config;
use phrasecheck::discovery;
use phrasecheck::error::ExitCode;
use phrasecheck::file_reader::FileContent;
use phrasecheck::matcher::{MatchMode, find_matches};
use phrasecheck::pattern::{Pattern, load_pattern_file};
use phrasecheck::report::{self, FileMatches};
use phrasecheck::tokenizer::tokenize;
use phrasecheck::walker::FileWalker;

/// Run `phrasecheck check`.
///
/// Any document that cannot be read aborts the run.
pub fn run(args: &CheckArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = discovery::load_config(config_path, &std::env::current_dir()?)?;
    let patterns = load_patterns(&args.patterns)?;
    let mode = match_mode(args.match_one, &config);

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        results.push(check_file(path, &patterns, mode)?);
    }

    write_matches(args.output, &results)?;
    Ok(ExitCode::Success)
}

/// Run `phrasecheck check-directory`.
///
/// Documents that cannot be read are logged and skipped.
pub fn run_directory(
    args: &CheckDirectoryArgs,
    config_path: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let config = discovery::load_config(config_path, &std::env::current_dir()?)?;
    let patterns = load_patterns(&args.patterns)?;
    let mode = match_mode(args.match_one, &config);

    if !args.path.is_dir() {
        anyhow::bail!("{} is not a directory", args.path.display());
    }

    let walker = FileWalker::new(config.walker_config(args.exclude.as_deref(), args.max_depth)?);
    let (files, stats) = walker.walk_collect(&args.path);

    let results: Vec<FileMatches> = files
        .par_iter()
        .filter_map(|file| match check_file(&file.path, &patterns, mode) {
            Ok(found) => Some(found),
            Err(err) => {
                tracing::warn!("skipping {}: {}", file.path.display(), err);
                None
            }
        })
        .collect();

    let total: usize = results.iter().map(|r| r.matches.len()).sum();
    tracing::debug!(
        "checked {} of {} files ({} excluded), {} matches",
        results.len(),
        stats.files_found,
        stats.excluded,
        total
    );

    write_matches(args.output, &results)?;
    Ok(ExitCode::Success)
}

fn load_patterns(path: &Path) -> anyhow::Result<Vec<Pattern>> {
    let patterns = load_pattern_file(path)?;
    if patterns.is_empty() {
        tracing::warn!("{}: no patterns", path.display());
    }
    tracing::debug!("loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

fn match_mode(match_one: bool, config: &Config) -> MatchMode {
    MatchMode::from_match_one(match_one || config.check.match_one)
}

/// Tokenize and match one document.
fn check_file(
    path: &Path,
    patterns: &[Pattern],
    mode: MatchMode,
) -> phrasecheck::Result<FileMatches> {
    let content = FileContent::read(path)?;
    if !content.is_utf8() {
        tracing::debug!("{}: invalid UTF-8 replaced", path.display());
    }
    let tokens = tokenize(&content.as_text());
    let matches = find_matches(&tokens, patterns, mode);
    tracing::trace!("{}: {} tokens, {} matches", path.display(), tokens.len(), matches.len());
    Ok(FileMatches { path: path.to_path_buf(), matches })
}

fn write_matches(format: OutputFormat, results: &[FileMatches]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::formatter(format)
        .write_matches(&mut out, results)
        .context("failed to write report")?;
    out.flush()?;
    Ok(())
}
