// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! `phrasecheck mimetypes` and `phrasecheck filetypes` implementation.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;

use phrasecheck::cli::WalkArgs;
use phrasecheck::discovery;
use phrasecheck::error::ExitCode;
use phrasecheck::filetypes::{file_type_counts, file_types};
use phrasecheck::report;
use phrasecheck::walker::{FileWalker, WalkedFile};

fn walk(args: &WalkArgs, config_path: Option<&Path>) -> anyhow::Result<Vec<WalkedFile>> {
    let config = discovery::load_config(config_path, &std::env::current_dir()?)?;
    if !args.path.is_dir() {
        anyhow::bail!("{} is not a directory", args.path.display());
    }
    let walker = FileWalker::new(config.walker_config(args.exclude.as_deref(), args.max_depth)?);
    let (files, stats) = walker.walk_collect(&args.path);
    tracing::debug!("found {} files ({} excluded)", stats.files_found, stats.excluded);
    Ok(files)
}

/// Run `phrasecheck mimetypes`: one row per file.
pub fn run_mimetypes(args: &WalkArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let files = walk(args, config_path)?;
    let types = file_types(&files);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::formatter(args.output)
        .write_file_types(&mut out, &types)
        .context("failed to write mime types")?;
    out.flush()?;
    Ok(ExitCode::Success)
}

/// Run `phrasecheck filetypes`: one row per extension.
pub fn run_filetypes(args: &WalkArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let files = walk(args, config_path)?;
    let counts = file_type_counts(&files);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::formatter(args.output)
        .write_file_type_counts(&mut out, &counts)
        .context("failed to write file type counts")?;
    out.flush()?;
    Ok(ExitCode::Success)
}
