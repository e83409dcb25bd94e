// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Directory walking with substring exclusions.
//!
//! Built on the `ignore` crate's walker with its standard filters off by
//! default, so every file under the root is visited unless excluded.
//! Exclusion entries are matched against the path relative to the walk
//! root. `.git` directories are always pruned.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ignore::WalkBuilder;

use crate::exclude::ExcludeList;

/// Walker settings.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,
    /// Paths containing any of these entries are skipped.
    pub exclude: ExcludeList,
    /// Skip hidden files and directories.
    pub skip_hidden: bool,
    /// Honor .gitignore, .ignore and git exclude files.
    pub git_ignore: bool,
    /// Follow symbolic links.
    pub follow_links: bool,
}

/// A regular file found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size: u64,
    /// Depth below the walk root (the root itself is 0).
    pub depth: usize,
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    /// Files and directories pruned by the exclusion list.
    pub excluded: usize,
    /// Entries that could not be read.
    pub errors: usize,
}

/// Repository metadata directory skipped on every walk.
const GIT_DIR: &str = ".git";

/// Lexically ordered file walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and collect every regular file that is not excluded.
    ///
    /// Unreadable entries are logged and counted, not fatal.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let excluded = Arc::new(AtomicUsize::new(0));
        let mut stats = WalkStats::default();
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(self.config.skip_hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .ignore(self.config.git_ignore)
            .parents(self.config.git_ignore)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        let exclude = self.config.exclude.clone();
        let counter = Arc::clone(&excluded);
        let base = root.to_path_buf();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.file_type().is_some_and(|t| t.is_dir()) && entry.file_name() == GIT_DIR {
                return false;
            }
            let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
            if exclude.is_excluded(relative) {
                counter.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            true
        });

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("skipping entry: {}", err);
                    stats.errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            tracing::trace!("found {}", entry.path().display());
            files.push(WalkedFile {
                path: entry.path().to_path_buf(),
                size,
                depth: entry.depth(),
            });
        }

        stats.files_found = files.len();
        stats.excluded = excluded.load(Ordering::Relaxed);
        tracing::debug!(
            "walked {}: {} files, {} excluded, {} errors",
            root.display(),
            stats.files_found,
            stats.excluded,
            stats.errors
        );
        (files, stats)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
