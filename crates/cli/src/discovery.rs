// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Config file discovery.
//!
//! Searches from a starting directory upward for `phrasecheck.toml`,
//! stopping at the enclosing git repository root.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE_NAME;
use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Find `phrasecheck.toml` in `start_dir` or one of its ancestors.
///
/// The search ends at the first directory containing `.git`, or at the
/// filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Load the config at `explicit`, or the one found from `start_dir`.
///
/// Without either, the built-in defaults apply. An explicit path that does
/// not exist is a configuration error.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => match find_config(start_dir) {
            Some(path) => path,
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(Config::default());
            }
        },
    };
    tracing::debug!("using config {}", path.display());
    config::load_with_warnings(&path)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
