// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Optional `phrasecheck.toml` configuration.
//!
//! ```toml
//! version = 1
//!
//! [check]
//! match_one = false
//! exclude = ["node_modules", "drafts"]
//!
//! [walk]
//! max_depth = 100
//! skip_hidden = false
//! git_ignore = false
//! follow_links = false
//! ```
//!
//! Command-line flags take precedence over values loaded here.

pub mod defaults;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::exclude::ExcludeList;
use crate::walker::WalkerConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config schema version.
    pub version: i64,

    /// Pattern checking settings.
    pub check: CheckConfig,

    /// Directory walk settings.
    pub walk: WalkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            check: CheckConfig::default(),
            walk: WalkConfig::default(),
        }
    }
}

/// `[check]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Stop evaluating patterns after the first match in each document.
    pub match_one: bool,

    /// Exclusion entries added to any exclusion file given on the command line.
    pub exclude: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { match_one: false, exclude: Vec::new() }
    }
}

/// `[walk]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Maximum directory depth to traverse.
    pub max_depth: usize,

    /// Skip hidden files and directories.
    pub skip_hidden: bool,

    /// Honor .gitignore and related ignore files.
    pub git_ignore: bool,

    /// Follow symbolic links.
    pub follow_links: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::walk::MAX_DEPTH,
            skip_hidden: false,
            git_ignore: false,
            follow_links: false,
        }
    }
}

impl Config {
    /// Walker settings for this config.
    ///
    /// `exclude_file` entries are added to `check.exclude`; `max_depth`
    /// overrides `walk.max_depth` when given.
    pub fn walker_config(
        &self,
        exclude_file: Option<&Path>,
        max_depth: Option<usize>,
    ) -> Result<WalkerConfig> {
        let mut exclude = ExcludeList::new(&self.check.exclude);
        if let Some(path) = exclude_file {
            exclude.extend(ExcludeList::load(path)?.entries());
        }
        Ok(WalkerConfig {
            max_depth: Some(max_depth.unwrap_or(self.walk.max_depth)),
            exclude,
            skip_hidden: self.walk.skip_hidden,
            git_ignore: self.walk.git_ignore,
            follow_links: self.walk.follow_links,
        })
    }
}

const KNOWN_TOP_LEVEL: &[&str] = &["version", "check", "walk"];
const KNOWN_CHECK: &[&str] = &["match_one", "exclude"];
const KNOWN_WALK: &[&str] = &["max_depth", "skip_hidden", "git_ignore", "follow_links"];

/// Parse config content. `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config { path: path.to_path_buf(), message };

    let config: Config = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(config_error(format!("unsupported config version {}", config.version)));
    }

    Ok(config)
}

/// Load a config file, logging a warning for every unrecognized key.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    for key in unknown_keys(&content) {
        tracing::warn!("{}: unknown config key `{}`", path.display(), key);
    }
    parse(&content, path)
}

/// Dotted names of keys this version does not understand.
fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = toml::from_str::<toml::Table>(content) else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        let known_children = match key.as_str() {
            "check" => KNOWN_CHECK,
            "walk" => KNOWN_WALK,
            _ => {
                if !KNOWN_TOP_LEVEL.contains(&key.as_str()) {
                    unknown.push(key.clone());
                }
                continue;
            }
        };
        if let toml::Value::Table(section) = value {
            for child in section.keys() {
                if !known_children.contains(&child.as_str()) {
                    unknown.push(format!("{key}.{child}"));
                }
            }
        }
    }
    unknown
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
