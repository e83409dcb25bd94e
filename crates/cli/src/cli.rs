// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Scan documents for keyword and proximity phrases
#[derive(Parser)]
#[command(name = "phrasecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PHRASECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check documents against a pattern file
    Check(CheckArgs),
    /// Check every file under a directory against a pattern file
    CheckDirectory(CheckDirectoryArgs),
    /// List the tokens of one or more documents
    Tokens(TokensArgs),
    /// List the MIME type of every file under a directory
    Mimetypes(WalkArgs),
    /// Count files under a directory by extension
    Filetypes(WalkArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Pattern file, one pattern per line
    #[arg(value_name = "PATTERN_FILE")]
    pub patterns: PathBuf,

    /// Documents to check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Stop at the first pattern that matches each document
    #[arg(short = '1', long)]
    pub match_one: bool,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CheckDirectoryArgs {
    /// Pattern file, one pattern per line
    #[arg(value_name = "PATTERN_FILE")]
    pub patterns: PathBuf,

    /// Directory to walk
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// File listing path fragments to skip, one per line
    #[arg(value_name = "EXCLUDE_LIST")]
    pub exclude: Option<PathBuf>,

    /// Stop at the first pattern that matches each document
    #[arg(short = '1', long)]
    pub match_one: bool,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub output: OutputFormat,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(clap::Args)]
pub struct TokensArgs {
    /// Documents to tokenize
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct WalkArgs {
    /// Directory to walk
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// File listing path fragments to skip, one per line
    #[arg(value_name = "EXCLUDE_LIST")]
    pub exclude: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub output: OutputFormat,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
