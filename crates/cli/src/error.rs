// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Error types and process exit codes.

use std::io;
use std::path::PathBuf;

use crate::pattern::PatternError;

/// Errors surfaced by the library.
///
/// Every variant is returned to the immediate caller unchanged; nothing
/// in the library retries or logs on failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text source could not be fully consumed.
    #[error("scanning error: {0}")]
    Read(#[source] io::Error),

    /// A pattern line violates the grammar.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A pattern file contained a malformed line.
    #[error("{}:{line}: {source}", path.display())]
    PatternFile {
        path: PathBuf,
        line: usize,
        #[source]
        source: PatternError,
    },

    /// A file could not be opened or read.
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is invalid.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    /// Whether this error came from user-supplied configuration or patterns
    /// rather than from reading documents.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Pattern(_) | Error::PatternFile { .. } | Error::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed (with or without matches).
    Success = 0,
    /// A document or directory could not be processed.
    Failure = 1,
    /// Bad configuration, pattern file or arguments.
    ConfigError = 2,
}

impl ExitCode {
    /// Pick the exit code for an error bubbled up to `main`.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<Error>() {
            Some(e) if e.is_config() => ExitCode::ConfigError,
            _ => ExitCode::Failure,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
