// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command for the phrasecheck binary, run from the fixtures root
/// with logging filters cleared.
pub fn phrasecheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("phrasecheck"));
    cmd.current_dir(fixtures_root())
        .env_remove("PHRASECHECK_LOG")
        .env_remove("PHRASECHECK_CONFIG");
    cmd
}

/// Root of the checked-in fixtures.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
}

/// Path to a named fixture file or directory.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    fixtures_root().join(name)
}

/// Scratch directory for specs that need their own files.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// An empty directory marked as a git root so config discovery stops here.
    pub fn empty() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, path: &str, content: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
        full
    }
}

/// Stdout of a successful run as a string.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}
