// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Behavioral specs for `phrasecheck.toml` handling.

use crate::prelude::*;

#[test]
fn unsupported_version_exits_2() {
    let project = Project::empty();
    project.file("phrasecheck.toml", "version = 9\n");
    project.file("patterns.txt", "privileged\n");
    project.file("a.txt", "privileged\n");

    phrasecheck_cmd()
        .current_dir(project.path())
        .args(["check", "patterns.txt", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

#[test]
fn unknown_keys_warn_but_run() {
    let project = Project::empty();
    project.file("phrasecheck.toml", "version = 1\n[check]\nmatch_all = true\n");
    project.file("patterns.txt", "privileged\n");
    project.file("a.txt", "privileged\n");

    phrasecheck_cmd()
        .current_dir(project.path())
        .args(["check", "patterns.txt", "a.txt"])
        .assert()
        .success()
        .stderr(predicates::str::contains("check.match_all"));
}

#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    project.file("strict.toml", "[check]\nmatch_one = true\n");
    project.file("patterns.txt", "alpha\nbeta\n");
    project.file("a.txt", "alpha beta\n");

    let out = stdout_of(
        phrasecheck_cmd()
            .current_dir(project.path())
            .args(["-C", "strict.toml", "check", "patterns.txt", "a.txt"]),
    );
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn config_from_environment() {
    let project = Project::empty();
    project.file("strict.toml", "[check]\nmatch_one = true\n");
    project.file("patterns.txt", "alpha\nbeta\n");
    project.file("a.txt", "alpha beta\n");

    let out = stdout_of(
        phrasecheck_cmd()
            .current_dir(project.path())
            .env("PHRASECHECK_CONFIG", "strict.toml")
            .args(["check", "patterns.txt", "a.txt"]),
    );
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn missing_explicit_config_exits_2() {
    phrasecheck_cmd()
        .args(["-C", "absent.toml", "check", "patterns.txt", "letters/lunch.txt"])
        .assert()
        .code(2);
}

#[test]
fn verbose_logs_to_stderr() {
    phrasecheck_cmd()
        .args(["-v", "check", "patterns.txt", "letters/memo.txt"])
        .assert()
        .success()
        .stderr(predicates::str::contains("loaded 5 patterns"));
}
