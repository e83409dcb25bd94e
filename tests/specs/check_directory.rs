// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Behavioral specs for `phrasecheck check-directory`.

use crate::prelude::*;

const HEADER: &str = "\"filename\",\"line no\",\"pattern\",\"phrase\"\n";

#[test]
fn walks_in_lexical_order() {
    let out = stdout_of(phrasecheck_cmd().args(["check-directory", "patterns.txt", "letters"]));
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows, vec![
        "\"filename\",\"line no\",\"pattern\",\"phrase\"",
        "\"letters/drafts/old.txt\",\"0\",\"attorney client\",\"attorney\"",
        "\"letters/memo.txt\",\"1\",\"privileged\",\"privileged\"",
        "\"letters/memo.txt\",\"3\",\"Attorney*\",\"Attorney\"",
        "\"letters/memo.txt\",\"1\",\"*confiden*\",\"confidential.\"",
        "\"letters/memo.txt\",\"2\",\"legal w/3 advice\",\"legal\"",
    ]);
}

#[test]
fn exclude_list_prunes_matching_paths() {
    let out = stdout_of(phrasecheck_cmd().args([
        "check-directory",
        "patterns.txt",
        "letters",
        "exclude.txt",
    ]));
    assert!(out.starts_with(HEADER));
    assert!(!out.contains("drafts"));
    assert_eq!(out.lines().count(), 5);
}

#[test]
fn max_depth_limits_walk() {
    let out = stdout_of(phrasecheck_cmd().args([
        "check-directory",
        "--max-depth",
        "1",
        "patterns.txt",
        "letters",
    ]));
    assert!(!out.contains("drafts"));
    assert!(out.contains("letters/memo.txt"));
}

#[test]
fn match_one_applies_per_document() {
    let out =
        stdout_of(phrasecheck_cmd().args(["check-directory", "-1", "patterns.txt", "letters"]));
    similar_asserts::assert_eq!(
        out,
        format!(
            "{HEADER}\
             \"letters/drafts/old.txt\",\"0\",\"attorney client\",\"attorney\"\n\
             \"letters/memo.txt\",\"1\",\"privileged\",\"privileged\"\n"
        )
    );
}

#[test]
fn config_exclude_entries_apply() {
    let project = Project::empty();
    project.file("phrasecheck.toml", "[check]\nexclude = [\"skip\"]\n");
    project.file("patterns.txt", "privileged\n");
    project.file("docs/keep.txt", "privileged\n");
    project.file("docs/skip/hidden.txt", "privileged\n");

    let out = stdout_of(
        phrasecheck_cmd()
            .current_dir(project.path())
            .args(["check-directory", "patterns.txt", "docs"]),
    );
    assert!(out.contains("docs/keep.txt"));
    assert!(!out.contains("hidden.txt"));
}

#[test]
fn config_match_one_applies() {
    let project = Project::empty();
    project.file("phrasecheck.toml", "[check]\nmatch_one = true\n");
    project.file("patterns.txt", "alpha\nbeta\n");
    project.file("docs/a.txt", "alpha beta\n");

    let out = stdout_of(
        phrasecheck_cmd()
            .current_dir(project.path())
            .args(["check-directory", "patterns.txt", "docs"]),
    );
    assert!(out.contains("\"alpha\""));
    assert!(!out.contains("\"beta\""));
}

#[test]
fn not_a_directory_exits_1() {
    phrasecheck_cmd()
        .args(["check-directory", "patterns.txt", "letters/memo.txt"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("not a directory"));
}

#[test]
fn missing_exclude_list_exits_1() {
    phrasecheck_cmd()
        .args(["check-directory", "patterns.txt", "letters", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("nope.txt"));
}
