// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Behavioral specs for `phrasecheck check`.

use crate::prelude::*;

const MEMO_MATCHES: &str = "\
\"filename\",\"line no\",\"pattern\",\"phrase\"
\"letters/memo.txt\",\"1\",\"privileged\",\"privileged\"
\"letters/memo.txt\",\"3\",\"Attorney*\",\"Attorney\"
\"letters/memo.txt\",\"1\",\"*confiden*\",\"confidential.\"
\"letters/memo.txt\",\"2\",\"legal w/3 advice\",\"legal\"
";

#[test]
fn reports_matches_in_pattern_order() {
    let out = stdout_of(phrasecheck_cmd().args(["check", "patterns.txt", "letters/memo.txt"]));
    similar_asserts::assert_eq!(out, MEMO_MATCHES);
}

#[test]
fn match_one_stops_at_first_matching_pattern() {
    let out =
        stdout_of(phrasecheck_cmd().args(["check", "-1", "patterns.txt", "letters/memo.txt"]));
    similar_asserts::assert_eq!(
        out,
        "\"filename\",\"line no\",\"pattern\",\"phrase\"\n\
         \"letters/memo.txt\",\"1\",\"privileged\",\"privileged\"\n"
    );
}

#[test]
fn no_matches_prints_header_only() {
    phrasecheck_cmd()
        .args(["check", "patterns.txt", "letters/lunch.txt"])
        .assert()
        .success()
        .stdout("\"filename\",\"line no\",\"pattern\",\"phrase\"\n");
}

#[test]
fn multiple_documents_in_argument_order() {
    let out = stdout_of(phrasecheck_cmd().args([
        "check",
        "patterns.txt",
        "letters/drafts/old.txt",
        "letters/lunch.txt",
    ]));
    similar_asserts::assert_eq!(
        out,
        "\"filename\",\"line no\",\"pattern\",\"phrase\"\n\
         \"letters/drafts/old.txt\",\"0\",\"attorney client\",\"attorney\"\n"
    );
}

#[test]
fn json_output() {
    let out = stdout_of(phrasecheck_cmd().args([
        "check",
        "-o",
        "json",
        "patterns.txt",
        "letters/drafts/old.txt",
    ]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "file": "letters/drafts/old.txt",
            "text": "attorney",
            "pattern": "attorney client",
            "kind": "proximity",
            "line": 0,
            "word": 2
        }])
    );
}

#[test]
fn malformed_pattern_file_exits_2() {
    phrasecheck_cmd()
        .args(["check", "bad-patterns.txt", "letters/memo.txt"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("bad-patterns.txt:2"))
        .stderr(predicates::str::contains("invalid max distance"));
}

#[test]
fn missing_pattern_file_exits_1() {
    phrasecheck_cmd()
        .args(["check", "no-such-patterns.txt", "letters/memo.txt"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unable to read"));
}

#[test]
fn missing_document_exits_1() {
    phrasecheck_cmd()
        .args(["check", "patterns.txt", "letters/missing.txt"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("letters/missing.txt"));
}

#[test]
fn document_with_invalid_utf8_is_still_checked() {
    let project = Project::empty();
    project.file("patterns.txt", "privileged\n");
    std::fs::write(project.path().join("blob.bin"), b"\xff\xfe privileged\n").unwrap();

    phrasecheck_cmd()
        .current_dir(project.path())
        .args(["check", "patterns.txt", "blob.bin"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"blob.bin\",\"0\",\"privileged\",\"privileged\""));
}
