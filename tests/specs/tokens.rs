// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Behavioral specs for `phrasecheck tokens`.

use crate::prelude::*;

#[test]
fn lists_tokens_with_positions() {
    let out = stdout_of(phrasecheck_cmd().args(["tokens", "letters/lunch.txt"]));
    similar_asserts::assert_eq!(
        out,
        "\"filename\",\"token\",\"word no\",\"line no\"\n\
         \"letters/lunch.txt\",\"Lunch\",\"0\",\"0\"\n\
         \"letters/lunch.txt\",\"at\",\"1\",\"0\"\n\
         \"letters/lunch.txt\",\"noon\",\"2\",\"0\"\n\
         \"letters/lunch.txt\",\"on\",\"3\",\"0\"\n\
         \"letters/lunch.txt\",\"Friday.\",\"4\",\"0\"\n"
    );
}

#[test]
fn line_numbers_advance_across_lines() {
    let out = stdout_of(phrasecheck_cmd().args(["tokens", "-o", "json", "letters/memo.txt"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 20);
    assert_eq!(tokens[17]["value"], "Attorney");
    assert_eq!(tokens[17]["line_number"], 3);
    assert_eq!(tokens[17]["word_number"], 17);
}

#[test]
fn missing_file_exits_1() {
    phrasecheck_cmd().args(["tokens", "letters/none.txt"]).assert().code(1);
}
