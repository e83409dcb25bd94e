// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Position-aware word tokenizer.
//!
//! Splits text into whitespace-delimited words, recording for each word the
//! zero-based line it appears on and its running ordinal across the whole
//! input. Line feeds are boundaries that also advance the line counter;
//! every other whitespace character is a plain boundary.
//!
//! ```
//! let tokens = phrasecheck::tokenize("this is a corpus\n\tof words\r\n");
//! assert_eq!(tokens[4].value, "of");
//! assert_eq!(tokens[4].line_number, 1);
//! assert_eq!(tokens[4].word_number, 4);
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Read};

use serde::Serialize;

use crate::error::{Error, Result};

/// One word-like unit of text with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The word exactly as it appears in the text.
    pub value: String,
    /// Number of line feeds consumed before this word.
    pub line_number: usize,
    /// Ordinal of this word in the whole input.
    pub word_number: usize,
}

/// Character classes seen by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Newline,
    Space,
    Content,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c == '\n' {
            CharClass::Newline
        } else if c.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Content
        }
    }
}

/// Scanner state carried across chunks of input.
///
/// Chunks must end on character boundaries, which `&str` guarantees.
#[derive(Debug, Default)]
struct Scanner {
    line: usize,
    word: usize,
    current: String,
}

impl Scanner {
    fn feed<E: Extend<Token>>(&mut self, text: &str, out: &mut E) {
        for c in text.chars() {
            match CharClass::of(c) {
                CharClass::Content => self.current.push(c),
                CharClass::Space => self.flush(out),
                CharClass::Newline => {
                    self.flush(out);
                    self.line += 1;
                }
            }
        }
    }

    /// Emit the word in progress, if any.
    fn flush<E: Extend<Token>>(&mut self, out: &mut E) {
        if self.current.is_empty() {
            return;
        }
        out.extend(Some(Token {
            value: std::mem::take(&mut self.current),
            line_number: self.line,
            word_number: self.word,
        }));
        self.word += 1;
    }
}

/// Tokenize in-memory text.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut scanner = Scanner::default();
    let mut tokens = Vec::new();
    scanner.feed(text, &mut tokens);
    scanner.flush(&mut tokens);
    tokens
}

/// Tokenize a stream, collecting every token.
///
/// Fails with [`Error::Read`] if the stream errors or is not valid UTF-8.
pub fn tokenize_reader<R: Read>(reader: R) -> Result<Vec<Token>> {
    TokenReader::new(BufReader::new(reader)).collect()
}

/// Lazy tokenizer over a buffered stream.
///
/// Input is pulled one line at a time, so a multi-byte character is never
/// split between reads. After the first error the iterator is exhausted.
pub struct TokenReader<R> {
    reader: R,
    scanner: Scanner,
    pending: VecDeque<Token>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            scanner: Scanner::default(),
            pending: VecDeque::new(),
            buf: Vec::new(),
            done: false,
        }
    }

    /// Read the next line into the scanner. Returns false at end of stream.
    fn fill(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf).map_err(Error::Read)?;
        if n == 0 {
            self.scanner.flush(&mut self.pending);
            return Ok(false);
        }
        let text = std::str::from_utf8(&self.buf)
            .map_err(|e| Error::Read(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        self.scanner.feed(text, &mut self.pending);
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TokenReader<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.fill() {
                Ok(true) => {}
                Ok(false) => self.done = true,
                Err(e) => {
                    self.done = true;
                    self.pending.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
