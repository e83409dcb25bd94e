// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Document reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for scanning
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::borrow::Cow;
use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Raw content of a document, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;

        if meta.len() < MMAP_THRESHOLD {
            let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
            Ok(FileContent::Owned(bytes))
        } else {
            let file = File::open(path).map_err(|e| Error::io(path, e))?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and stale data on concurrent modification is acceptable for scanning.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::io(path, e))?;
            Ok(FileContent::Mapped(mmap))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes.as_slice(),
            FileContent::Mapped(mmap) => &mmap[..],
        }
    }

    /// Content as text. Invalid UTF-8 sequences become U+FFFD, so binary
    /// files still tokenize instead of failing a directory run.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Whether the content is valid UTF-8.
    pub fn is_utf8(&self) -> bool {
        std::str::from_utf8(self.as_bytes()).is_ok()
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
