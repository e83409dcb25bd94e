// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! MIME type lookup by file extension.
//!
//! Extensions are taken from the last `.` in a file's base name, so a
//! dotfile such as `.bashrc` is its own extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use phf::{Map, phf_map};
use serde::Serialize;

use crate::walker::WalkedFile;

/// Reported for extensions missing from the table.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Lowercase extension (with leading dot) to MIME type.
static EXTENSION_TO_MIME: Map<&'static str, &'static str> = phf_map! {
    // Text and Code
    ".txt" => "text/plain",
    ".csv" => "text/csv",
    ".html" => "text/html",
    ".htm" => "text/html",
    ".css" => "text/css",
    ".js" => "application/javascript",
    ".json" => "application/json",
    ".xml" => "application/xml",
    ".go" => "text/x-go",
    ".py" => "text/x-python",
    ".java" => "text/x-java-source",
    ".c" => "text/x-c",
    ".cpp" => "text/x-c",
    ".h" => "text/x-c",
    ".hpp" => "text/x-c",
    ".sh" => "text/x-sh",
    ".md" => "text/markdown",
    ".rtf" => "application/rtf",
    ".rs" => "text/x-rust",
    ".toml" => "application/toml",
    ".yaml" => "application/yaml",
    ".yml" => "application/yaml",
    ".eml" => "message/rfc822",

    // Archives and Compressed
    ".zip" => "application/zip",
    ".tar" => "application/x-tar",
    ".gz" => "application/gzip",
    ".rar" => "application/x-rar-compressed",
    ".7z" => "application/x-7z-compressed",

    // Images
    ".png" => "image/png",
    ".jpg" => "image/jpeg",
    ".jpeg" => "image/jpeg",
    ".gif" => "image/gif",
    ".bmp" => "image/bmp",
    ".svg" => "image/svg+xml",
    ".tiff" => "image/tiff",
    ".webp" => "image/webp",
    ".ico" => "image/x-icon",

    // Documents
    ".pdf" => "application/pdf",
    ".doc" => "application/msword",
    ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ".xls" => "application/vnd.ms-excel",
    ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ".ppt" => "application/vnd.ms-powerpoint",
    ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ".odt" => "application/vnd.oasis.opendocument.text",
    ".ods" => "application/vnd.oasis.opendocument.spreadsheet",
    ".odp" => "application/vnd.oasis.opendocument.presentation",

    // Microsoft Office (Legacy and Open XML)
    ".dot" => "application/msword",
    ".dotx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
    ".xlt" => "application/vnd.ms-excel",
    ".xltx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
    ".pot" => "application/vnd.ms-powerpoint",
    ".potx" => "application/vnd.openxmlformats-officedocument.presentationml.template",
    ".pps" => "application/vnd.ms-powerpoint",
    ".ppsx" => "application/vnd.openxmlformats-officedocument.presentationml.slideshow",
    ".pub" => "application/x-mspublisher",
    ".vsdx" => "application/vnd.ms-visio.drawing.main+xml",
    ".vsd" => "application/vnd.visio",
    ".msg" => "application/vnd.ms-outlook",

    // macOS and Apple
    ".pages" => "application/x-iwork-pages-sffpages",
    ".numbers" => "application/x-iwork-numbers-sffnumbers",
    ".key" => "application/x-iwork-keynote-sffkey",
    ".dmg" => "application/x-apple-diskimage",
    ".app" => "application/x-executable",
    ".pkg" => "application/x-newton-compatible-pkg",
    ".plist" => "application/x-plist",

    // Audio
    ".mp3" => "audio/mpeg",
    ".wav" => "audio/wav",
    ".aac" => "audio/aac",
    ".m4a" => "audio/mp4",
    ".ogg" => "audio/ogg",
    ".flac" => "audio/flac",

    // Video
    ".mp4" => "video/mp4",
    ".mov" => "video/quicktime",
    ".avi" => "video/x-msvideo",
    ".wmv" => "video/x-ms-wmv",
    ".mkv" => "video/x-matroska",
    ".webm" => "video/webm",

    // Fonts
    ".woff" => "font/woff",
    ".woff2" => "font/woff2",
    ".ttf" => "font/ttf",
    ".otf" => "font/otf",

    // Executables and Binaries
    ".exe" => "application/x-msdownload",
    ".dll" => "application/x-msdownload",
    ".msi" => "application/x-msi",
    ".bat" => "application/x-msdos-program",

    // Data and Config
    ".ini" => "text/plain",
    ".conf" => "text/plain",
    ".log" => "text/plain",
    ".sql" => "application/sql",
    ".db" => "application/x-sqlite3",
    ".sqlite" => "application/x-sqlite3",

    // Web and Network
    ".wasm" => "application/wasm",
    ".jsonld" => "application/ld+json",
    ".rss" => "application/rss+xml",
    ".atom" => "application/atom+xml",
};

/// A walked file and its likely MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileType {
    pub path: PathBuf,
    pub mime_type: &'static str,
}

/// Number of files sharing an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTypeCount {
    /// Extension as written, including the leading dot; empty if none.
    pub extension: String,
    /// Empty when the extension is not in the table.
    pub mime_type: &'static str,
    pub count: usize,
}

/// Extension of `path`: everything from the last `.` of its base name.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

/// Look up a known extension, case-insensitively.
pub fn lookup_extension(extension: &str) -> Option<&'static str> {
    EXTENSION_TO_MIME.get(extension.to_ascii_lowercase().as_str()).copied()
}

/// Likely MIME type of `path`, or [`DEFAULT_MIME_TYPE`].
pub fn mime_type_for(path: &Path) -> &'static str {
    lookup_extension(&extension_of(path)).unwrap_or(DEFAULT_MIME_TYPE)
}

/// MIME type of every walked file, in walk order.
pub fn file_types(files: &[WalkedFile]) -> Vec<FileType> {
    files
        .iter()
        .map(|f| FileType { path: f.path.clone(), mime_type: mime_type_for(&f.path) })
        .collect()
}

/// Tally walked files per extension, sorted by extension.
pub fn file_type_counts(files: &[WalkedFile]) -> Vec<FileTypeCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for file in files {
        *counts.entry(extension_of(&file.path)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(extension, count)| FileTypeCount {
            mime_type: lookup_extension(&extension).unwrap_or(""),
            extension,
            count,
        })
        .collect()
}

#[cfg(test)]
#[path = "filetypes_tests.rs"]
mod tests;
