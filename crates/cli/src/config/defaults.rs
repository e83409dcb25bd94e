// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Caltech Library

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "phrasecheck.toml";

/// The only config schema version understood.
pub const CONFIG_VERSION: i64 = 1;

/// Default walk settings.
pub mod walk {
    /// Default maximum directory depth (100).
    pub const MAX_DEPTH: usize = 100;
}
