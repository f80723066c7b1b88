//! File access configuration.

use std::env;

use log::warn;

/// Environment variable overriding [`StringsFileConfig::max_file_size`].
pub const MAX_SIZE_ENV: &str = "LANGDAT_MAX_SIZE";

/// Largest file read by default: the legacy tools addressed files with a
/// signed 32-bit length.
pub const DEFAULT_MAX_FILE_SIZE: u64 = i32::MAX as u64;

/// How a strings file is replaced on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a sibling temp file, sync it, then rename over the target.
    /// A failed write leaves the previous file untouched.
    #[default]
    Atomic,
    /// Create/truncate the target and write in place. A failed write can
    /// leave the target empty or partially written.
    Truncate,
}

/// Configuration for [`crate::core::StringsFile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsFileConfig {
    pub max_file_size: u64,
    pub write_mode: WriteMode,
}

impl Default for StringsFileConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            write_mode: WriteMode::Atomic,
        }
    }
}

impl StringsFileConfig {
    /// Default config with `LANGDAT_MAX_SIZE` applied when it parses.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var(MAX_SIZE_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(limit) => config.max_file_size = limit,
                Err(_) => warn!("ignoring {MAX_SIZE_ENV}={raw:?}: not a byte count"),
            }
        }
        config
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}
