//! langdat - Language String File Codec
//!
//! Arsitektur:
//! - Protocol: UTF-16LE records, each closed by a `0x00 0x00` code unit
//! - Core: whole-file reads (mmap) and atomic whole-file writes
//! - Session: headless editor state pairing editable and reference strings
//!
//! ```
//! use langdat::protocol::{decode, encode};
//!
//! let bytes = encode(&["Hello", "World"]).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), vec!["Hello", "World"]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::config::{StringsFileConfig, WriteMode};
pub use crate::core::{
    pair_strings, read_strings_file, write_strings_file, ComparisonSet, Session,
    StringComparison, StringsFile,
};
pub use crate::error::{Error, Result};
