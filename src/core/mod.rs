//! Core module: File Access dan Editing Session
//!
//! Prinsip desain:
//! - Whole-file I/O: baca semua dulu, tulis semua sekaligus
//! - Atomic replace: file lama utuh kalau write gagal
//! - Explicit state: path dan dirty flag milik `Session`, bukan codec

mod comparison;
mod session;
mod strings_file;

pub use comparison::{pair_strings, ComparisonSet, StringComparison};
pub use session::Session;
pub use strings_file::{read_strings_file, write_strings_file, StringsFile};
