//! Protocol Layer: NULL-Delimited UTF-16LE Strings
//!
//! Prinsip desain:
//! - Flat Binary: no header, no length prefix, only records and delimiters
//! - Fixed-width code units: 2 bytes, little-endian
//! - Pure transforms: bytes in, strings out (and back), no shared state

mod encoder;
mod record;

#[cfg(test)]
mod proptest_tests;

pub use encoder::{decode, encode, Decoder, Encoder, Segment};
pub use record::{BYTES_PER_CODE_UNIT, DELIMITER};
