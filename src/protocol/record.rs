//! String record format
//!
//! Layout:
//! ┌──────────────────────────────┬───────────┬──────────────┬───────────┐
//! │ Record 0 (UTF-16LE, N units) │ 0x00 0x00 │ Record 1 ... │ 0x00 0x00 │
//! └──────────────────────────────┴───────────┴──────────────┴───────────┘
//!
//! The final delimiter is optional on read and always written on encode.

use crate::error::{Error, Result};

/// Ukuran satu code unit dalam bytes
pub const BYTES_PER_CODE_UNIT: usize = 2;

/// Record terminator: a zero code unit
pub const DELIMITER: [u8; BYTES_PER_CODE_UNIT] = [0x00, 0x00];

/// True when the code unit at `pos` is a delimiter.
#[inline(always)]
pub(crate) fn is_delimiter(buf: &[u8], pos: usize) -> bool {
    buf[pos] == 0 && buf[pos + 1] == 0
}

/// Decode one record's bytes into text.
///
/// `offset` is only used for error reporting. Unpaired surrogates become
/// U+FFFD; content is not otherwise validated.
pub(crate) fn decode_record(bytes: &[u8], offset: usize) -> Result<String> {
    if bytes.len() % BYTES_PER_CODE_UNIT != 0 {
        return Err(Error::MalformedSegment {
            offset,
            len: bytes.len(),
        });
    }

    let units: Vec<u16> = bytes
        .chunks_exact(BYTES_PER_CODE_UNIT)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(String::from_utf16_lossy(&units))
}

/// Append `text` as UTF-16LE code units followed by the delimiter.
///
/// `index` is the position of `text` in its collection, reported when the
/// text contains NUL (it would read back as a record boundary).
#[inline]
pub(crate) fn encode_record(out: &mut Vec<u8>, text: &str, index: usize) -> Result<()> {
    let start = out.len();
    for unit in text.encode_utf16() {
        if unit == 0 {
            out.truncate(start);
            return Err(Error::Encoding { index });
        }
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out.extend_from_slice(&DELIMITER);
    Ok(())
}

/// Encoded size of `text` including its delimiter.
#[inline]
pub(crate) fn encoded_len(text: &str) -> usize {
    (text.encode_utf16().count() + 1) * BYTES_PER_CODE_UNIT
}
