//! String Encoder/Decoder
//!
//! `Encoder` menulis records ke buffer yang bisa di-reuse.
//! `Decoder` membaca records langsung dari buffer (zero-copy) sebagai segments.

use log::{debug, trace};

use super::record::{decode_record, encode_record, encoded_len, is_delimiter, BYTES_PER_CODE_UNIT};
use crate::error::{Error, Result};

/// Reusable encoder buffer
///
/// Records are appended with their delimiter; `reset` keeps the allocation.
#[derive(Debug, Default)]
pub struct Encoder {
    buffer: Vec<u8>,
    records: usize,
}

impl Encoder {
    /// Membuat encoder dengan kapasitas awal tertentu
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            records: 0,
        }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.records = 0;
    }

    /// Append one string and its delimiter.
    ///
    /// On `Error::Encoding` nothing is appended. The reported index is the
    /// record's position since the last `reset`.
    pub fn push(&mut self, text: &str) -> Result<()> {
        self.buffer.reserve(encoded_len(text));
        encode_record(&mut self.buffer, text, self.records)?;
        self.records += 1;
        Ok(())
    }

    /// Append every string in order.
    pub fn extend<I, S>(&mut self, strings: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in strings {
            self.push(text.as_ref())?;
        }
        Ok(())
    }

    /// Get current buffer content
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of records written since the last reset
    #[inline(always)]
    pub fn records(&self) -> usize {
        self.records
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Serialize `strings` in order, each followed by `0x00 0x00`.
///
/// The last string is terminated too.
pub fn encode<I, S>(strings: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut encoder = Encoder::default();
    encoder.extend(strings)?;
    trace!(
        "encoded {} strings into {} bytes",
        encoder.records(),
        encoder.len()
    );
    Ok(encoder.into_bytes())
}

/// One raw record borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Record bytes, delimiter excluded
    pub bytes: &'a [u8],
    /// Byte offset of the record in the buffer
    pub offset: usize,
    /// False only for a trailing record with no delimiter after it
    pub terminated: bool,
}

impl Segment<'_> {
    /// Decode the record into text.
    pub fn to_text(&self) -> Result<String> {
        decode_record(self.bytes, self.offset)
    }

    /// Number of UTF-16 code units in the record
    #[inline(always)]
    pub fn code_units(&self) -> usize {
        self.bytes.len() / BYTES_PER_CODE_UNIT
    }
}

/// Zero-copy record decoder
///
/// Iterates the records of a buffer in order. Delimiters are only matched
/// at even offsets, so a zero high byte followed by a zero low byte of the
/// next unit is never mistaken for one.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buffer: &'a [u8],
    segment_start: usize,
    read_pos: usize,
}

impl<'a> Decoder<'a> {
    /// Membuat decoder dari buffer
    ///
    /// Fails with `MalformedInput` when the length is odd.
    pub fn new(buffer: &'a [u8]) -> Result<Self> {
        if buffer.len() % BYTES_PER_CODE_UNIT != 0 {
            return Err(Error::MalformedInput { len: buffer.len() });
        }

        Ok(Self {
            buffer,
            segment_start: 0,
            read_pos: 0,
        })
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.segment_start)
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.read_pos < self.buffer.len() {
            let pos = self.read_pos;
            self.read_pos += BYTES_PER_CODE_UNIT;

            if is_delimiter(self.buffer, pos) {
                let segment = Segment {
                    bytes: &self.buffer[self.segment_start..pos],
                    offset: self.segment_start,
                    terminated: true,
                };
                self.segment_start = self.read_pos;
                return Some(segment);
            }
        }

        // Trailing record without delimiter
        if self.segment_start < self.buffer.len() {
            let segment = Segment {
                bytes: &self.buffer[self.segment_start..],
                offset: self.segment_start,
                terminated: false,
            };
            self.segment_start = self.buffer.len();
            return Some(segment);
        }

        None
    }
}

/// Split `buffer` into strings on `0x00 0x00` delimiters.
///
/// An empty buffer gives no strings; a trailing record without a delimiter
/// is kept.
pub fn decode(buffer: &[u8]) -> Result<Vec<String>> {
    let mut strings = Vec::new();

    for segment in Decoder::new(buffer)? {
        if !segment.terminated {
            debug!(
                "unterminated string at byte offset {} ({} code units)",
                segment.offset,
                segment.code_units()
            );
        }
        strings.push(segment.to_text()?);
    }

    trace!("decoded {} strings from {} bytes", strings.len(), buffer.len());
    Ok(strings)
}
