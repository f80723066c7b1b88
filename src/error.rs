//! Error taxonomy untuk codec, file access dan session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible langdat operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length is not a whole number of code units.
    #[error("malformed input: {len} bytes is not a whole number of 2-byte code units")]
    MalformedInput { len: usize },

    /// A record between delimiters has an odd byte length.
    #[error("malformed string at byte offset {offset}: {len} bytes is not a whole number of code units")]
    MalformedSegment { offset: usize, len: usize },

    /// A string holds a code unit that would be read back as a delimiter.
    #[error("string {index} contains a NUL character and cannot be encoded")]
    Encoding { index: usize },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is {len} bytes, larger than the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, len: u64, limit: u64 },

    /// Wraps any failure of [`crate::core::StringsFile::read`].
    #[error("failed to read strings from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Wraps any failure of [`crate::core::StringsFile::write`].
    #[error("failed to write strings file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("no file path has been chosen for the strings file")]
    NoPath,

    #[error("new files can only be created when matched against a reference file")]
    NoReference,

    #[error("string index {index} is out of range (have {len} strings)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Innermost langdat error, skipping the `Read`/`Write` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_wrapper_keeps_cause() {
        let err = Error::Read {
            path: PathBuf::from("lang00.dat"),
            source: Box::new(Error::MalformedInput { len: 3 }),
        };

        assert_eq!(err.to_string(), "failed to read strings from lang00.dat");
        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("3 bytes"));
        assert!(matches!(err.root(), Error::MalformedInput { len: 3 }));
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err = Error::io(
            "missing.dat",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.source().unwrap().to_string(), "gone");
    }
}
