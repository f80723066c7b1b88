//! Strings File Access
//!
//! Seluruh file dibaca sekaligus sebelum di-decode:
//! - Read: file di-mmap read-only, lalu di-decode langsung dari page cache
//! - Write: buffer di-encode penuh dulu, baru file ditulis satu kali
//! - Atomic replace: temp file + rename, file lama tidak pernah setengah tertulis

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::debug;
use memmap2::Mmap;
use tempfile::NamedTempFile;

use crate::config::{StringsFileConfig, WriteMode};
use crate::error::{Error, Result};
use crate::protocol;

/// Reader/writer for strings files with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct StringsFile {
    config: StringsFileConfig,
}

impl StringsFile {
    pub fn new(config: StringsFileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StringsFileConfig {
        &self.config
    }

    /// Read and decode every string in the file at `path`.
    ///
    /// Any failure is wrapped in `Error::Read` carrying the cause.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        self.read_inner(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Encode `strings` and replace the file at `path` with the result.
    ///
    /// Any failure is wrapped in `Error::Write` carrying the cause. Encoding
    /// happens before the file is touched, so an unencodable string never
    /// truncates the target.
    pub fn write<P, I, S>(&self, path: P, strings: I) -> Result<()>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        self.write_inner(path, strings)
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source: Box::new(source),
            })
    }

    fn read_inner(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let len = file.metadata().map_err(|e| Error::io(path, e))?.len();

        if len > self.config.max_file_size {
            return Err(Error::TooLarge {
                path: path.to_path_buf(),
                len,
                limit: self.config.max_file_size,
            });
        }

        // Zero-length files cannot be mapped on every platform
        if len == 0 {
            debug!("{} is empty", path.display());
            return Ok(Vec::new());
        }

        // SAFETY: mapping is read-only and dropped before return; the file is
        // not expected to be modified concurrently while it is decoded.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::io(path, e))?;
        let strings = protocol::decode(&mmap)?;

        debug!(
            "read {} strings ({} bytes) from {}",
            strings.len(),
            len,
            path.display()
        );
        Ok(strings)
    }

    fn write_inner<I, S>(&self, path: &Path, strings: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bytes = protocol::encode(strings)?;

        match self.config.write_mode {
            WriteMode::Atomic => write_atomic(path, &bytes)?,
            WriteMode::Truncate => write_truncate(path, &bytes)?,
        }

        debug!(
            "wrote {} bytes to {} ({:?})",
            bytes.len(),
            path.display(),
            self.config.write_mode
        );
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    // Replace the file a symlink points at, not the link itself
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let existing = fs::metadata(&target).ok().map(|m| m.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Temp file is removed on drop if anything below fails
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| Error::io(tmp.path(), e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(tmp.path(), e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(&target)
        .map_err(|e| Error::io(&target, e.error))?;
    Ok(())
}

fn write_truncate(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(bytes).map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Read a strings file with the default configuration.
pub fn read_strings_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    StringsFile::default().read(path)
}

/// Write a strings file with the default configuration (atomic replace).
pub fn write_strings_file<P, I, S>(path: P, strings: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    StringsFile::default().write(path, strings)
}
