//! Editing session
//!
//! Holds the state a front end needs around the codec: the paired strings,
//! the file they came from, and whether they changed since the last save.

use std::path::{Path, PathBuf};

use log::info;

use super::comparison::{ComparisonSet, StringComparison};
use super::strings_file::StringsFile;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct Session {
    file: StringsFile,
    comparisons: ComparisonSet,
    current_path: Option<PathBuf>,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session using `file` for every read and write.
    pub fn with_file(file: StringsFile) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    /// Load editable strings from `path` and pair them with the current
    /// reference strings.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let editable = self.file.read(path)?;
        info!("opened {} ({} strings)", path.display(), editable.len());

        self.comparisons.replace_editable(editable);
        self.current_path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Load reference strings from `path`, keeping the editable strings.
    pub fn open_reference<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let reference = self.file.read(path)?;
        info!("opened reference {} ({} strings)", path.display(), reference.len());

        self.comparisons.replace_reference(reference);
        Ok(())
    }

    /// Start an unsaved file with one blank string per reference row.
    pub fn new_from_reference(&mut self) -> Result<()> {
        if !self.comparisons.has_reference() {
            return Err(Error::NoReference);
        }

        self.comparisons.clear_editable();
        self.current_path = None;
        self.dirty = false;
        Ok(())
    }

    /// Replace the editable string at `index`.
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.comparisons.len();
        let comparison = self
            .comparisons
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        let text = text.into();
        if comparison.editable != text {
            comparison.editable = text;
            self.dirty = true;
        }
        Ok(())
    }

    /// Write the editable strings back to the current path.
    pub fn save(&mut self) -> Result<()> {
        let path = self.current_path.clone().ok_or(Error::NoPath)?;
        self.write_to(&path)
    }

    /// Write the editable strings to `path` and adopt it as the current path.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.current_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        self.file.write(path, self.comparisons.editable_strings())?;
        info!("saved {} strings to {}", self.comparisons.len(), path.display());
        self.dirty = false;
        Ok(())
    }

    pub fn close_all(&mut self) {
        self.comparisons.clear();
        self.current_path = None;
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn comparisons(&self) -> &ComparisonSet {
        &self.comparisons
    }

    pub fn get(&self, index: usize) -> Option<&StringComparison> {
        self.comparisons.get(index)
    }
}
