//! Project files, seen only through their location and the ability to be
//! saved somewhere else.

use std::fmt;

use crate::error::Result;
use crate::path::FilePath;
use crate::storage::Storage;

/// A loaded project file.
pub trait ProjectFile: fmt::Debug {
    /// Where the file was loaded from.
    fn path(&self) -> &FilePath;

    /// Persist the file's content at `new_path`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails.
    fn save(&self, storage: &dyn Storage, new_path: &FilePath) -> Result<()>;
}

/// Opens project files for saving.
pub trait ProjectFileLoader: fmt::Debug {
    /// Load the project file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read.
    fn load(&self, storage: &dyn Storage, path: &FilePath) -> Result<Box<dyn ProjectFile>>;
}

/// A project file whose content is copied byte for byte.
///
/// The content is never decoded, so UTF-16 or legacy code page project
/// files survive a rename unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimProjectFile {
    path: FilePath,
    contents: Vec<u8>,
}

impl VerbatimProjectFile {
    /// Wrap already-read content.
    #[must_use]
    pub fn new(path: FilePath, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }

    /// Read a project file.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read.
    pub fn read(storage: &dyn Storage, path: &FilePath) -> Result<Self> {
        Ok(Self::new(path.clone(), storage.read_bytes(path)?))
    }

    /// The file content.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

impl ProjectFile for VerbatimProjectFile {
    fn path(&self) -> &FilePath {
        &self.path
    }

    fn save(&self, storage: &dyn Storage, new_path: &FilePath) -> Result<()> {
        log::debug!("saving project {} as {new_path}", self.path);
        storage.write_bytes(new_path, &self.contents)
    }
}

/// Loads [`VerbatimProjectFile`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimLoader;

impl ProjectFileLoader for VerbatimLoader {
    fn load(&self, storage: &dyn Storage, path: &FilePath) -> Result<Box<dyn ProjectFile>> {
        Ok(Box::new(VerbatimProjectFile::read(storage, path)?))
    }
}
