//! The file-system boundary.
//!
//! Everything that touches disk goes through [`Storage`], so the whole
//! pipeline can run against [`MemoryStorage`] in tests and dry runs.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;

use crate::error::{Error, Result};
use crate::path::FilePath;

/// Read, write and copy files.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Read a whole file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be read.
    fn read_bytes(&self, path: &FilePath) -> Result<Vec<u8>>;

    /// Read a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be read or is not
    /// valid UTF-8.
    fn read_text(&self, path: &FilePath) -> Result<String> {
        String::from_utf8(self.read_bytes(path)?)
            .map_err(|e| Error::storage(path, io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Read a file as lines, without line terminators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be read.
    fn read_lines(&self, path: &FilePath) -> Result<Vec<String>> {
        Ok(self.read_text(path)?.lines().map(str::to_string).collect())
    }

    /// Create or replace a file with raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be written.
    fn write_bytes(&self, path: &FilePath, contents: &[u8]) -> Result<()>;

    /// Create or replace a file with text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be written.
    fn write_text(&self, path: &FilePath, contents: &str) -> Result<()> {
        self.write_bytes(path, contents.as_bytes())
    }

    /// Whether a file exists.
    fn exists(&self, path: &FilePath) -> bool;

    /// Copy a file, replacing the destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the source is missing or the copy fails.
    fn copy(&self, from: &FilePath, to: &FilePath) -> Result<()>;
}

/// [`Storage`] backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl Storage for FileSystem {
    fn read_bytes(&self, path: &FilePath) -> Result<Vec<u8>> {
        fs::read(path.to_path_buf()).map_err(|e| Error::storage(path, e))
    }

    fn write_bytes(&self, path: &FilePath, contents: &[u8]) -> Result<()> {
        let target = path.to_path_buf();
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::storage(path, e))?;
        }
        log::debug!("writing {path}");
        fs::write(target, contents).map_err(|e| Error::storage(path, e))
    }

    fn exists(&self, path: &FilePath) -> bool {
        path.to_path_buf().is_file()
    }

    fn copy(&self, from: &FilePath, to: &FilePath) -> Result<()> {
        let target = to.to_path_buf();
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::storage(to, e))?;
        }
        log::debug!("copying {from} to {to}");
        fs::copy(from.to_path_buf(), target)
            .map(|_| ())
            .map_err(|e| Error::storage(from, e))
    }
}

/// In-memory [`Storage`], keyed by case-insensitive path.
///
/// # Examples
///
/// ```
/// use sln_transform::path::FilePath;
/// use sln_transform::storage::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new();
/// let path = FilePath::new_file("C:\\work\\App.csproj.user");
/// storage.write_text(&path, "<Project />").unwrap();
/// assert!(storage.exists(&FilePath::new_file("c:\\WORK\\app.csproj.user")));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<BTreeMap<FilePath, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    #[must_use]
    pub fn with_file(self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        self.files
            .borrow_mut()
            .insert(FilePath::new_file(path), contents.as_ref().to_vec());
        self
    }

    /// All stored paths, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<FilePath> {
        self.files.borrow().keys().cloned().collect()
    }

    fn not_found(path: &FilePath) -> Error {
        Error::storage(
            path,
            io::Error::new(io::ErrorKind::NotFound, "no such file in memory storage"),
        )
    }
}

impl Storage for MemoryStorage {
    fn read_bytes(&self, path: &FilePath) -> Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn write_bytes(&self, path: &FilePath, contents: &[u8]) -> Result<()> {
        self.files.borrow_mut().insert(path.clone(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &FilePath) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn copy(&self, from: &FilePath, to: &FilePath) -> Result<()> {
        let contents = self.read_bytes(from)?;
        self.write_bytes(to, &contents)
    }
}
