//! Storage collaborator seam
//!
//! The engine never touches the filesystem directly: load and save go
//! through a [`Storage`] implementation supplied by the caller.
//! [`FsStorage`] is the plain-filesystem backend; [`MemoryStorage`]
//! keeps documents in a map for tests and embedding callers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Byte-level storage for document load and save
pub trait Storage {
    /// Read the full contents at `path`
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write `bytes` at `path`, replacing any previous contents
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// Filesystem-backed storage
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::Read(format!("{}: {}", path.display(), e)))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).map_err(|e| Error::Write(format!("{}: {}", path.display(), e)))
    }
}

/// In-memory storage keyed by path
///
/// Reads of a missing path report [`Error::Read`], mirroring the
/// filesystem backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Seed the store with contents at `path`
    pub fn insert<P: Into<PathBuf>>(&self, path: P, bytes: Vec<u8>) {
        self.files.borrow_mut().insert(path.into(), bytes);
    }

    /// Fetch current contents at `path`, if any
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Read(format!("{}: no such entry", path.display())))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
