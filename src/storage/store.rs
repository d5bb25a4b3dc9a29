//! Upload Store
//!
//! Maps logical file names onto one fixed storage root.
//!
//! ## Responsibilities
//! - Create the root directory on open (idempotent)
//! - Sanitize names before any path is built
//! - Answer "does this named file exist"
//! - Read stored files and write new ones atomically

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FileOpsError, Result};

use super::name::sanitize;

/// Prefix for in-flight temporary files; never a valid listing entry
const TEMP_PREFIX: &str = ".fileops-tmp-";

/// Owns the storage root and every file beneath it
///
/// All names pass through [`sanitize`] first, so no operation can reach
/// outside `root`. The store keeps no in-memory state besides the root path.
#[derive(Debug, Clone)]
pub struct UploadStore {
    /// Directory every logical name resolves into
    root: PathBuf,
}

impl UploadStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { root: root.into() };
        store.ensure_root()?;
        Ok(store)
    }

    /// Create the storage root (and parents); no-op if already present
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Resolve a logical name to its path under the root
    ///
    /// Fails with `InvalidName` before touching the filesystem.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let file_name = sanitize(name)?;
        let path = self.root.join(&file_name);
        tracing::debug!("Resolved {:?} -> {}", name, path.display());
        Ok(path)
    }

    /// True iff `name` resolves to an existing regular file
    ///
    /// Symlinks are not followed: a link in the root is never a stored file,
    /// even when its target is.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(is_regular_file(&self.resolve(name)?))
    }

    /// Resolve `name` and require that it exists
    ///
    /// The missing-file error carries the caller's logical name.
    fn require(&self, name: &str) -> Result<PathBuf> {
        let path = self.resolve(name)?;
        if !is_regular_file(&path) {
            return Err(FileOpsError::FileNotFound(name.to_string()));
        }
        Ok(path)
    }

    /// Read a stored file's raw bytes
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.require(name)?;
        fs::read(&path).map_err(|e| match e.kind() {
            // Removed between the existence check and the read
            std::io::ErrorKind::NotFound => FileOpsError::FileNotFound(name.to_string()),
            _ => FileOpsError::Io(e),
        })
    }

    /// Read a stored file as text, replacing invalid UTF-8 sequences
    pub fn read_to_string(&self, name: &str) -> Result<String> {
        let bytes = self.read(name)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Write `contents` under `name`, replacing any existing file
    ///
    /// Data goes to a temporary file inside the root, is synced, and is then
    /// renamed into place, so readers see either the old file or the
    /// complete new one. Returns the sanitized name actually written.
    pub fn write_atomic(&self, name: &str, contents: &[u8]) -> Result<String> {
        let file_name = sanitize(name)?;
        let path = self.root.join(&file_name);

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&self.root)?;
        temp.write_all(contents)?;
        temp.as_file().sync_all()?;
        temp.persist(&path)?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(file_name)
    }

    /// Store an uploaded file and return the name it was stored under
    pub fn save(&self, name: &str, contents: &[u8]) -> Result<String> {
        let stored = self.write_atomic(name, contents)?;
        tracing::info!("Stored upload {:?} as {}", name, stored);
        Ok(stored)
    }

    /// Names of all regular files in the root, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with(TEMP_PREFIX) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Get the storage root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Regular file check on the entry itself, without following symlinks
fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false)
}
