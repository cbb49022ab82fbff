//! In-memory file system with explicit modification times

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::SystemTime;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
struct MemoryFile {
    content: Vec<u8>,
    modified: SystemTime,
}

/// In-memory FileSystem for tests and dry runs.
///
/// Every file carries an explicit modification time, set by `insert` and
/// changed by `set_modified`.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<HashMap<PathBuf, MemoryFile>>,
    metadata_reads: AtomicUsize,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a file with a given modification time
    pub fn insert(&self, path: impl Into<PathBuf>, content: &str, modified: SystemTime) {
        self.insert_bytes(path, content.as_bytes(), modified);
    }

    /// Create or replace a file with raw content
    pub fn insert_bytes(&self, path: impl Into<PathBuf>, content: &[u8], modified: SystemTime) {
        self.lock().insert(
            path.into(),
            MemoryFile {
                content: content.to_vec(),
                modified,
            },
        );
    }

    /// Change the modification time of an existing file
    pub fn set_modified(&self, path: impl AsRef<Path>, modified: SystemTime) {
        if let Some(file) = self.lock().get_mut(path.as_ref()) {
            file.modified = modified;
        }
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.lock().remove(path.as_ref());
    }

    /// Number of `modified` calls served so far
    pub fn metadata_reads(&self) -> usize {
        self.metadata_reads.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, MemoryFile>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        String::from_utf8(self.read_bytes(path)?)
            .map_err(|_| FsError::Other(format!("{} is not valid UTF-8", path.display())))
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.lock()
            .get(path)
            .map(|file| file.content.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    fn modified(&self, path: &Path) -> Option<SystemTime> {
        self.metadata_reads.fetch_add(1, Ordering::SeqCst);
        self.lock().get(path).map(|file| file.modified)
    }
}
