//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::Path;
use std::time::SystemTime;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn modified(&self, path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .ok()
            .filter(|meta| meta.is_file())
            .and_then(|meta| meta.modified().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::tempdir;

    #[test]
    fn local_fs_read_text() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        std::fs::write(&file, "hello world").unwrap();

        assert_eq!(LocalFs::new().read(&file).unwrap(), "hello world");
    }

    #[test]
    fn local_fs_read_bytes_keeps_non_utf8_content() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Model.cs");
        std::fs::write(&file, [0xFF, 0xFE, b'a', 0x00]).unwrap();
        let fs = LocalFs::new();

        assert!(fs.read(&file).is_err());
        assert_eq!(fs.read_bytes(&file).unwrap(), vec![0xFF, 0xFE, b'a', 0x00]);
    }

    #[test]
    fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let err = fs.read(&dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn local_fs_modified_reads_last_write_time() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Model.cs");
        std::fs::write(&file, "class Model {}").unwrap();
        let stamp = UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        std::fs::File::options()
            .write(true)
            .open(&file)
            .unwrap()
            .set_modified(stamp)
            .unwrap();

        assert_eq!(LocalFs::new().modified(&file), Some(stamp));
    }

    #[test]
    fn local_fs_modified_is_none_for_missing_or_dirs() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        assert_eq!(fs.modified(&dir.path().join("missing")), None);
        assert_eq!(fs.modified(dir.path()), None);
        assert!(!fs.exists(dir.path()));
    }
}
