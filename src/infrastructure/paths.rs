//! Lexical path normalisation
//!
//! Item identities are compared as paths, so every path entering the solution
//! model goes through [`absolute`] first.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Remove `.` components and resolve `..` against the preceding component,
/// without touching the file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Absolute, lexically normalised form of `path`
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}
