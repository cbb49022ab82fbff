//! Legacy sidecar session store
//!
//! One hidden settings file per project, `<project>.rctob`, whose first line
//! is the solution last built. Every item of the project shares the stamp.
//! A second line, when present, holds the configuration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::ItemIdentity;
use crate::domain::ports::{AttributeError, AttributeResult, SessionStore};
use crate::domain::value_objects::SessionStamp;

pub const SIDECAR_EXTENSION: &str = "rctob";

#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarSessionStore;

impl SidecarSessionStore {
    pub fn new() -> Self {
        Self
    }

    /// Sidecar file for the project at `project_file`
    pub fn sidecar_file(project_file: &Path) -> PathBuf {
        project_file.with_extension(SIDECAR_EXTENSION)
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> AttributeError {
    AttributeError::Storage {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl SessionStore for SidecarSessionStore {
    fn get_stamp(&self, item: &ItemIdentity) -> AttributeResult<Option<SessionStamp>> {
        let path = Self::sidecar_file(item.project());
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| storage_error(&path, e))?;
        let mut lines = content.lines();
        let solution = lines.next().unwrap_or_default().trim();
        if solution.is_empty() {
            return Ok(None);
        }
        let configuration = lines.next().unwrap_or_default().trim();
        Ok(Some(SessionStamp::new(solution, configuration)))
    }

    fn set_stamp(&self, item: &ItemIdentity, stamp: &SessionStamp) -> AttributeResult<()> {
        let path = Self::sidecar_file(item.project());
        let content = format!("{}\n{}\n", stamp.solution(), stamp.configuration());
        fs::write(&path, content).map_err(|e| storage_error(&path, e))
    }
}
