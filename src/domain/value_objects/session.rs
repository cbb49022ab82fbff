//! Build session identity and the per-item stamp recorded after a run.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// The build session currently in progress: which solution, which configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    solution_file: PathBuf,
    configuration: String,
}

impl SessionIdentity {
    pub fn new(solution_file: impl Into<PathBuf>, configuration: impl Into<String>) -> Self {
        Self {
            solution_file: solution_file.into(),
            configuration: configuration.into(),
        }
    }

    pub fn solution_file(&self) -> &Path {
        &self.solution_file
    }

    /// Identity string compared against stored stamps
    pub fn solution_id(&self) -> String {
        self.solution_file.to_string_lossy().into_owned()
    }

    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Solution directory with a trailing separator, as substituted for the
    /// solution-directory placeholder.
    pub fn solution_dir(&self) -> String {
        let dir = self
            .solution_file
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        if dir.is_empty() || dir.ends_with(std::path::MAIN_SEPARATOR) {
            dir
        } else {
            format!("{}{}", dir, std::path::MAIN_SEPARATOR)
        }
    }

    /// Stamp recording that an item was regenerated in this session
    pub fn stamp(&self) -> SessionStamp {
        SessionStamp::new(self.solution_id(), self.configuration.clone())
    }
}

/// Persisted record of the session that last regenerated an item.
///
/// Solution and configuration are always read and written as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStamp {
    solution: String,
    configuration: String,
}

impl SessionStamp {
    pub fn new(solution: impl Into<String>, configuration: impl Into<String>) -> Self {
        Self {
            solution: solution.into(),
            configuration: configuration.into(),
        }
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Whether the stamp was written by `session`
    pub fn matches(&self, session: &SessionIdentity) -> bool {
        self.solution == session.solution_id() && self.configuration == session.configuration()
    }

    /// Whether the stamp was written on the same solution, ignoring configuration
    pub fn matches_solution(&self, session: &SessionIdentity) -> bool {
        self.solution == session.solution_id()
    }
}
