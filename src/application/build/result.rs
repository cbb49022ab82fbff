//! Walk Report
//!
//! Result types for the build walk.

use std::path::PathBuf;

use crate::domain::ports::Diagnostic;
use crate::domain::value_objects::VerdictReason;

/// What happened to one evaluated item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub project: String,
    pub path: PathBuf,
    pub regenerate: bool,
    pub reason: VerdictReason,
    /// Generator ran and succeeded (always false on a dry run)
    pub generated: bool,
}

/// Result of a build walk
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    /// Every item with a custom tool, in walk order
    pub outcomes: Vec<ItemOutcome>,
    /// Items whose generator ran successfully (or would run, on a dry run)
    pub regenerated: Vec<PathBuf>,
    /// Items left as they were
    pub skipped: Vec<PathBuf>,
    /// Items whose generator failed
    pub failed: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl WalkReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluated(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn outcome(&self, path: &std::path::Path) -> Option<&ItemOutcome> {
        self.outcomes.iter().find(|o| o.path == path)
    }
}
