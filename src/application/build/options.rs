//! Build Options
//!
//! Configuration types for the build-begin walk.

use serde::{Deserialize, Serialize};

/// Which projects a build covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildScope {
    /// Every project of the solution
    #[default]
    Solution,
    /// The current project only; the whole solution when there is none
    Project,
}

/// How the walk descends into children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkMode {
    /// Always visit children, whatever the parent's verdict
    #[default]
    Recursive,
    /// Do not descend below an item whose generator ran
    Legacy,
}

/// Options for the build walk
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub scope: BuildScope,
    /// Project selected for a project-scoped build; overrides the source's
    /// current project
    pub project: Option<String>,
    pub walk_mode: WalkMode,
    /// Evaluate only: no stamps written, no generators run
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: BuildScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn with_walk_mode(mut self, walk_mode: WalkMode) -> Self {
        self.walk_mode = walk_mode;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
