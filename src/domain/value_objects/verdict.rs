//! Verdict of the freshness evaluation

use std::path::PathBuf;

use super::session::SessionStamp;

/// Why the evaluator decided to regenerate or skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictReason {
    /// The item declares no custom tool
    NoCustomTool,
    /// `RunCustomToolOnBuild` is off or absent
    RunOnBuildDisabled,
    /// Item properties could not be read from the host
    PropertiesUnavailable,
    /// `AlwaysRun` is set
    AlwaysRun,
    /// No stamp, or stamp written by another solution/configuration
    SessionChanged,
    /// Item has no generated artifact, or it is missing on disk
    ArtifactMissing,
    /// Generated artifact has no non-blank lines
    ArtifactEmpty,
    /// Source modified at or after the artifact
    SourceNewer,
    /// A reference file modified at or after the artifact
    ReferenceNewer(PathBuf),
    /// Artifact is strictly newer than the source and every resolvable reference
    UpToDate,
    /// Stamp matches the current session (once-per-session mode only)
    AlreadyBuiltThisSession,
}

impl VerdictReason {
    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            VerdictReason::NoCustomTool => "no custom tool".to_string(),
            VerdictReason::RunOnBuildDisabled => "run on build disabled".to_string(),
            VerdictReason::PropertiesUnavailable => "item properties unavailable".to_string(),
            VerdictReason::AlwaysRun => "always run".to_string(),
            VerdictReason::SessionChanged => "new session or configuration".to_string(),
            VerdictReason::ArtifactMissing => "generated file missing".to_string(),
            VerdictReason::ArtifactEmpty => "generated file empty".to_string(),
            VerdictReason::SourceNewer => "source changed".to_string(),
            VerdictReason::ReferenceNewer(path) => {
                format!("reference changed: {}", path.display())
            }
            VerdictReason::UpToDate => "up to date".to_string(),
            VerdictReason::AlreadyBuiltThisSession => "already built this session".to_string(),
        }
    }
}

impl std::fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Outcome of evaluating one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    regenerate: bool,
    reason: VerdictReason,
    stamp: Option<SessionStamp>,
}

impl Verdict {
    /// Keep the existing artifact; the stored stamp is left untouched
    pub fn skip(reason: VerdictReason) -> Self {
        Self {
            regenerate: false,
            reason,
            stamp: None,
        }
    }

    /// Run the generator and persist `stamp` for the item
    pub fn regenerate(reason: VerdictReason, stamp: SessionStamp) -> Self {
        Self {
            regenerate: true,
            reason,
            stamp: Some(stamp),
        }
    }

    pub fn is_regenerate(&self) -> bool {
        self.regenerate
    }

    pub fn is_skip(&self) -> bool {
        !self.regenerate
    }

    pub fn reason(&self) -> &VerdictReason {
        &self.reason
    }

    /// Stamp to persist, present only for a regenerate verdict
    pub fn stamp_update(&self) -> Option<&SessionStamp> {
        self.stamp.as_ref()
    }
}
