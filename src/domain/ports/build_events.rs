//! Build Event Port
//!
//! Observable interface for the build-begin walk: per-item verdicts,
//! generator results and build diagnostics.

use std::path::PathBuf;

use chrono::{DateTime, Local};

/// Severity of a build diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic tied to an item's document in its owning project
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub project: String,
    pub document: PathBuf,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl Diagnostic {
    pub fn error(
        project: impl Into<String>,
        document: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(project, document, Severity::Error, message)
    }

    pub fn warning(
        project: impl Into<String>,
        document: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(project, document, Severity::Warning, message)
    }

    fn new(
        project: impl Into<String>,
        document: impl Into<PathBuf>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            document: document.into(),
            severity,
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}

/// Event emitted during a build walk
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Walk started
    WalkStarted {
        solution: PathBuf,
        configuration: String,
        project_count: usize,
    },

    /// An item with a custom tool was evaluated
    ItemEvaluated {
        path: PathBuf,
        regenerate: bool,
        reason: String,
    },

    /// The item's generator completed
    GeneratorSucceeded { path: PathBuf },

    /// A build diagnostic (generator failure, unavailable storage)
    Diagnostic(Diagnostic),

    /// Walk completed
    WalkCompleted {
        evaluated: usize,
        regenerated: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Whether this sink wants per-item events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
