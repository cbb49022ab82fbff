//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::WalkStarted {
                solution,
                configuration,
                project_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "build",
                    "solution": solution.display().to_string(),
                    "configuration": configuration,
                    "project_count": project_count,
                })
            }

            BuildEvent::ItemEvaluated {
                path,
                regenerate,
                reason,
            } => {
                serde_json::json!({
                    "event": "item_evaluated",
                    "command": "build",
                    "path": path.display().to_string(),
                    "verdict": if regenerate { "regenerate" } else { "skip" },
                    "reason": reason,
                })
            }

            BuildEvent::GeneratorSucceeded { path } => {
                serde_json::json!({
                    "event": "item_generated",
                    "command": "build",
                    "path": path.display().to_string(),
                })
            }

            BuildEvent::Diagnostic(diagnostic) => {
                serde_json::json!({
                    "event": "diagnostic",
                    "command": "build",
                    "severity": diagnostic.severity.as_str(),
                    "project": diagnostic.project,
                    "document": diagnostic.document.display().to_string(),
                    "message": diagnostic.message,
                    "timestamp": diagnostic
                        .timestamp
                        .naive_local()
                        .format("%Y-%m-%dT%H:%M:%S%.3f")
                        .to_string(),
                })
            }

            BuildEvent::WalkCompleted {
                evaluated,
                regenerated,
                skipped,
                failed,
            } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": "build",
                    "status": status,
                    "evaluated": evaluated,
                    "regenerated": regenerated,
                    "skipped": skipped,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }
}
