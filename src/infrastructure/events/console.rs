//! Console Event Sink
//!
//! Writes build activity the way an IDE output pane shows it: diagnostics
//! prefixed with `[!` (errors) or `[*: ` (warnings) followed by the local
//! timestamp and message.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Local};

use crate::domain::ports::{BuildEvent, BuildEventSink, Severity};

/// Format a timestamp as `M/d/yy h:mm:ss.fff`, dropping trailing zero
/// fractional digits.
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    let base = timestamp.format("%-m/%-d/%y %-I:%M:%S").to_string();
    let millis = timestamp.format("%3f").to_string();
    let millis = millis.trim_end_matches('0');
    if millis.is_empty() {
        base
    } else {
        format!("{}.{}", base, millis)
    }
}

/// Event sink writing human-readable lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Console sink on stderr
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::WalkStarted {
                solution,
                configuration,
                project_count,
            } => {
                if self.verbose {
                    self.write_line(&format!(
                        "[{} ctob] Build begin: {} ({}), {} project(s)",
                        format_timestamp(&Local::now()),
                        solution.display(),
                        configuration,
                        project_count
                    ));
                }
            }
            BuildEvent::ItemEvaluated {
                path,
                regenerate,
                reason,
            } => {
                if self.verbose {
                    let verdict = if regenerate { "run" } else { "skip" };
                    self.write_line(&format!("  {} {}: {}", verdict, path.display(), reason));
                }
            }
            BuildEvent::GeneratorSucceeded { path } => {
                self.write_line(&format!(
                    "[{} ctob] {}",
                    format_timestamp(&Local::now()),
                    path.display()
                ));
            }
            BuildEvent::Diagnostic(diagnostic) => {
                let prefix = match diagnostic.severity {
                    Severity::Error => "[!",
                    Severity::Warning => "[*: ",
                };
                self.write_line(&format!(
                    "{} {}] {}",
                    prefix,
                    format_timestamp(&diagnostic.timestamp),
                    diagnostic.message
                ));
            }
            BuildEvent::WalkCompleted {
                evaluated,
                regenerated,
                skipped,
                failed,
            } => {
                if self.verbose || failed > 0 {
                    self.write_line(&format!(
                        "{} evaluated, {} regenerated, {} skipped, {} failed",
                        evaluated, regenerated, skipped, failed
                    ));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
