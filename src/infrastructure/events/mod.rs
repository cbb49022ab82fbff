//! Event Sink Implementations
//!
//! Concrete implementations of BuildEventSink:
//! - ConsoleEventSink: human-readable output pane lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{format_timestamp, ConsoleEventSink};
pub use json::JsonEventSink;
