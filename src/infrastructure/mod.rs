//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `attributes/` - Attribute and session stamp stores (TOML, sidecar, memory)
//! - `events/` - Build event sinks (console, JSON)
//! - `manifest` - Solution manifest item source
//! - `generator` - Command-line generator
//! - `paths` - Lexical path normalisation

pub mod attributes;
pub mod events;
pub mod fs;
pub mod generator;
pub mod manifest;
pub mod paths;

// Re-export for convenience
pub use attributes::{MemoryAttributeStore, SidecarSessionStore, TomlAttributeStore};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, MemoryFs};
pub use generator::CommandGenerator;
pub use manifest::{ManifestItemSource, ToolSpec};
