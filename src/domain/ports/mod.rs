//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer: every host
//! capability the evaluator and walker consume.
//! Infrastructure layer provides concrete implementations.

pub mod attribute_store;
pub mod build_events;
pub mod file_system;
pub mod generator;
pub mod item_source;
pub mod session_store;

pub use attribute_store::{AttributeError, AttributeResult, AttributeStore};
pub use build_events::{BuildEvent, BuildEventSink, Diagnostic, NoopEventSink, Severity};
pub use file_system::{FileSystem, FsError, FsResult};
pub use generator::{Generator, GeneratorError};
pub use item_source::{FixedSession, ItemSource, SessionSource};
pub use session_store::SessionStore;
