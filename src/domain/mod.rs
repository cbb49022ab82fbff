//! Domain Layer
//!
//! The freshness decision and everything it reasons about, independent of
//! any particular host.
//!
//! ## Structure
//!
//! - `entities/` - Items, projects, solutions
//! - `value_objects/` - Options, session stamps, references, verdicts
//! - `services/` - Freshness evaluation, reference extraction, session tracking
//! - `ports/` - Host capabilities (file metadata, attributes, generator, events)
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file access goes through the `FileSystem` port
//! 2. **Explicit state** - persisted per-item state is addressed by item identity
//! 3. **Ports & Adapters** - all host capabilities are trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
