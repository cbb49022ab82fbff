//! Attribute Store Implementations
//!
//! - `TomlAttributeStore` - one TOML file per project
//! - `MemoryAttributeStore` - in memory, for tests and dry runs
//! - `SidecarSessionStore` - legacy per-project session file

mod memory;
mod sidecar;
mod toml_store;

pub use memory::MemoryAttributeStore;
pub use sidecar::{SidecarSessionStore, SIDECAR_EXTENSION};
pub use toml_store::{TomlAttributeStore, ATTRIBUTE_FILE_EXTENSION};
