//! AttributeStore port - per-item string attributes persisted by the host
//!
//! Values are opaque strings keyed by item identity and attribute key.
//! Typed access (booleans, absent-vs-set) lives in `services::Attributes`.

use std::path::PathBuf;

use crate::domain::entities::ItemIdentity;
use crate::domain::value_objects::AttributeKey;

/// Result type for attribute operations
pub type AttributeResult<T> = Result<T, AttributeError>;

/// Attribute storage errors
#[derive(Debug)]
pub enum AttributeError {
    /// Property storage for the item's project could not be obtained
    Unavailable { project: PathBuf },
    /// Storage exists but could not be read or written
    Storage { path: PathBuf, message: String },
}

impl std::fmt::Display for AttributeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeError::Unavailable { project } => {
                write!(
                    f,
                    "property storage unavailable for project {}",
                    project.display()
                )
            }
            AttributeError::Storage { path, message } => {
                write!(f, "attribute storage {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for AttributeError {}

/// Host property storage for project items
pub trait AttributeStore {
    /// Read a raw attribute value; `Ok(None)` when it was never set
    fn read(&self, item: &ItemIdentity, key: AttributeKey) -> AttributeResult<Option<String>>;

    /// Write a raw attribute value. Durable on return; no batching.
    fn write(&self, item: &ItemIdentity, key: AttributeKey, value: &str) -> AttributeResult<()>;

    /// Write several values of one item as a single update: either all of
    /// them are persisted or none is.
    fn write_all(
        &self,
        item: &ItemIdentity,
        values: &[(AttributeKey, &str)],
    ) -> AttributeResult<()>;
}

impl<T: AttributeStore + ?Sized> AttributeStore for &T {
    fn read(&self, item: &ItemIdentity, key: AttributeKey) -> AttributeResult<Option<String>> {
        (**self).read(item, key)
    }

    fn write(&self, item: &ItemIdentity, key: AttributeKey, value: &str) -> AttributeResult<()> {
        (**self).write(item, key, value)
    }

    fn write_all(
        &self,
        item: &ItemIdentity,
        values: &[(AttributeKey, &str)],
    ) -> AttributeResult<()> {
        (**self).write_all(item, values)
    }
}
