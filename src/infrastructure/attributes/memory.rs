//! In-memory attribute store

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::ItemIdentity;
use crate::domain::ports::{AttributeError, AttributeResult, AttributeStore};
use crate::domain::value_objects::AttributeKey;

/// Attribute store kept in memory; projects can be marked unavailable to
/// simulate a host that cannot provide property storage.
#[derive(Debug, Default)]
pub struct MemoryAttributeStore {
    values: Mutex<HashMap<(ItemIdentity, AttributeKey), String>>,
    unavailable: Mutex<HashSet<PathBuf>>,
    writes: AtomicUsize,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a write
    pub fn insert(&self, item: &ItemIdentity, key: AttributeKey, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert((item.clone(), key), value.to_string());
    }

    pub fn get(&self, item: &ItemIdentity, key: AttributeKey) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(&(item.clone(), key))
            .cloned()
    }

    /// Make every item of `project` fail with `AttributeError::Unavailable`
    pub fn mark_unavailable(&self, project: impl Into<PathBuf>) {
        self.unavailable
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(project.into());
    }

    /// Number of writes through the port
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self, item: &ItemIdentity) -> AttributeResult<()> {
        let unavailable = self.unavailable.lock().unwrap_or_else(|p| p.into_inner());
        if unavailable.contains(item.project()) {
            return Err(AttributeError::Unavailable {
                project: item.project().to_path_buf(),
            });
        }
        Ok(())
    }
}

impl AttributeStore for MemoryAttributeStore {
    fn read(&self, item: &ItemIdentity, key: AttributeKey) -> AttributeResult<Option<String>> {
        self.check_available(item)?;
        Ok(self.get(item, key))
    }

    fn write(&self, item: &ItemIdentity, key: AttributeKey, value: &str) -> AttributeResult<()> {
        self.write_all(item, &[(key, value)])
    }

    fn write_all(
        &self,
        item: &ItemIdentity,
        values: &[(AttributeKey, &str)],
    ) -> AttributeResult<()> {
        self.check_available(item)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut stored = self.values.lock().unwrap_or_else(|p| p.into_inner());
        for (key, value) in values {
            stored.insert((item.clone(), *key), value.to_string());
        }
        Ok(())
    }
}
