//! TOML Attribute Store
//!
//! Persists per-item attributes next to each project file, in
//! `<project>.ctob-attrs.toml`. Every write is a locked read-modify-write of the
//! whole file, so values are durable as soon as `write` returns. The lock file
//! `<project>.ctob-attrs.lock` stays in place between writes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ItemIdentity;
use crate::domain::ports::{AttributeError, AttributeResult, AttributeStore};
use crate::domain::value_objects::AttributeKey;

pub const ATTRIBUTE_FILE_EXTENSION: &str = "ctob-attrs.toml";
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlAttributes {
    version: u32,
    #[serde(default)]
    items: BTreeMap<String, BTreeMap<String, String>>,
}

/// Attribute store backed by one TOML file per project
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlAttributeStore;

impl TomlAttributeStore {
    pub fn new() -> Self {
        Self
    }

    /// Attribute file for the project at `project_file`
    pub fn attribute_file(project_file: &Path) -> PathBuf {
        let stem = project_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        project_file.with_file_name(format!("{}.{}", stem, ATTRIBUTE_FILE_EXTENSION))
    }

    fn storage_for(&self, item: &ItemIdentity) -> AttributeResult<PathBuf> {
        let project = item.project();
        let dir_ok = project
            .parent()
            .map(|dir| dir.as_os_str().is_empty() || dir.is_dir())
            .unwrap_or(false);
        if project.file_name().is_none() || !dir_ok {
            return Err(AttributeError::Unavailable {
                project: project.to_path_buf(),
            });
        }
        Ok(Self::attribute_file(project))
    }

    fn load(&self, path: &Path) -> AttributeResult<TomlAttributes> {
        if !path.exists() {
            return Ok(TomlAttributes {
                version: FORMAT_VERSION,
                items: BTreeMap::new(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| storage_error(path, e))?;
        toml::from_str(&content).map_err(|e| storage_error(path, e))
    }

    fn save(&self, path: &Path, attributes: &TomlAttributes) -> AttributeResult<()> {
        let content = toml::to_string_pretty(attributes).map_err(|e| storage_error(path, e))?;
        fs::write(path, content).map_err(|e| storage_error(path, e))
    }
}

/// Item key inside the attribute file: path relative to the project
/// directory when possible, always with forward slashes.
fn item_key(item: &ItemIdentity) -> String {
    let project_dir = item.project().parent().unwrap_or_else(|| Path::new(""));
    let relative = item.item().strip_prefix(project_dir).unwrap_or(item.item());
    relative.to_string_lossy().replace('\\', "/")
}

fn storage_error(path: &Path, err: impl std::fmt::Display) -> AttributeError {
    AttributeError::Storage {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl AttributeStore for TomlAttributeStore {
    fn read(&self, item: &ItemIdentity, key: AttributeKey) -> AttributeResult<Option<String>> {
        let path = self.storage_for(item)?;
        let attributes = self.load(&path)?;
        Ok(attributes
            .items
            .get(&item_key(item))
            .and_then(|values| values.get(key.as_str()))
            .cloned())
    }

    fn write(&self, item: &ItemIdentity, key: AttributeKey, value: &str) -> AttributeResult<()> {
        self.write_all(item, &[(key, value)])
    }

    fn write_all(
        &self,
        item: &ItemIdentity,
        values: &[(AttributeKey, &str)],
    ) -> AttributeResult<()> {
        let path = self.storage_for(item)?;
        let lock_path = path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| storage_error(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| storage_error(&lock_path, e))?;

        let result = self.load(&path).and_then(|mut attributes| {
            attributes.version = FORMAT_VERSION;
            let entry = attributes.items.entry(item_key(item)).or_default();
            for (key, value) in values {
                entry.insert(key.as_str().to_string(), value.to_string());
            }
            self.save(&path, &attributes)
        });

        let _ = lock_file.unlock();
        result
    }
}
