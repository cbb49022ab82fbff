//! Per-item build properties
//!
//! The editable `RunCustomToolOnBuild` / `AlwaysRun` toggles, offered only on
//! item types listed in `[properties] extensions` and only while the provider
//! is registered for the item's property category. Providers are registered
//! through an [`ExtenderRegistry`]; the returned [`ExtenderRegistration`]
//! unregisters when dropped.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::domain::entities::ItemIdentity;
use crate::domain::ports::AttributeStore;
use crate::domain::services::Attributes;
use crate::domain::value_objects::{AttributeKey, ItemOptions};
use crate::error::{CtobError, CtobResult};

/// Provider name used when registering with the host
pub const EXTENDER_NAME: &str = "ctob.PropertyExtenderProvider";

/// Host property categories the provider is registered for by default
pub const DEFAULT_CATEGORIES: &[&str] = &["CSharpFileProperties", "VBFileProperties"];

/// Item types that show the toggles by default
pub const DEFAULT_PROPERTY_EXTENSIONS: &[&str] = &[".resx", ".resw", ".tt", ".xaml"];

/// Property category of the items of `project`, by project type
pub fn category_for(project: &Path) -> Option<&'static str> {
    let extension = project.extension()?.to_string_lossy().to_ascii_lowercase();
    match extension.as_str() {
        "csproj" => Some(DEFAULT_CATEGORIES[0]),
        "vbproj" => Some(DEFAULT_CATEGORIES[1]),
        _ => None,
    }
}

/// Get/set view of the per-item toggles
pub struct ItemProperties<A: AttributeStore> {
    attributes: Attributes<A>,
    extensions: Vec<String>,
    registry: ExtenderRegistry,
}

impl<A: AttributeStore> ItemProperties<A> {
    pub fn new<S: AsRef<str>>(registry: &ExtenderRegistry, store: A, extensions: &[S]) -> Self {
        Self {
            registry: registry.clone(),
            attributes: Attributes::new(store),
            extensions: extensions
                .iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether the toggles are offered for the item at `path`
    pub fn can_extend(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    /// Both stored toggles, as the property grid shows them
    pub fn get(&self, item: &ItemIdentity) -> CtobResult<ItemOptions> {
        self.ensure_supported(item)?;
        let run_on_build = self.read(item, AttributeKey::RunOnBuild)?;
        let always_run = self.read(item, AttributeKey::AlwaysRun)?;
        Ok(ItemOptions::new(run_on_build, always_run))
    }

    pub fn set_run_on_build(&self, item: &ItemIdentity, value: bool) -> CtobResult<()> {
        self.write(item, AttributeKey::RunOnBuild, value)
    }

    pub fn set_always_run(&self, item: &ItemIdentity, value: bool) -> CtobResult<()> {
        self.write(item, AttributeKey::AlwaysRun, value)
    }

    fn read(&self, item: &ItemIdentity, key: AttributeKey) -> CtobResult<bool> {
        Ok(self.attributes.get_bool(item, key)?.unwrap_or(false))
    }

    fn write(&self, item: &ItemIdentity, key: AttributeKey, value: bool) -> CtobResult<()> {
        self.ensure_supported(item)?;
        self.attributes.set_bool(item, key, value)?;
        debug!(item = %item, key = %key, value, "property updated");
        Ok(())
    }

    fn ensure_supported(&self, item: &ItemIdentity) -> CtobResult<()> {
        let category = category_for(item.project()).filter(|_| self.can_extend(item.item()));
        let Some(category) = category else {
            return Err(CtobError::PropertiesUnsupported {
                path: item.item().to_path_buf(),
            });
        };
        if !self.registry.is_registered(category) {
            return Err(CtobError::ExtenderNotRegistered {
                category: category.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Extender {
    category: String,
    name: String,
}

#[derive(Debug, Default)]
struct Registrations {
    next_cookie: u32,
    extenders: BTreeMap<u32, Extender>,
}

/// Registered property extender providers, keyed by cookie
#[derive(Debug, Clone, Default)]
pub struct ExtenderRegistry {
    inner: Arc<Mutex<Registrations>>,
}

impl ExtenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for `category`; unregistered when the guard drops
    pub fn register(
        &self,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> ExtenderRegistration {
        let mut inner = lock(&self.inner);
        inner.next_cookie += 1;
        let cookie = inner.next_cookie;
        inner.extenders.insert(
            cookie,
            Extender {
                category: category.into(),
                name: name.into(),
            },
        );
        ExtenderRegistration {
            registry: Arc::clone(&self.inner),
            cookie,
        }
    }

    /// Register the provider for every default category
    pub fn register_defaults(&self) -> Vec<ExtenderRegistration> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|category| self.register(*category, EXTENDER_NAME))
            .collect()
    }

    pub fn is_registered(&self, category: &str) -> bool {
        lock(&self.inner)
            .extenders
            .values()
            .any(|e| e.category == category)
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).extenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock(inner: &Mutex<Registrations>) -> MutexGuard<'_, Registrations> {
    inner.lock().unwrap_or_else(|p| p.into_inner())
}

/// Scoped registration; dropping it unregisters the provider
#[derive(Debug)]
pub struct ExtenderRegistration {
    registry: Arc<Mutex<Registrations>>,
    cookie: u32,
}

impl ExtenderRegistration {
    pub fn cookie(&self) -> u32 {
        self.cookie
    }
}

impl Drop for ExtenderRegistration {
    fn drop(&mut self) {
        lock(&self.registry).extenders.remove(&self.cookie);
    }
}
