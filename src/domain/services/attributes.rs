//! Typed access to per-item attributes
//!
//! Booleans are parsed strictly: anything but `true`/`false` (any case,
//! surrounding whitespace ignored) reads as absent.

use crate::domain::entities::ItemIdentity;
use crate::domain::ports::{AttributeResult, AttributeStore};
use crate::domain::value_objects::{AttributeKey, ItemOptions};

/// Typed adapter over an [`AttributeStore`]
pub struct Attributes<S: AttributeStore> {
    store: S,
}

impl<S: AttributeStore> Attributes<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_string(
        &self,
        item: &ItemIdentity,
        key: AttributeKey,
    ) -> AttributeResult<Option<String>> {
        self.store.read(item, key)
    }

    /// `Ok(None)` when the attribute is unset or does not parse as a boolean
    pub fn get_bool(
        &self,
        item: &ItemIdentity,
        key: AttributeKey,
    ) -> AttributeResult<Option<bool>> {
        Ok(self
            .store
            .read(item, key)?
            .and_then(|value| parse_bool(&value)))
    }

    pub fn set_string(
        &self,
        item: &ItemIdentity,
        key: AttributeKey,
        value: &str,
    ) -> AttributeResult<()> {
        self.store.write(item, key, value)
    }

    /// Set several string attributes in one update
    pub fn set_strings(
        &self,
        item: &ItemIdentity,
        values: &[(AttributeKey, &str)],
    ) -> AttributeResult<()> {
        self.store.write_all(item, values)
    }

    pub fn set_bool(
        &self,
        item: &ItemIdentity,
        key: AttributeKey,
        value: bool,
    ) -> AttributeResult<()> {
        self.store.write(item, key, format_bool(value))
    }

    /// Read the item's build options, defaulting absent values to `false`
    pub fn options(&self, item: &ItemIdentity) -> AttributeResult<ItemOptions> {
        let run_on_build = self
            .get_bool(item, AttributeKey::RunOnBuild)?
            .unwrap_or(false);
        if !run_on_build {
            return Ok(ItemOptions::default());
        }
        let always_run = self
            .get_bool(item, AttributeKey::AlwaysRun)?
            .unwrap_or(false);
        Ok(ItemOptions::new(run_on_build, always_run))
    }
}

/// Parse a stored boolean the way the host writes them
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Host spelling of a boolean attribute
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::attributes::MemoryAttributeStore;

    fn item() -> ItemIdentity {
        ItemIdentity::new("/src/App.csproj", "/src/Model.tt")
    }

    #[test]
    fn parse_bool_is_strict_but_case_insensitive() {
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool(" false "), Some(false));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), None);
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn unparseable_bool_reads_as_absent() {
        let store = MemoryAttributeStore::new();
        store.insert(&item(), AttributeKey::RunOnBuild, "maybe");
        let attributes = Attributes::new(&store);

        assert_eq!(
            attributes.get_bool(&item(), AttributeKey::RunOnBuild).unwrap(),
            None
        );
        assert_eq!(attributes.options(&item()).unwrap(), ItemOptions::default());
    }

    #[test]
    fn set_bool_round_trips_in_host_spelling() {
        let store = MemoryAttributeStore::new();
        let attributes = Attributes::new(&store);

        attributes
            .set_bool(&item(), AttributeKey::AlwaysRun, true)
            .unwrap();

        assert_eq!(
            attributes
                .get_string(&item(), AttributeKey::AlwaysRun)
                .unwrap()
                .as_deref(),
            Some("True")
        );
        assert_eq!(
            attributes.get_bool(&item(), AttributeKey::AlwaysRun).unwrap(),
            Some(true)
        );
    }

    #[test]
    fn options_ignore_always_run_without_run_on_build() {
        let store = MemoryAttributeStore::new();
        store.insert(&item(), AttributeKey::AlwaysRun, "True");
        let attributes = Attributes::new(&store);

        assert_eq!(attributes.options(&item()).unwrap(), ItemOptions::default());
    }

    #[test]
    fn options_read_both_flags() {
        let store = MemoryAttributeStore::new();
        store.insert(&item(), AttributeKey::RunOnBuild, "True");
        store.insert(&item(), AttributeKey::AlwaysRun, "true");
        let attributes = Attributes::new(&store);

        assert_eq!(
            attributes.options(&item()).unwrap(),
            ItemOptions::new(true, true)
        );
    }

    #[test]
    fn unavailable_store_propagates_error() {
        let store = MemoryAttributeStore::new();
        store.mark_unavailable("/src/App.csproj");
        let attributes = Attributes::new(&store);

        assert!(attributes.options(&item()).is_err());
    }
}
