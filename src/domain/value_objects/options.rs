//! Per-item build options

use serde::Serialize;

/// Per-item configuration read from the attribute store.
///
/// Absent or unparseable attributes fall back to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemOptions {
    /// Run the item's generator when a build begins
    pub run_on_build: bool,
    /// Regenerate unconditionally (only honoured with `run_on_build`)
    pub always_run: bool,
}

impl ItemOptions {
    pub fn new(run_on_build: bool, always_run: bool) -> Self {
        Self {
            run_on_build,
            always_run,
        }
    }

    /// Options of an item that opted into build-time generation
    pub fn run_on_build() -> Self {
        Self::new(true, false)
    }
}
