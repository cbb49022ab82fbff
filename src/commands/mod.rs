//! Command handlers for the `ctob` binary

pub mod build;
pub mod item;
pub mod refs;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use ctob::config::{Config, LogFormat};
use ctob::domain::ports::{BuildEventSink, SessionStore};
use ctob::domain::services::SessionTracker;
use ctob::infrastructure::{
    ConsoleEventSink, JsonEventSink, ManifestItemSource, SidecarSessionStore, TomlAttributeStore,
};

/// Config and item source for one manifest
pub struct Workspace {
    pub config: Config,
    pub source: ManifestItemSource,
}

/// Load config (from the manifest directory upwards to the user config),
/// initialise logging and load the manifest.
pub fn load_workspace(manifest: &Path, verbose: u8) -> Result<Workspace> {
    let root = manifest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let (config, warnings) = Config::load_or_default_with_warnings(Some(root));
    ctob::logging::init(verbose, &config.log);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let source = ManifestItemSource::load(manifest, &config.references.extensions)
        .with_context(|| format!("failed to load manifest {}", manifest.display()))?;
    Ok(Workspace { config, source })
}

/// Event sink for the requested output mode
pub fn event_sink(json: bool, config: &Config, detailed: bool) -> Arc<dyn BuildEventSink> {
    if json || config.log.format == LogFormat::Json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(detailed))
    }
}

/// Session stamp storage: item attributes, or the legacy sidecar file
pub fn session_store(sidecar: bool) -> Box<dyn SessionStore> {
    if sidecar {
        Box::new(SidecarSessionStore::new())
    } else {
        Box::new(SessionTracker::new(TomlAttributeStore::new()))
    }
}
