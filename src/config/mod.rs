//! Configuration module for ctob
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CTOB_*)
//! 3. Project config (`.ctob.toml` next to the solution manifest)
//! 4. User config (`<config dir>/ctob/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! The first config file found is used; files are not merged.

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, ConfigWarningKind, PROJECT_CONFIG_FILE};
pub use types::{
    Config, LogConfig, LogFormat, PropertiesConfig, ReferencesConfig, WalkConfig,
    DEFAULT_TEMPLATE_EXTENSIONS,
};
