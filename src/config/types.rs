//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{WalkMode, DEFAULT_PROPERTY_EXTENSIONS};
use crate::domain::services::SessionMode;
use crate::domain::value_objects::{
    PlaceholderTokens, DEFAULT_CONFIGURATION_TOKEN, DEFAULT_SOLUTION_DIR_TOKEN,
};
use crate::error::CtobResult;

use super::loader::{self, ConfigWarning};

/// Extensions of items scanned for reference directives
pub const DEFAULT_TEMPLATE_EXTENSIONS: &[&str] = &[".tt"];

/// Walk configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct WalkConfig {
    #[serde(default)]
    pub mode: WalkMode,

    #[serde(default)]
    pub session_mode: SessionMode,
}

/// Reference scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencesConfig {
    #[serde(default = "default_template_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_solution_dir_token")]
    pub solution_dir_token: String,

    #[serde(default = "default_configuration_token")]
    pub configuration_token: String,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            extensions: default_template_extensions(),
            solution_dir_token: default_solution_dir_token(),
            configuration_token: default_configuration_token(),
        }
    }
}

impl ReferencesConfig {
    /// Put back the default for every empty placeholder token, returning the
    /// keys that were empty
    pub fn reset_empty_tokens(&mut self) -> Vec<&'static str> {
        let mut reset = Vec::new();
        if self.solution_dir_token.is_empty() {
            self.solution_dir_token = default_solution_dir_token();
            reset.push("solution_dir_token");
        }
        if self.configuration_token.is_empty() {
            self.configuration_token = default_configuration_token();
            reset.push("configuration_token");
        }
        reset
    }

    pub fn tokens(&self) -> PlaceholderTokens {
        PlaceholderTokens {
            solution_dir: self.solution_dir_token.clone(),
            configuration: self.configuration_token.clone(),
        }
    }
}

fn default_template_extensions() -> Vec<String> {
    DEFAULT_TEMPLATE_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn default_solution_dir_token() -> String {
    DEFAULT_SOLUTION_DIR_TOKEN.to_string()
}

fn default_configuration_token() -> String {
    DEFAULT_CONFIGURATION_TOKEN.to_string()
}

/// Item property toggles configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesConfig {
    #[serde(default = "default_property_extensions")]
    pub extensions: Vec<String>,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            extensions: default_property_extensions(),
        }
    }
}

fn default_property_extensions() -> Vec<String> {
    DEFAULT_PROPERTY_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub references: ReferencesConfig,

    #[serde(default)]
    pub properties: PropertiesConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CtobResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CtobResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Load from project config, user config, or defaults, returning the
    /// warnings unlogged
    pub fn load_or_default_with_warnings(project_root: Option<&Path>) -> (Self, Vec<String>) {
        loader::load_or_default_with_warnings(project_root)
    }

    /// Apply environment variable overrides (CTOB_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
