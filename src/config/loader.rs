//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::application::WalkMode;
use crate::domain::services::SessionMode;
use crate::error::{CtobError, CtobResult};

use super::types::Config;

/// Project config file name, looked up in the manifest directory
pub const PROJECT_CONFIG_FILE: &str = ".ctob.toml";

/// What a [`ConfigWarning`] is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarningKind {
    /// Key not understood; ignored
    UnknownKey,
    /// Value must not be empty; the default is used instead
    EmptyValue,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: ConfigWarningKind,
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.kind {
            ConfigWarningKind::UnknownKey => "unknown config key",
            ConfigWarningKind::EmptyValue => "empty value for config key",
        };
        write!(f, "{} '{}' in {}", what, self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CtobResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CtobError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                kind: ConfigWarningKind::UnknownKey,
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let mut config = config;
    for key in config.references.reset_empty_tokens() {
        warnings.push(ConfigWarning {
            kind: ConfigWarningKind::EmptyValue,
            key: key.to_string(),
            file: path.to_path_buf(),
            line: find_line_number(&content, key),
            suggestion: None,
        });
    }

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let (config, warnings) = load_or_default_with_warnings(project_root);
    for warning in &warnings {
        warn!("{}", warning);
    }
    config
}

/// Like [`load_or_default`], handing back the messages instead of logging
/// them, for callers that install logging from the loaded config.
pub fn load_or_default_with_warnings(project_root: Option<&Path>) -> (Config, Vec<String>) {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user_config = user_config_path();
    let mut messages = Vec::new();

    for path in project_config.into_iter().chain(user_config) {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                messages.extend(warnings.iter().map(ToString::to_string));
                return (with_env_overrides(config), messages);
            }
            Err(e) => messages.push(format!("ignoring unreadable config: {}", e)),
        }
    }

    (with_env_overrides(Config::default()), messages)
}

/// User config file (`<config dir>/ctob/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ctob").join("config.toml"))
}

/// Apply environment variable overrides (CTOB_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // CTOB_WALK_MODE
    if let Ok(mode) = std::env::var("CTOB_WALK_MODE") {
        config.walk.mode = match mode.to_lowercase().as_str() {
            "legacy" => WalkMode::Legacy,
            _ => WalkMode::Recursive,
        };
    }

    // CTOB_SESSION_MODE
    if let Ok(mode) = std::env::var("CTOB_SESSION_MODE") {
        config.walk.session_mode = match mode.to_lowercase().as_str() {
            "once-per-session" | "oncepersession" | "once" => SessionMode::OncePerSession,
            _ => SessionMode::Recheck,
        };
    }

    // CTOB_LOG_LEVEL
    if let Ok(level) = std::env::var("CTOB_LOG_LEVEL") {
        if !level.trim().is_empty() {
            config.log.level = level.trim().to_lowercase();
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "walk",
        "mode",
        "session_mode",
        "references",
        "extensions",
        "solution_dir_token",
        "configuration_token",
        "properties",
        "log",
        "level",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
