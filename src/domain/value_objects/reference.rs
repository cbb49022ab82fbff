//! Reference files declared by template sources.
//!
//! A reference is kept exactly as written in the source; placeholder tokens
//! are substituted only when the evaluator resolves it for a session.

use std::path::PathBuf;

use super::session::SessionIdentity;

pub const DEFAULT_SOLUTION_DIR_TOKEN: &str = "$(SolutionDir)";
pub const DEFAULT_CONFIGURATION_TOKEN: &str = "$(Configuration)";

/// Placeholder tokens recognised in reference paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTokens {
    pub solution_dir: String,
    pub configuration: String,
}

impl Default for PlaceholderTokens {
    fn default() -> Self {
        Self {
            solution_dir: DEFAULT_SOLUTION_DIR_TOKEN.to_string(),
            configuration: DEFAULT_CONFIGURATION_TOKEN.to_string(),
        }
    }
}

/// A raw reference path, possibly containing placeholder tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferencePath(String);

impl ReferencePath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Substitute the session's values for the placeholder tokens.
    ///
    /// Substitution is plain string replacement. Separators are normalised to
    /// the host's afterwards.
    pub fn resolve(&self, tokens: &PlaceholderTokens, session: &SessionIdentity) -> PathBuf {
        let dir = session.solution_dir();
        let with_dir = replace_token(&self.0, &tokens.solution_dir, &dir);
        let substituted = replace_token(&with_dir, &tokens.configuration, session.configuration());
        normalize_separators(&substituted)
    }
}

/// An empty token matches nothing
fn replace_token(text: &str, token: &str, value: &str) -> String {
    if token.is_empty() {
        text.to_string()
    } else {
        text.replace(token, value)
    }
}

impl std::fmt::Display for ReferencePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_separators(s: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(s.replace('/', "\\"))
    } else {
        PathBuf::from(s.replace('\\', "/"))
    }
}
