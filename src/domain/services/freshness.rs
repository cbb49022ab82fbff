//! Freshness evaluation
//!
//! Decides whether an item's generator must run before the build. Rules are
//! applied in order and the first one that applies decides:
//!
//! 1. `RunCustomToolOnBuild` off: skip.
//! 2. `AlwaysRun` on: regenerate.
//! 3. Stored stamp differs from the current session (or is absent): regenerate.
//! 4. Artifact missing or empty: regenerate.
//! 5. Source modified at or after the artifact: regenerate.
//! 6. Any resolvable reference modified at or after the artifact: regenerate.
//! 7. Otherwise: skip.
//!
//! A regenerate verdict carries the stamp to persist for the item. Timestamp
//! ties count as stale.

use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{
    ItemOptions, PlaceholderTokens, ReferencePath, SessionIdentity, SessionStamp, Verdict,
    VerdictReason,
};

/// How a stamp matching the current session is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    /// Fall through to the timestamp checks
    #[default]
    Recheck,
    /// Skip unconditionally once the item ran on this solution.
    ///
    /// Superseded: serves stale output when a reference changes mid-session.
    OncePerSession,
}

/// Everything the evaluator needs to know about one item
#[derive(Debug, Clone, Copy)]
pub struct FreshnessInput<'a> {
    /// Source file of the item
    pub source: &'a Path,
    /// Generated artifact, if the item has one
    pub artifact: Option<&'a Path>,
    pub options: ItemOptions,
    /// Stamp persisted by the last regenerating session
    pub stored: Option<&'a SessionStamp>,
    pub session: &'a SessionIdentity,
}

/// Freshness evaluator over a file-metadata capability
pub struct FreshnessEvaluator<F: FileSystem> {
    fs: F,
    tokens: PlaceholderTokens,
    mode: SessionMode,
}

impl<F: FileSystem> FreshnessEvaluator<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            tokens: PlaceholderTokens::default(),
            mode: SessionMode::default(),
        }
    }

    pub fn with_tokens(mut self, tokens: PlaceholderTokens) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_mode(mut self, mode: SessionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Evaluate one item.
    ///
    /// `references` is only called when the reference check is reached, so
    /// disabled or already-stale items are never scanned.
    pub fn evaluate<R>(&self, input: &FreshnessInput<'_>, references: R) -> Verdict
    where
        R: FnOnce() -> Vec<ReferencePath>,
    {
        if !input.options.run_on_build {
            return Verdict::skip(VerdictReason::RunOnBuildDisabled);
        }

        let stamp = input.session.stamp();

        if input.options.always_run {
            return Verdict::regenerate(VerdictReason::AlwaysRun, stamp);
        }

        match self.mode {
            SessionMode::Recheck => {
                if !input.stored.is_some_and(|s| s.matches(input.session)) {
                    return Verdict::regenerate(VerdictReason::SessionChanged, stamp);
                }
            }
            SessionMode::OncePerSession => {
                return if input
                    .stored
                    .is_some_and(|s| s.matches_solution(input.session))
                {
                    Verdict::skip(VerdictReason::AlreadyBuiltThisSession)
                } else {
                    Verdict::regenerate(VerdictReason::SessionChanged, stamp)
                };
            }
        }

        match self.staleness(input, references) {
            Some(reason) => Verdict::regenerate(reason, stamp),
            None => Verdict::skip(VerdictReason::UpToDate),
        }
    }

    /// Why the artifact is stale, or `None` when it is fresh
    fn staleness<R>(&self, input: &FreshnessInput<'_>, references: R) -> Option<VerdictReason>
    where
        R: FnOnce() -> Vec<ReferencePath>,
    {
        let Some(artifact) = input.artifact else {
            return Some(VerdictReason::ArtifactMissing);
        };
        let Some(artifact_time) = self.fs.modified(artifact) else {
            return Some(VerdictReason::ArtifactMissing);
        };
        if self.is_empty(artifact) {
            return Some(VerdictReason::ArtifactEmpty);
        }

        // A source without metadata cannot be shown newer than the artifact.
        if let Some(source_time) = self.fs.modified(input.source) {
            if source_time >= artifact_time {
                return Some(VerdictReason::SourceNewer);
            }
        }

        self.newer_reference(&references(), input.session, artifact_time)
            .map(VerdictReason::ReferenceNewer)
    }

    /// First resolvable reference not strictly older than the artifact.
    ///
    /// References that do not resolve to an existing absolute path are
    /// assumed satisfied.
    fn newer_reference(
        &self,
        references: &[ReferencePath],
        session: &SessionIdentity,
        artifact_time: SystemTime,
    ) -> Option<std::path::PathBuf> {
        references
            .iter()
            .map(|reference| reference.resolve(&self.tokens, session))
            .filter(|path| path.is_absolute())
            .find(|path| {
                self.fs
                    .modified(path)
                    .is_some_and(|reference_time| reference_time >= artifact_time)
            })
    }

    /// An artifact with no non-blank line (or unreadable) is empty
    fn is_empty(&self, artifact: &Path) -> bool {
        match self.fs.read_bytes(artifact) {
            Ok(content) => is_blank(&decode_text(&content)),
            Err(_) => true,
        }
    }
}

/// Decode file content by its byte order mark, UTF-8 when there is none.
///
/// Undecodable sequences become replacement characters, which count as
/// content.
fn decode_text(bytes: &[u8]) -> String {
    fn utf16(bytes: &[u8], from: fn([u8; 2]) -> u16) -> String {
        let units = bytes.chunks(2).map(|pair| match *pair {
            [a, b] => from([a, b]),
            _ => u16::from(pair[0]),
        });
        char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Nothing but whitespace, stray byte order marks or NULs
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || c == '\0' || c == '\u{feff}')
}
