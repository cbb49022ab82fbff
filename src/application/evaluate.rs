//! Per-item evaluation
//!
//! Gathers everything the freshness decision needs for one item (options,
//! stored stamp, artifact, references) and commits the stamp a regenerate
//! verdict carries. Errors from the host never escape: unavailable storage
//! degrades to a skip.

use tracing::{debug, warn};

use crate::domain::entities::{ItemId, Project};
use crate::domain::ports::{AttributeResult, AttributeStore, FileSystem, SessionStore};
use crate::domain::services::{
    Attributes, FreshnessEvaluator, FreshnessInput, ReferenceExtractor, SessionMode,
};
use crate::domain::value_objects::{
    PlaceholderTokens, SessionIdentity, Verdict, VerdictReason,
};

/// Evaluates items of a project against the current session
pub struct ItemEvaluator<F, A, S>
where
    F: FileSystem + Clone,
    A: AttributeStore,
    S: SessionStore,
{
    freshness: FreshnessEvaluator<F>,
    extractor: ReferenceExtractor<F>,
    attributes: Attributes<A>,
    sessions: S,
}

impl<F, A, S> ItemEvaluator<F, A, S>
where
    F: FileSystem + Clone,
    A: AttributeStore,
    S: SessionStore,
{
    pub fn new(fs: F, attributes: A, sessions: S) -> Self {
        Self {
            freshness: FreshnessEvaluator::new(fs.clone()),
            extractor: ReferenceExtractor::new(fs),
            attributes: Attributes::new(attributes),
            sessions,
        }
    }

    pub fn with_tokens(mut self, tokens: PlaceholderTokens) -> Self {
        self.freshness = self.freshness.with_tokens(tokens);
        self
    }

    pub fn with_mode(mut self, mode: SessionMode) -> Self {
        self.freshness = self.freshness.with_mode(mode);
        self
    }

    pub fn attributes(&self) -> &Attributes<A> {
        &self.attributes
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Verdict for `id` without persisting anything
    pub fn evaluate(&self, project: &Project, id: ItemId, session: &SessionIdentity) -> Verdict {
        let item = project.item(id);
        if !item.has_custom_tool() {
            return Verdict::skip(VerdictReason::NoCustomTool);
        }

        let identity = project.identity(id);
        let options = match self.attributes.options(&identity) {
            Ok(options) => options,
            Err(e) => return unavailable(project, &identity.to_string(), e),
        };

        // Disabled items never touch the stamp.
        let stored = if options.run_on_build {
            match self.sessions.get_stamp(&identity) {
                Ok(stored) => stored,
                Err(e) => return unavailable(project, &identity.to_string(), e),
            }
        } else {
            None
        };

        let artifact = project.generated_artifact(id);
        let input = FreshnessInput {
            source: item.path(),
            artifact: artifact.as_deref(),
            options,
            stored: stored.as_ref(),
            session,
        };
        let verdict = self.freshness.evaluate(&input, || {
            self.extractor.references(item.path(), item.format())
        });

        debug!(
            item = %item.path().display(),
            regenerate = verdict.is_regenerate(),
            reason = %verdict.reason(),
            "evaluated"
        );
        verdict
    }

    /// Persist the stamp carried by a regenerate verdict
    pub fn commit(&self, project: &Project, id: ItemId, verdict: &Verdict) -> AttributeResult<()> {
        match verdict.stamp_update() {
            Some(stamp) => self.sessions.set_stamp(&project.identity(id), stamp),
            None => Ok(()),
        }
    }

    /// Evaluate and, on regenerate, commit the new stamp
    pub fn evaluate_and_commit(
        &self,
        project: &Project,
        id: ItemId,
        session: &SessionIdentity,
    ) -> Verdict {
        let verdict = self.evaluate(project, id, session);
        if let Err(e) = self.commit(project, id, &verdict) {
            warn!(
                item = %project.item(id).path().display(),
                error = %e,
                "failed to record session stamp"
            );
        }
        verdict
    }
}

fn unavailable(project: &Project, item: &str, err: impl std::fmt::Display) -> Verdict {
    warn!(project = project.name(), item, error = %err, "item properties unavailable, skipping");
    Verdict::skip(VerdictReason::PropertiesUnavailable)
}
