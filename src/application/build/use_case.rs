//! Build Walker
//!
//! Orchestrates the build-begin walk:
//! 1. Select the projects in scope
//! 2. Visit every item depth-first and ask for a verdict
//! 3. On regenerate, record the session stamp and run the generator
//! 4. Report failures as diagnostics without stopping the walk
//!
//! All decisions live in the domain services; this is orchestration only.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::application::evaluate::ItemEvaluator;
use crate::domain::entities::{ItemId, Project, Solution};
use crate::domain::ports::{
    AttributeStore, BuildEvent, BuildEventSink, Diagnostic, FileSystem, Generator, ItemSource,
    SessionSource, SessionStore,
};
use crate::domain::value_objects::{SessionIdentity, VerdictReason};
use crate::error::{CtobError, CtobResult};

use super::options::{BuildOptions, BuildScope, WalkMode};
use super::result::{ItemOutcome, WalkReport};

/// Build walker - visits items and regenerates the stale ones
///
/// Parameterized by its ports so tests can run it entirely in memory.
pub struct BuildWalker<F, A, S, G>
where
    F: FileSystem + Clone,
    A: AttributeStore,
    S: SessionStore,
    G: Generator,
{
    evaluator: ItemEvaluator<F, A, S>,
    generator: G,
}

struct WalkContext<'a> {
    session: &'a SessionIdentity,
    options: &'a BuildOptions,
    sink: &'a dyn BuildEventSink,
}

impl<F, A, S, G> BuildWalker<F, A, S, G>
where
    F: FileSystem + Clone,
    A: AttributeStore,
    S: SessionStore,
    G: Generator,
{
    pub fn new(evaluator: ItemEvaluator<F, A, S>, generator: G) -> Self {
        Self {
            evaluator,
            generator,
        }
    }

    pub fn evaluator(&self) -> &ItemEvaluator<F, A, S> {
        &self.evaluator
    }

    /// Load the solution and session from the host, then walk
    pub fn run<I, X>(
        &self,
        items: &I,
        sessions: &X,
        options: &BuildOptions,
        sink: Arc<dyn BuildEventSink>,
    ) -> CtobResult<WalkReport>
    where
        I: ItemSource,
        X: SessionSource,
    {
        let solution = items.solution()?;
        let session = sessions.current();
        let current = options.project.clone().or_else(|| items.current_project());
        Ok(self.walk(&solution, &session, current.as_deref(), options, sink))
    }

    /// Walk the projects of `solution` in scope
    pub fn walk(
        &self,
        solution: &Solution,
        session: &SessionIdentity,
        current_project: Option<&str>,
        options: &BuildOptions,
        sink: Arc<dyn BuildEventSink>,
    ) -> WalkReport {
        let projects = select_projects(solution, options.scope, current_project);
        sink.on_event(BuildEvent::WalkStarted {
            solution: session.solution_file().to_path_buf(),
            configuration: session.configuration().to_string(),
            project_count: projects.len(),
        });

        let ctx = WalkContext {
            session,
            options,
            sink: sink.as_ref(),
        };
        let mut report = WalkReport::new();
        for project in projects {
            debug!(project = project.name(), "walking project");
            for root in project.roots() {
                self.visit(&ctx, project, *root, &mut report);
            }
        }

        info!(
            evaluated = report.evaluated(),
            regenerated = report.regenerated.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "build walk complete"
        );
        sink.on_event(BuildEvent::WalkCompleted {
            evaluated: report.evaluated(),
            regenerated: report.regenerated.len(),
            skipped: report.skipped.len(),
            failed: report.failed.len(),
        });
        report
    }

    fn visit(&self, ctx: &WalkContext<'_>, project: &Project, id: ItemId, report: &mut WalkReport) {
        let item = project.item(id);
        let ran = item.has_custom_tool() && self.process(ctx, project, id, report);
        if ran && ctx.options.walk_mode == WalkMode::Legacy {
            return;
        }
        for child in item.children() {
            self.visit(ctx, project, *child, report);
        }
    }

    /// Evaluate one item with a custom tool; true when its generator ran
    /// (or would run, on a dry run)
    fn process(
        &self,
        ctx: &WalkContext<'_>,
        project: &Project,
        id: ItemId,
        report: &mut WalkReport,
    ) -> bool {
        let item = project.item(id);
        let path = item.path().to_path_buf();
        let verdict = self.evaluator.evaluate(project, id, ctx.session);

        if ctx.sink.wants_detailed_events() {
            ctx.sink.on_event(BuildEvent::ItemEvaluated {
                path: path.clone(),
                regenerate: verdict.is_regenerate(),
                reason: verdict.reason().describe(),
            });
        }

        let mut outcome = ItemOutcome {
            project: project.name().to_string(),
            path: path.clone(),
            regenerate: verdict.is_regenerate(),
            reason: verdict.reason().clone(),
            generated: false,
        };

        if verdict.is_skip() {
            if verdict.reason() == &VerdictReason::PropertiesUnavailable {
                let diagnostic = Diagnostic::warning(
                    project.name(),
                    &path,
                    format!("Unable to read build properties of {}", item.name()),
                );
                ctx.sink.on_event(BuildEvent::Diagnostic(diagnostic.clone()));
                report.diagnostics.push(diagnostic);
            }
            report.skipped.push(path);
            report.outcomes.push(outcome);
            return false;
        }

        if ctx.options.dry_run {
            report.regenerated.push(path);
            report.outcomes.push(outcome);
            return true;
        }

        // Recorded before the generator runs; a failed run keeps it.
        if let Err(e) = self.evaluator.commit(project, id, &verdict) {
            warn!(item = %path.display(), error = %e, "failed to record session stamp");
        }

        info!(item = %path.display(), "running custom tool");
        match self.generator.run(project, id) {
            Ok(()) => {
                outcome.generated = true;
                ctx.sink
                    .on_event(BuildEvent::GeneratorSucceeded { path: path.clone() });
                report.regenerated.push(path);
            }
            Err(e) => {
                warn!(item = %path.display(), error = %e, "custom tool failed");
                let diagnostic = Diagnostic::error(
                    project.name(),
                    &path,
                    format!("Failed to Run Custom Tool on {}", item.name()),
                );
                ctx.sink.on_event(BuildEvent::Diagnostic(diagnostic.clone()));
                report.diagnostics.push(diagnostic);
                report.failed.push(path);
            }
        }
        report.outcomes.push(outcome);
        true
    }
}

impl<F, A, S, G> BuildWalker<F, A, S, G>
where
    F: FileSystem + Clone + Send + 'static,
    A: AttributeStore + Send + 'static,
    S: SessionStore + Send + 'static,
    G: Generator + Send + 'static,
{
    /// Run the walk on a dedicated thread
    pub fn spawn(
        self,
        solution: Solution,
        session: SessionIdentity,
        current_project: Option<String>,
        options: BuildOptions,
        sink: Arc<dyn BuildEventSink>,
    ) -> WalkHandle {
        let handle = thread::spawn(move || {
            self.walk(
                &solution,
                &session,
                current_project.as_deref(),
                &options,
                sink,
            )
        });
        WalkHandle { handle }
    }
}

/// Handle to a walk running in the background
pub struct WalkHandle {
    handle: JoinHandle<WalkReport>,
}

impl WalkHandle {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the walk and take its report
    pub fn join(self) -> CtobResult<WalkReport> {
        self.handle.join().map_err(|_| CtobError::WalkPanicked)
    }
}

fn select_projects<'a>(
    solution: &'a Solution,
    scope: BuildScope,
    current_project: Option<&str>,
) -> Vec<&'a Project> {
    if scope == BuildScope::Project {
        if let Some(project) = current_project.and_then(|name| solution.project(name)) {
            return vec![project];
        }
        debug!("no current project, building the whole solution");
    }
    solution.projects().iter().collect()
}
