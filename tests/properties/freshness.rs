//! Property tests for the regenerate/skip decision.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use ctob::domain::services::SessionTracker;
use ctob::domain::value_objects::AttributeKey;
use ctob::infrastructure::{MemoryAttributeStore, MemoryFs};
use ctob::{
    Item, ItemEvaluator, ItemFormat, ItemId, Project, SessionIdentity, VerdictReason,
};

const TEMPLATE: &str = "<#@ template language=\"C#\" #>\n\
<#@ assembly name=\"$(SolutionDir)lib/Ref.dll\" #>\n\
public class Model { }\n";

struct Fixture {
    root: PathBuf,
    project: Project,
    model: ItemId,
    fs: MemoryFs,
    store: MemoryAttributeStore,
}

impl Fixture {
    fn new() -> Self {
        let root = std::env::temp_dir().join("ctob-properties");
        let mut project = Project::new("App", root.join("App").join("App.csproj"));
        let model = project.add_root(
            Item::new(root.join("App").join("Model.tt"))
                .with_custom_tool("TextTemplatingFileGenerator")
                .with_format(ItemFormat::Template),
        );
        project.add_child(model, Item::new(root.join("App").join("Model.cs")));
        Self {
            root,
            project,
            model,
            fs: MemoryFs::new(),
            store: MemoryAttributeStore::new(),
        }
    }

    fn session(&self, configuration: &str) -> SessionIdentity {
        SessionIdentity::new(self.root.join("App.sln"), configuration)
    }

    fn source(&self) -> PathBuf {
        self.root.join("App").join("Model.tt")
    }

    fn artifact(&self) -> PathBuf {
        self.root.join("App").join("Model.cs")
    }

    fn reference(&self) -> PathBuf {
        self.root.join("lib").join("Ref.dll")
    }

    fn options(&self, run_on_build: bool, always_run: bool) {
        let identity = self.project.identity(self.model);
        let format = |b: bool| if b { "True" } else { "False" };
        self.store
            .insert(&identity, AttributeKey::RunOnBuild, format(run_on_build));
        self.store
            .insert(&identity, AttributeKey::AlwaysRun, format(always_run));
    }

    fn stamp(&self, session: &SessionIdentity) {
        let identity = self.project.identity(self.model);
        self.store.insert(
            &identity,
            AttributeKey::LastBuiltOnSolution,
            &session.solution_id(),
        );
        self.store.insert(
            &identity,
            AttributeKey::LastBuiltOnConfiguration,
            session.configuration(),
        );
    }

    fn files(&self, source: u64, artifact: Option<u64>, reference: Option<u64>) {
        self.fs.insert(self.source(), TEMPLATE, at(source));
        if let Some(artifact) = artifact {
            self.fs
                .insert(self.artifact(), "public class Model { }\n", at(artifact));
        }
        if let Some(reference) = reference {
            self.fs.insert(self.reference(), "binary", at(reference));
        }
    }

    fn evaluator(
        &self,
    ) -> ItemEvaluator<&MemoryFs, &MemoryAttributeStore, SessionTracker<&MemoryAttributeStore>>
    {
        ItemEvaluator::new(&self.fs, &self.store, SessionTracker::new(&self.store))
    }
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 + secs)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Disabled items are skipped without writes or metadata reads.
    #[test]
    fn property_disabled_item_is_inert(
        always_run in any::<bool>(),
        stamped in any::<bool>(),
        source in 0u64..10_000,
        artifact in proptest::option::of(0u64..10_000),
        reference in proptest::option::of(0u64..10_000),
    ) {
        let fixture = Fixture::new();
        fixture.options(false, always_run);
        let session = fixture.session("Debug");
        if stamped {
            fixture.stamp(&session);
        }
        fixture.files(source, artifact, reference);

        let verdict = fixture
            .evaluator()
            .evaluate_and_commit(&fixture.project, fixture.model, &session);

        prop_assert!(verdict.is_skip());
        prop_assert_eq!(verdict.reason(), &VerdictReason::RunOnBuildDisabled);
        prop_assert_eq!(fixture.store.write_count(), 0);
        prop_assert_eq!(fixture.fs.metadata_reads(), 0);
    }

    /// PROPERTY: AlwaysRun regenerates regardless of timestamps and stamps.
    #[test]
    fn property_always_run_regenerates(
        stamped in any::<bool>(),
        source in 0u64..10_000,
        artifact in proptest::option::of(0u64..10_000),
        reference in proptest::option::of(0u64..10_000),
    ) {
        let fixture = Fixture::new();
        fixture.options(true, true);
        let session = fixture.session("Debug");
        if stamped {
            fixture.stamp(&session);
        }
        fixture.files(source, artifact, reference);

        let verdict = fixture
            .evaluator()
            .evaluate(&fixture.project, fixture.model, &session);

        prop_assert!(verdict.is_regenerate());
        prop_assert_eq!(verdict.reason(), &VerdictReason::AlwaysRun);
    }

    /// PROPERTY: An artifact strictly newer than the source and the reference
    /// is up to date; moving it to or below either one makes it stale.
    #[test]
    fn property_freshness_is_monotonic(
        source in 0u64..10_000,
        reference in 0u64..10_000,
        lead in 1u64..1_000,
        lag in 0u64..1_000,
        behind_source in any::<bool>(),
    ) {
        let fixture = Fixture::new();
        fixture.options(true, false);
        let session = fixture.session("Debug");
        fixture.stamp(&session);

        let newest = source.max(reference);
        fixture.files(source, Some(newest + lead), Some(reference));
        let fresh = fixture
            .evaluator()
            .evaluate(&fixture.project, fixture.model, &session);
        prop_assert!(fresh.is_skip(), "expected skip, got {:?}", fresh);
        prop_assert_eq!(fresh.reason(), &VerdictReason::UpToDate);

        let anchor = if behind_source { source } else { reference };
        fixture.fs.set_modified(fixture.artifact(), at(anchor.saturating_sub(lag)));
        let stale = fixture
            .evaluator()
            .evaluate(&fixture.project, fixture.model, &session);
        prop_assert!(stale.is_regenerate(), "expected regenerate, got {:?}", stale);
    }

    /// PROPERTY: A stamp from another configuration forces regeneration.
    #[test]
    fn property_configuration_change_regenerates(
        source in 0u64..10_000,
        lead in 1u64..1_000,
        configuration in "[A-Za-z]{1,12}",
    ) {
        prop_assume!(configuration != "Debug");
        let fixture = Fixture::new();
        fixture.options(true, false);
        fixture.stamp(&fixture.session("Debug"));
        fixture.files(source, Some(source + lead), None);

        let verdict = fixture
            .evaluator()
            .evaluate(&fixture.project, fixture.model, &fixture.session(&configuration));

        prop_assert!(verdict.is_regenerate());
        prop_assert_eq!(verdict.reason(), &VerdictReason::SessionChanged);
    }

    /// PROPERTY: After a regenerate run refreshes the artifact, the next
    /// evaluation in the same session skips.
    #[test]
    fn property_second_evaluation_in_session_skips(
        source in 0u64..10_000,
        artifact in proptest::option::of(0u64..10_000),
    ) {
        let fixture = Fixture::new();
        fixture.options(true, false);
        let session = fixture.session("Release");
        fixture.files(source, artifact, None);
        let evaluator = fixture.evaluator();

        let first = evaluator.evaluate_and_commit(&fixture.project, fixture.model, &session);
        prop_assert!(first.is_regenerate());

        // The generator rewrote the artifact.
        fixture.fs.insert(fixture.artifact(), "public class Model { }\n", at(20_000));

        let second = evaluator.evaluate_and_commit(&fixture.project, fixture.model, &session);
        prop_assert!(second.is_skip(), "expected skip, got {:?}", second);
    }
}
