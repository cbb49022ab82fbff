use anyhow::{bail, Result};

use ctob::domain::ports::SessionSource;
use ctob::infrastructure::{CommandGenerator, LocalFs, TomlAttributeStore};
use ctob::{BuildOptions, BuildWalker, ItemEvaluator, WalkReport};

use crate::cli::BuildArgs;

use super::{event_sink, load_workspace, session_store};

/// `ctob build` / `ctob check`
pub fn cmd_build(args: &BuildArgs, dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    let workspace = load_workspace(&args.manifest, verbose)?;
    let config = workspace.config;
    let mut source = workspace.source;
    if let Some(configuration) = &args.configuration {
        source = source.with_configuration(configuration.as_str());
    }

    let options = BuildOptions::new()
        .with_scope(args.scope.into())
        .with_project(args.project.clone())
        .with_walk_mode(args.walk_mode.map(Into::into).unwrap_or(config.walk.mode))
        .with_dry_run(dry_run);

    let evaluator = ItemEvaluator::new(
        LocalFs,
        TomlAttributeStore::new(),
        session_store(args.sidecar),
    )
    .with_tokens(config.references.tokens())
    .with_mode(config.walk.session_mode);
    let walker = BuildWalker::new(evaluator, CommandGenerator::new(source.tools().clone()));

    let sink = event_sink(json, &config, verbose > 0);
    let report = walker.run(&source, &source, &options, sink)?;

    if dry_run && !json {
        print_verdicts(&report);
    }

    if !report.is_success() {
        bail!(
            "custom tool failed for {} item(s) in {}",
            report.failed.len(),
            source.current().solution_file().display()
        );
    }
    Ok(())
}

fn print_verdicts(report: &WalkReport) {
    for outcome in &report.outcomes {
        let verdict = if outcome.regenerate { "regenerate" } else { "skip" };
        println!(
            "{:<10} {} ({})",
            verdict,
            outcome.path.display(),
            outcome.reason
        );
    }
    println!(
        "{} evaluated, {} to regenerate, {} up to date",
        report.evaluated(),
        report.regenerated.len(),
        report.skipped.len()
    );
}
