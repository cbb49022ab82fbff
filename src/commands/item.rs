use std::path::Path;

use anyhow::Result;

use ctob::domain::ports::{ItemSource, SessionSource, SessionStore};
use ctob::domain::services::SessionTracker;
use ctob::infrastructure::paths::absolute;
use ctob::infrastructure::{LocalFs, TomlAttributeStore};
use ctob::{CtobError, ExtenderRegistry, ItemEvaluator, ItemId, ItemProperties, Project, Solution};

use super::load_workspace;

fn find<'a>(solution: &'a Solution, item: &Path) -> Result<(&'a Project, ItemId)> {
    let path = absolute(item)?;
    solution
        .find_item(&path)
        .ok_or_else(|| CtobError::UnknownItem { path }.into())
}

/// `ctob set`
pub fn cmd_set(
    manifest: &Path,
    item: &Path,
    run_on_build: Option<bool>,
    always_run: Option<bool>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let workspace = load_workspace(manifest, verbose)?;
    let solution = workspace.source.solution()?;
    let (project, id) = find(&solution, item)?;
    let identity = project.identity(id);

    let registry = ExtenderRegistry::new();
    let _registrations = registry.register_defaults();
    let properties = ItemProperties::new(
        &registry,
        TomlAttributeStore::new(),
        &workspace.config.properties.extensions,
    );

    if let Some(value) = run_on_build {
        properties.set_run_on_build(&identity, value)?;
    }
    if let Some(value) = always_run {
        properties.set_always_run(&identity, value)?;
    }
    let options = properties.get(&identity)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "set",
                "command": "set",
                "item": identity.item().display().to_string(),
                "options": options,
            })
        );
    } else {
        println!("{}", identity.item().display());
        println!("  RunCustomToolOnBuild = {}", options.run_on_build);
        println!("  AlwaysRun            = {}", options.always_run);
    }
    Ok(())
}

/// `ctob show`
pub fn cmd_show(
    manifest: &Path,
    item: &Path,
    configuration: Option<&str>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let workspace = load_workspace(manifest, verbose)?;
    let mut source = workspace.source;
    if let Some(configuration) = configuration {
        source = source.with_configuration(configuration);
    }
    let config = workspace.config;
    let solution = source.solution()?;
    let (project, id) = find(&solution, item)?;
    let identity = project.identity(id);
    let session = source.current();

    let store = TomlAttributeStore::new();
    let tracker = SessionTracker::new(store);
    let evaluator = ItemEvaluator::new(LocalFs, store, SessionTracker::new(store))
        .with_tokens(config.references.tokens())
        .with_mode(config.walk.session_mode);

    let options = evaluator.attributes().options(&identity)?;
    let stamp = tracker.get_stamp(&identity)?;
    let verdict = evaluator.evaluate(project, id, &session);
    let entry = project.item(id);
    let artifact = project.generated_artifact(id);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "show",
                "command": "show",
                "item": identity.item().display().to_string(),
                "project": project.name(),
                "custom_tool": entry.custom_tool(),
                "artifact": artifact.as_ref().map(|a| a.display().to_string()),
                "options": options,
                "stamp": stamp.as_ref().map(|s| serde_json::json!({
                    "solution": s.solution(),
                    "configuration": s.configuration(),
                })),
                "verdict": if verdict.is_regenerate() { "regenerate" } else { "skip" },
                "reason": verdict.reason().describe(),
            })
        );
        return Ok(());
    }

    println!("{} ({})", identity.item().display(), project.name());
    println!("  custom tool:    {}", entry.custom_tool().unwrap_or("-"));
    println!(
        "  generated:      {}",
        artifact
            .as_ref()
            .map(|a| a.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  run on build:   {}", options.run_on_build);
    println!("  always run:     {}", options.always_run);
    match &stamp {
        Some(stamp) => println!(
            "  last built on:  {} ({})",
            stamp.solution(),
            stamp.configuration()
        ),
        None => println!("  last built on:  -"),
    }
    let verdict_word = if verdict.is_regenerate() { "regenerate" } else { "skip" };
    println!("  next build:     {} ({})", verdict_word, verdict.reason());
    Ok(())
}
