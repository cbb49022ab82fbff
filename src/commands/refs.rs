use std::path::Path;

use anyhow::{Context, Result};

use ctob::domain::ports::{FileSystem, SessionSource};
use ctob::extract_references;
use ctob::infrastructure::LocalFs;

use super::load_workspace;

/// `ctob refs`
pub fn cmd_refs(
    file: &Path,
    manifest: Option<&Path>,
    configuration: Option<&str>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let fs = LocalFs;
    let text = fs
        .read(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let references = extract_references(&text);

    let resolution = match manifest {
        Some(manifest) => {
            let workspace = load_workspace(manifest, verbose)?;
            let mut source = workspace.source;
            if let Some(configuration) = configuration {
                source = source.with_configuration(configuration);
            }
            Some((workspace.config.references.tokens(), source.current()))
        }
        None => None,
    };

    if json {
        let entries: Vec<_> = references
            .iter()
            .map(|reference| {
                let mut entry = serde_json::json!({ "raw": reference.raw() });
                if let Some((tokens, session)) = &resolution {
                    let resolved = reference.resolve(tokens, session);
                    entry["resolved"] = serde_json::json!(resolved.display().to_string());
                    entry["exists"] = serde_json::json!(fs.exists(&resolved));
                }
                entry
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "refs",
                "command": "refs",
                "file": file.display().to_string(),
                "references": entries,
            })
        );
        return Ok(());
    }

    for reference in &references {
        match &resolution {
            Some((tokens, session)) => {
                let resolved = reference.resolve(tokens, session);
                let marker = if fs.exists(&resolved) { "" } else { " (missing)" };
                println!("{} -> {}{}", reference.raw(), resolved.display(), marker);
            }
            None => println!("{}", reference.raw()),
        }
    }
    Ok(())
}
