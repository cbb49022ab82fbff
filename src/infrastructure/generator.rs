//! Command-line generator
//!
//! Runs an item's custom tool as a shell command configured per tool in the
//! solution manifest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::domain::entities::{ItemId, Project};
use crate::domain::ports::{Generator, GeneratorError};
use crate::infrastructure::manifest::ToolSpec;

/// Generator running configured commands through the platform shell
#[derive(Debug, Clone, Default)]
pub struct CommandGenerator {
    tools: BTreeMap<String, ToolSpec>,
}

impl CommandGenerator {
    pub fn new(tools: BTreeMap<String, ToolSpec>) -> Self {
        Self { tools }
    }

    /// Command line for `item` with placeholders substituted
    pub fn command_line(&self, project: &Project, item: ItemId) -> Result<String, GeneratorError> {
        let entry = project.item(item);
        let tool = entry.custom_tool().unwrap_or_default();
        let spec = self
            .tools
            .get(tool)
            .ok_or_else(|| GeneratorError::NotConfigured {
                tool: tool.to_string(),
            })?;

        let output = project
            .generated_artifact(item)
            .unwrap_or_else(|| entry.path().with_extension(&spec.extension));

        Ok(spec
            .command
            .replace("{input}", &quoted(entry.path()))
            .replace("{output}", &quoted(&output))
            .replace("{dir}", &quoted(project.dir())))
    }
}

/// Quote a path as one shell word with nothing expanded inside it
fn quoted(path: &Path) -> String {
    let path = path.display().to_string();
    if cfg!(windows) {
        format!("\"{}\"", path)
    } else {
        format!("'{}'", path.replace('\'', r"'\''"))
    }
}

fn shell(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(command_line);
        command
    } else {
        let mut command = Command::new("sh");
        command.arg("-c").arg(command_line);
        command
    }
}

impl Generator for CommandGenerator {
    fn run(&self, project: &Project, item: ItemId) -> Result<(), GeneratorError> {
        let command_line = self.command_line(project, item)?;
        let tool = project.item(item).custom_tool().unwrap_or_default().to_string();
        debug!(tool = %tool, command = %command_line, "running generator");

        let mut command = shell(&command_line);
        let dir: PathBuf = project.dir().to_path_buf();
        if dir.is_dir() {
            command.current_dir(&dir);
        }

        let output = command.output().map_err(|e| GeneratorError::Spawn {
            tool,
            message: e.to_string(),
        })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(GeneratorError::Failed {
                item: project.item(item).path().to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
