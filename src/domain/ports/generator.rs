//! Generator port - runs an item's custom tool
//!
//! Generation itself is the host's business; the walker only decides when to
//! call it and reports failures.

use std::path::PathBuf;

use crate::domain::entities::{ItemId, Project};

/// Generator invocation errors
#[derive(Debug)]
pub enum GeneratorError {
    /// No command is configured for the item's custom tool
    NotConfigured { tool: String },
    /// The generator could not be started
    Spawn { tool: String, message: String },
    /// The generator ran and reported failure
    Failed {
        item: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::NotConfigured { tool } => {
                write!(f, "no generator configured for custom tool '{}'", tool)
            }
            GeneratorError::Spawn { tool, message } => {
                write!(f, "failed to start '{}': {}", tool, message)
            }
            GeneratorError::Failed { item, code, stderr } => {
                match code {
                    Some(code) => {
                        write!(f, "generator for {} exited with {}", item.display(), code)?
                    }
                    None => write!(f, "generator for {} was terminated", item.display())?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Runs the custom tool of one item
pub trait Generator {
    fn run(&self, project: &Project, item: ItemId) -> Result<(), GeneratorError>;
}

impl<T: Generator + ?Sized> Generator for &T {
    fn run(&self, project: &Project, item: ItemId) -> Result<(), GeneratorError> {
        (**self).run(project, item)
    }
}
