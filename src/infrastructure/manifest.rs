//! Solution manifest
//!
//! A TOML description of the solution the host would otherwise enumerate:
//! projects, their item trees, custom tools and the commands that run them.
//!
//! ```toml
//! solution = "App.sln"
//! configuration = "Debug"
//!
//! [tools.TextTemplatingFileGenerator]
//! command = "t4 {input} -out {output}"
//!
//! [[projects]]
//! name = "App"
//! file = "App/App.csproj"
//!
//! [[projects.items]]
//! path = "Model.tt"
//! custom_tool = "TextTemplatingFileGenerator"
//! children = [{ path = "Model.cs" }]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{Item, ItemFormat, ItemId, Project, Solution};
use crate::domain::ports::{ItemSource, SessionSource};
use crate::domain::value_objects::SessionIdentity;
use crate::error::{CtobError, CtobResult};
use crate::infrastructure::paths::{absolute, normalize};

pub const DEFAULT_CONFIGURATION: &str = "Debug";

/// How a custom tool is invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolSpec {
    /// Command line; `{input}`, `{output}` and `{dir}` are substituted
    pub command: String,
    /// Extension of the output when the item declares no artifact
    #[serde(default = "default_output_extension")]
    pub extension: String,
}

fn default_output_extension() -> String {
    "cs".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    solution: Option<PathBuf>,
    #[serde(default)]
    configuration: Option<String>,
    #[serde(default)]
    current_project: Option<String>,
    #[serde(default)]
    tools: BTreeMap<String, ToolSpec>,
    #[serde(default)]
    projects: Vec<ManifestProject>,
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestProject {
    name: String,
    file: PathBuf,
    #[serde(default)]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestItem {
    path: PathBuf,
    #[serde(default)]
    custom_tool: Option<String>,
    #[serde(default)]
    generated: Option<PathBuf>,
    #[serde(default)]
    children: Vec<ManifestItem>,
}

/// Item source and session source backed by a manifest file
#[derive(Debug, Clone)]
pub struct ManifestItemSource {
    solution: Solution,
    configuration: String,
    current_project: Option<String>,
    tools: BTreeMap<String, ToolSpec>,
}

impl ManifestItemSource {
    /// Load `manifest`, classifying items against `template_extensions`
    pub fn load<S: AsRef<str>>(manifest: &Path, template_extensions: &[S]) -> CtobResult<Self> {
        let content = fs::read_to_string(manifest)?;
        let file: ManifestFile =
            toml::from_str(&content).map_err(|e| CtobError::ManifestParse {
                file: manifest.to_path_buf(),
                message: e.to_string(),
            })?;

        let manifest_dir = absolute(manifest.parent().unwrap_or_else(|| Path::new("")))?;
        let solution_file = normalize(
            &file
                .solution
                .map(|s| manifest_dir.join(s))
                .unwrap_or_else(|| manifest_dir.join(manifest.file_name().unwrap_or_default())),
        );

        let mut solution = Solution::new(solution_file);
        for project in &file.projects {
            solution.push(build_project(&manifest_dir, project, template_extensions));
        }

        Ok(Self {
            solution,
            configuration: file
                .configuration
                .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string()),
            current_project: file.current_project,
            tools: file.tools,
        })
    }

    /// Override the active configuration
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = configuration.into();
        self
    }

    pub fn tools(&self) -> &BTreeMap<String, ToolSpec> {
        &self.tools
    }
}

fn build_project<S: AsRef<str>>(
    manifest_dir: &Path,
    spec: &ManifestProject,
    template_extensions: &[S],
) -> Project {
    let file = normalize(&manifest_dir.join(&spec.file));
    let mut project = Project::new(&spec.name, &file);
    let project_dir = project.dir().to_path_buf();
    for item in &spec.items {
        add_item(&mut project, &project_dir, None, item, template_extensions);
    }
    project
}

fn add_item<S: AsRef<str>>(
    project: &mut Project,
    project_dir: &Path,
    parent: Option<ItemId>,
    spec: &ManifestItem,
    template_extensions: &[S],
) {
    let path = normalize(&project_dir.join(&spec.path));
    let format = ItemFormat::from_path(&path, template_extensions);
    let mut item = Item::new(path).with_format(format);
    if let Some(tool) = &spec.custom_tool {
        item = item.with_custom_tool(tool.as_str());
    }
    if let Some(generated) = &spec.generated {
        item = item.with_generated(project_dir.join(generated));
    }

    let id = match parent {
        Some(parent) => project.add_child(parent, item),
        None => project.add_root(item),
    };
    for child in &spec.children {
        add_item(project, project_dir, Some(id), child, template_extensions);
    }
}

impl ItemSource for ManifestItemSource {
    fn solution(&self) -> CtobResult<Solution> {
        Ok(self.solution.clone())
    }

    fn current_project(&self) -> Option<String> {
        self.current_project.clone()
    }
}

impl SessionSource for ManifestItemSource {
    fn current(&self) -> SessionIdentity {
        SessionIdentity::new(self.solution.file(), &self.configuration)
    }
}
