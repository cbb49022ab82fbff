//! Item entity - a source file in a project that may declare a custom tool

use std::path::{Path, PathBuf};

/// Index of an item inside its project's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Whether the item's text is scanned for reference declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemFormat {
    /// Template source whose directives declare reference files
    Template,
    /// Anything else; never scanned
    #[default]
    Plain,
}

impl ItemFormat {
    /// Classify `path` by extension against the scan-eligible list
    /// (case-insensitive, entries written with a leading dot).
    pub fn from_path<S: AsRef<str>>(path: &Path, template_extensions: &[S]) -> Self {
        let Some(ext) = path.extension() else {
            return ItemFormat::Plain;
        };
        let ext = format!(".{}", ext.to_string_lossy());
        if template_extensions
            .iter()
            .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(&ext))
        {
            ItemFormat::Template
        } else {
            ItemFormat::Plain
        }
    }

    pub fn is_scan_eligible(&self) -> bool {
        matches!(self, ItemFormat::Template)
    }
}

/// Identity of an item within its owning project, used to key persisted attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemIdentity {
    project: PathBuf,
    item: PathBuf,
}

impl ItemIdentity {
    pub fn new(project: impl Into<PathBuf>, item: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            item: item.into(),
        }
    }

    /// Project file owning the item
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Full path of the item
    pub fn item(&self) -> &Path {
        &self.item
    }
}

impl std::fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.item.display())
    }
}

/// A project item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    path: PathBuf,
    custom_tool: Option<String>,
    generated: Option<PathBuf>,
    format: ItemFormat,
    children: Vec<ItemId>,
}

impl Item {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            custom_tool: None,
            generated: None,
            format: ItemFormat::Plain,
            children: Vec::new(),
        }
    }

    /// Declare the custom tool that generates this item's artifact
    pub fn with_custom_tool(mut self, tool: impl Into<String>) -> Self {
        let tool = tool.into();
        self.custom_tool = if tool.is_empty() { None } else { Some(tool) };
        self
    }

    /// Declare the generated artifact path explicitly
    pub fn with_generated(mut self, generated: impl Into<PathBuf>) -> Self {
        self.generated = Some(generated.into());
        self
    }

    pub fn with_format(mut self, format: ItemFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn custom_tool(&self) -> Option<&str> {
        self.custom_tool.as_deref()
    }

    pub fn has_custom_tool(&self) -> bool {
        self.custom_tool.is_some()
    }

    /// Explicitly declared artifact path, if any
    pub fn declared_generated(&self) -> Option<&Path> {
        self.generated.as_deref()
    }

    pub fn format(&self) -> ItemFormat {
        self.format
    }

    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    /// File stem used to pair an item with its generated child
    pub(crate) fn stem(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_stem()
    }

    /// Display name (file name, or the full path when there is none)
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub(crate) fn push_child(&mut self, child: ItemId) {
        self.children.push(child);
    }
}
