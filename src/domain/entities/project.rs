//! Project and solution entities
//!
//! Items are stored in a per-project arena and addressed by `ItemId`;
//! parent/child links are ids, never references.

use std::path::{Path, PathBuf};

use super::item::{Item, ItemId, ItemIdentity};

/// A project: a named tree of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    file: PathBuf,
    items: Vec<Item>,
    roots: Vec<ItemId>,
}

impl Project {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            items: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project file path
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Directory containing the project file
    pub fn dir(&self) -> &Path {
        self.file.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Add a top-level item
    pub fn add_root(&mut self, item: Item) -> ItemId {
        let id = self.insert(item);
        self.roots.push(id);
        id
    }

    /// Add `item` as a child of `parent`
    pub fn add_child(&mut self, parent: ItemId, item: Item) -> ItemId {
        let id = self.insert(item);
        self.items[parent.0].push_child(id);
        id
    }

    fn insert(&mut self, item: Item) -> ItemId {
        self.items.push(item);
        ItemId(self.items.len() - 1)
    }

    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate all items in insertion order
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    /// Find an item by its path
    pub fn find(&self, path: &Path) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.path() == path)
            .map(ItemId)
    }

    /// Identity used to key the item's persisted attributes
    pub fn identity(&self, id: ItemId) -> ItemIdentity {
        ItemIdentity::new(&self.file, self.item(id).path())
    }

    /// The child generated from this item: the one sharing its file stem
    pub fn generated_child(&self, id: ItemId) -> Option<ItemId> {
        let stem = self.item(id).stem()?;
        self.item(id)
            .children()
            .iter()
            .copied()
            .find(|child| self.item(*child).stem() == Some(stem))
    }

    /// Path of the generated artifact: the generated child if present,
    /// otherwise the explicitly declared path.
    pub fn generated_artifact(&self, id: ItemId) -> Option<PathBuf> {
        self.generated_child(id)
            .map(|child| self.item(child).path().to_path_buf())
            .or_else(|| self.item(id).declared_generated().map(Path::to_path_buf))
    }
}

/// A solution: the set of projects built together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    file: PathBuf,
    projects: Vec<Project>,
}

impl Solution {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            projects: Vec::new(),
        }
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn push(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name() == name)
    }

    /// Locate an item by path across all projects
    pub fn find_item(&self, path: &Path) -> Option<(&Project, ItemId)> {
        self.projects
            .iter()
            .find_map(|project| project.find(path).map(|id| (project, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_project() -> (Project, ItemId, ItemId) {
        let mut project = Project::new("App", "/src/App/App.csproj");
        let template = project.add_root(
            Item::new("/src/App/Model.tt").with_custom_tool("TextTemplatingFileGenerator"),
        );
        project.add_child(template, Item::new("/src/App/Helper.txt"));
        let generated = project.add_child(template, Item::new("/src/App/Model.cs"));
        (project, template, generated)
    }

    #[test]
    fn generated_child_matches_file_stem() {
        let (project, template, generated) = template_project();
        assert_eq!(project.generated_child(template), Some(generated));
        assert_eq!(
            project.generated_artifact(template),
            Some(PathBuf::from("/src/App/Model.cs"))
        );
    }

    #[test]
    fn declared_generated_is_fallback() {
        let mut project = Project::new("App", "/src/App/App.csproj");
        let id = project.add_root(
            Item::new("/src/App/Strings.resx").with_generated("/src/App/Strings.Designer.cs"),
        );
        assert_eq!(project.generated_child(id), None);
        assert_eq!(
            project.generated_artifact(id),
            Some(PathBuf::from("/src/App/Strings.Designer.cs"))
        );
    }

    #[test]
    fn no_artifact_without_child_or_declaration() {
        let mut project = Project::new("App", "/src/App/App.csproj");
        let id = project.add_root(Item::new("/src/App/Lonely.tt"));
        assert_eq!(project.generated_artifact(id), None);
    }

    #[test]
    fn find_and_identity() {
        let (project, template, _) = template_project();
        assert_eq!(project.find(Path::new("/src/App/Model.tt")), Some(template));
        let identity = project.identity(template);
        assert_eq!(identity.project(), Path::new("/src/App/App.csproj"));
        assert_eq!(project.dir(), Path::new("/src/App"));
    }

    #[test]
    fn solution_finds_item_across_projects() {
        let (project, template, _) = template_project();
        let solution = Solution::new("/src/App.sln")
            .with_project(Project::new("Empty", "/src/Empty/Empty.csproj"))
            .with_project(project);
        let (owner, id) = solution.find_item(Path::new("/src/App/Model.tt")).unwrap();
        assert_eq!(owner.name(), "App");
        assert_eq!(id, template);
        assert!(solution.project("Empty").unwrap().is_empty());
    }
}
