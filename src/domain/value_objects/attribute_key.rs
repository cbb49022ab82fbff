//! Attribute keys persisted per item in the owning project.

/// Keys of the per-item string attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Whether the item's generator runs when a build begins
    RunOnBuild,
    /// Force regeneration on every build (requires `RunOnBuild`)
    AlwaysRun,
    /// Solution identity of the last session that regenerated the item
    LastBuiltOnSolution,
    /// Active configuration of the last session that regenerated the item
    LastBuiltOnConfiguration,
}

impl AttributeKey {
    /// Name under which the attribute is stored
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::RunOnBuild => "RunCustomToolOnBuild",
            AttributeKey::AlwaysRun => "AlwaysRun",
            AttributeKey::LastBuiltOnSolution => "LastBuiltOnSolution",
            AttributeKey::LastBuiltOnConfiguration => "LastBuiltOnConfiguration",
        }
    }

    pub fn all() -> &'static [AttributeKey] {
        &[
            AttributeKey::RunOnBuild,
            AttributeKey::AlwaysRun,
            AttributeKey::LastBuiltOnSolution,
            AttributeKey::LastBuiltOnConfiguration,
        ]
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
