//! Domain Entities
//!
//! - `Item` - a project item that may declare a custom tool
//! - `Project` - arena of items forming a tree
//! - `Solution` - projects built together

mod item;
mod project;

pub use item::{Item, ItemFormat, ItemId, ItemIdentity};
pub use project::{Project, Solution};
