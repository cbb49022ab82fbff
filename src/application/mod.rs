//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ItemEvaluator` - Gathers inputs for one item and commits its stamp
//! - `BuildWalker` - The build-begin walk over a solution
//! - `ItemProperties` - Per-item toggles behind scoped extender registration

pub mod build;
pub mod evaluate;
pub mod properties;

pub use build::{
    BuildOptions, BuildScope, BuildWalker, ItemOutcome, WalkHandle, WalkMode, WalkReport,
};
pub use evaluate::ItemEvaluator;
pub use properties::{
    ExtenderRegistration, ExtenderRegistry, ItemProperties, DEFAULT_CATEGORIES,
    DEFAULT_PROPERTY_EXTENSIONS, EXTENDER_NAME,
};
