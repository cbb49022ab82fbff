//! ctob - custom tool on build
//!
//! Decides, for every item that declares a code generator ("custom tool"),
//! whether the generator must run before a build proceeds or whether its
//! generated artifact is still valid, then runs the stale ones.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    BuildOptions, BuildScope, BuildWalker, ExtenderRegistry, ItemEvaluator, ItemProperties,
    WalkMode, WalkReport,
};
pub use config::Config;
pub use domain::entities::{Item, ItemFormat, ItemId, Project, Solution};
pub use domain::services::{extract_references, FreshnessEvaluator, SessionMode};
pub use domain::value_objects::{SessionIdentity, SessionStamp, Verdict, VerdictReason};
pub use error::{CtobError, CtobResult};
