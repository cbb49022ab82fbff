//! Build Use Case
//!
//! The build-begin walk: visit items, decide, regenerate.

mod options;
mod result;
mod use_case;


pub use options::{BuildOptions, BuildScope, WalkMode};
pub use result::{ItemOutcome, WalkReport};
pub use use_case::{BuildWalker, WalkHandle};
