//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod attribute_key;
mod options;
mod reference;
mod session;
mod verdict;

pub use attribute_key::AttributeKey;
pub use options::ItemOptions;
pub use reference::{
    PlaceholderTokens, ReferencePath, DEFAULT_CONFIGURATION_TOKEN, DEFAULT_SOLUTION_DIR_TOKEN,
};
pub use session::{SessionIdentity, SessionStamp};
pub use verdict::{Verdict, VerdictReason};
