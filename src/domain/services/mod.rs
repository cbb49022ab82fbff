//! Domain Services
//!
//! Pure business logic operating on entities and ports.
//!
//! - `Attributes` - typed get/set over the attribute store port
//! - `ReferenceExtractor` - finds reference declarations in template text
//! - `FreshnessEvaluator` - the regenerate/skip decision
//! - `SessionTracker` - per-item session stamps on attributes

mod attributes;
mod freshness;
mod reference_extractor;
mod session_tracker;

pub use attributes::{format_bool, parse_bool, Attributes};
pub use freshness::{FreshnessEvaluator, FreshnessInput, SessionMode};
pub use reference_extractor::{extract_references, ReferenceExtractor};
pub use session_tracker::SessionTracker;
