//! ItemSource / SessionSource ports - what the host tells us about the build
//!
//! The host enumerates the solution's item tree and knows which solution and
//! configuration the current build session targets.

use crate::domain::entities::Solution;
use crate::domain::value_objects::SessionIdentity;
use crate::error::CtobResult;

/// Enumerates projects and items
pub trait ItemSource {
    /// Load the solution's item tree
    fn solution(&self) -> CtobResult<Solution>;

    /// Name of the project selected in the host, if any
    fn current_project(&self) -> Option<String> {
        None
    }
}

/// Identifies the build session in progress
pub trait SessionSource {
    fn current(&self) -> SessionIdentity;
}

/// Fixed session, e.g. from CLI arguments
#[derive(Debug, Clone)]
pub struct FixedSession(pub SessionIdentity);

impl SessionSource for FixedSession {
    fn current(&self) -> SessionIdentity {
        self.0.clone()
    }
}
