//! Session tracking on item attributes
//!
//! Stores the session stamp as two attributes written in one update.

use crate::domain::entities::ItemIdentity;
use crate::domain::ports::{AttributeResult, AttributeStore, SessionStore};
use crate::domain::value_objects::{AttributeKey, SessionStamp};

use super::attributes::Attributes;

/// Session stamps stored as `LastBuiltOnSolution` / `LastBuiltOnConfiguration`
pub struct SessionTracker<S: AttributeStore> {
    attributes: Attributes<S>,
}

impl<S: AttributeStore> SessionTracker<S> {
    pub fn new(store: S) -> Self {
        Self {
            attributes: Attributes::new(store),
        }
    }
}

impl<S: AttributeStore> SessionStore for SessionTracker<S> {
    fn get_stamp(&self, item: &ItemIdentity) -> AttributeResult<Option<SessionStamp>> {
        let Some(solution) = self
            .attributes
            .get_string(item, AttributeKey::LastBuiltOnSolution)?
        else {
            return Ok(None);
        };
        // Stamps written before configurations were tracked carry only the
        // solution; an empty configuration never matches a real one.
        let configuration = self
            .attributes
            .get_string(item, AttributeKey::LastBuiltOnConfiguration)?
            .unwrap_or_default();
        Ok(Some(SessionStamp::new(solution, configuration)))
    }

    fn set_stamp(&self, item: &ItemIdentity, stamp: &SessionStamp) -> AttributeResult<()> {
        self.attributes.set_strings(
            item,
            &[
                (AttributeKey::LastBuiltOnSolution, stamp.solution()),
                (AttributeKey::LastBuiltOnConfiguration, stamp.configuration()),
            ],
        )
    }
}
