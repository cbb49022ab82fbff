//! SessionStore port - where the per-item session stamp is kept
//!
//! Implemented by `SessionTracker` (item attributes) and by the legacy
//! per-project sidecar file.

use crate::domain::entities::ItemIdentity;
use crate::domain::value_objects::SessionStamp;

use super::attribute_store::AttributeResult;

pub trait SessionStore {
    /// Stamp of the last session that regenerated the item, if any
    fn get_stamp(&self, item: &ItemIdentity) -> AttributeResult<Option<SessionStamp>>;

    /// Record that the item was regenerated in the stamped session
    fn set_stamp(&self, item: &ItemIdentity, stamp: &SessionStamp) -> AttributeResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get_stamp(&self, item: &ItemIdentity) -> AttributeResult<Option<SessionStamp>> {
        (**self).get_stamp(item)
    }

    fn set_stamp(&self, item: &ItemIdentity, stamp: &SessionStamp) -> AttributeResult<()> {
        (**self).set_stamp(item, stamp)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn get_stamp(&self, item: &ItemIdentity) -> AttributeResult<Option<SessionStamp>> {
        (**self).get_stamp(item)
    }

    fn set_stamp(&self, item: &ItemIdentity, stamp: &SessionStamp) -> AttributeResult<()> {
        (**self).set_stamp(item, stamp)
    }
}
