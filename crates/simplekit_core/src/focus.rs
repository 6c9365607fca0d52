//! Pointer focus arbitration
//!
//! Exactly one widget at a time may own pointer focus. Widgets ask for it
//! through a [`FocusArbiter`] that is handed to them at construction, so the
//! arbiter can be swapped for a recording fake in tests.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh identifier
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single-owner registry for pointer focus
pub trait FocusArbiter: Send + Sync {
    /// Ask for exclusive pointer focus. The last requester wins.
    fn request_focus(&self, id: WidgetId);

    /// Give up focus. Has no effect unless `id` currently owns it.
    fn release_focus(&self, id: WidgetId);

    /// The current focus owner, if any
    fn focused(&self) -> Option<WidgetId>;
}

/// Arbiter shared between all widgets of one dispatch loop
pub type SharedFocus = Arc<dyn FocusArbiter>;

/// Default [`FocusArbiter`] backed by a mutex-guarded slot
#[derive(Debug, Default)]
pub struct PointerFocus {
    owner: Mutex<Option<WidgetId>>,
}

impl PointerFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arbiter ready to hand out to widgets
    pub fn shared() -> SharedFocus {
        Arc::new(Self::new())
    }

    fn owner(&self) -> MutexGuard<'_, Option<WidgetId>> {
        self.owner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FocusArbiter for PointerFocus {
    fn request_focus(&self, id: WidgetId) {
        let previous = self.owner().replace(id);
        if previous != Some(id) {
            tracing::trace!(?previous, owner = %id, "pointer focus changed");
        }
    }

    fn release_focus(&self, id: WidgetId) {
        let mut owner = self.owner();
        if *owner == Some(id) {
            *owner = None;
            tracing::trace!(released = %id, "pointer focus released");
        }
    }

    fn focused(&self) -> Option<WidgetId> {
        *self.owner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
        assert_eq!(format!("{}", a), format!("#{}", a.raw()));
    }

    #[test]
    fn test_last_requester_wins() {
        let focus = PointerFocus::new();
        let a = WidgetId::next();
        let b = WidgetId::next();

        assert_eq!(focus.focused(), None);
        focus.request_focus(a);
        assert_eq!(focus.focused(), Some(a));
        focus.request_focus(b);
        assert_eq!(focus.focused(), Some(b));
    }

    #[test]
    fn test_release_only_by_owner() {
        let focus = PointerFocus::shared();
        let a = WidgetId::next();
        let b = WidgetId::next();

        focus.request_focus(a);
        focus.release_focus(b);
        assert_eq!(focus.focused(), Some(a));

        focus.release_focus(a);
        assert_eq!(focus.focused(), None);
    }
}
