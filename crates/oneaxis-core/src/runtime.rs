use std::cell::Cell;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct RuntimeInner {
    invalidated: Cell<bool>,
    invalidations: Cell<u64>,
}

/// Shared handle to the scheduling state of one composition.
///
/// State objects hold a weak reference and flag the runtime when they change;
/// the host observes the flag through [`Composition::should_render`](crate::Composition::should_render).
#[derive(Clone, Default)]
pub struct RuntimeHandle {
    inner: Rc<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the composition as needing another render.
    pub fn invalidate(&self) {
        self.inner.invalidated.set(true);
        self.inner
            .invalidations
            .set(self.inner.invalidations.get().wrapping_add(1));
    }

    pub fn is_invalidated(&self) -> bool {
        self.inner.invalidated.get()
    }

    pub(crate) fn clear_invalidation(&self) {
        self.inner.invalidated.set(false);
    }

    /// Total number of invalidations since the runtime was created.
    pub fn invalidation_count(&self) -> u64 {
        self.inner.invalidations.get()
    }

    pub fn downgrade(&self) -> WeakRuntimeHandle {
        WeakRuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Non-owning runtime reference held by state objects.
#[derive(Clone, Default)]
pub struct WeakRuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl WeakRuntimeHandle {
    pub fn upgrade(&self) -> Option<RuntimeHandle> {
        self.inner.upgrade().map(|inner| RuntimeHandle { inner })
    }
}
