use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::runtime::{RuntimeHandle, WeakRuntimeHandle};

struct StateCell<T> {
    value: RefCell<T>,
    runtime: WeakRuntimeHandle,
}

/// Observable value owned by a composition.
///
/// Writing a different value through [`MutableState::set`] invalidates the
/// runtime the state was created with, which schedules a new render.
pub struct MutableState<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn with_runtime(initial: T, runtime: &RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(initial),
                runtime: runtime.downgrade(),
            }),
        }
    }

    /// Creates a state that is not attached to any runtime. Writes never
    /// schedule a render.
    pub fn detached(initial: T) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(initial),
                runtime: WeakRuntimeHandle::default(),
            }),
        }
    }

    pub fn value(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Stores `value` without scheduling a render.
    pub fn replace(&self, value: T) -> T {
        self.inner.value.replace(value)
    }
}

impl<T: Clone + PartialEq + 'static> MutableState<T> {
    /// Stores `value` and invalidates the owning runtime if it differs from
    /// the current value. Returns true when the value changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        if let Some(runtime) = self.inner.runtime.upgrade() {
            runtime.invalidate();
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableState")
            .field(&*self.inner.value.borrow())
            .finish()
    }
}
