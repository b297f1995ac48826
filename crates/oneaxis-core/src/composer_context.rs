use std::cell::RefCell;
use std::rc::Rc;

use crate::{Composer, ComposerCore};

// Thread-local stack of Composer handles.
thread_local! {
    static COMPOSER_STACK: RefCell<Vec<Rc<ComposerCore>>> = const { RefCell::new(Vec::new()) };
}

/// Guard that pops the composer stack on drop.
#[must_use = "ComposerScopeGuard pops the composer stack on drop"]
pub struct ComposerScopeGuard;

impl Drop for ComposerScopeGuard {
    fn drop(&mut self) {
        COMPOSER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Pushes the composer onto the thread-local stack for the duration of the scope.
pub fn enter(composer: &Composer) -> ComposerScopeGuard {
    COMPOSER_STACK.with(|stack| {
        stack.borrow_mut().push(composer.clone_core());
    });
    ComposerScopeGuard
}

/// Access the current composer from the thread-local stack.
///
/// # Panics
/// Panics if there is no active composer. Composable functions may only be
/// called from inside [`Composition::render`](crate::Composition::render).
pub fn with_composer<R>(f: impl FnOnce(&Composer) -> R) -> R {
    try_with_composer(f).expect("with_composer: no active composer")
}

/// Try to access the current composer from the thread-local stack.
/// Returns None if there is no active composer.
pub fn try_with_composer<R>(f: impl FnOnce(&Composer) -> R) -> Option<R> {
    let core = COMPOSER_STACK.with(|stack| stack.borrow().last().cloned())?;
    let composer = Composer::from_core(core);
    Some(f(&composer))
}
