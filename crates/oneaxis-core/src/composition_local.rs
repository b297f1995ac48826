#![allow(non_snake_case)]

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use crate::composer_context::{try_with_composer, with_composer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalKey(usize);

thread_local! {
    static NEXT_LOCAL_KEY: Cell<usize> = const { Cell::new(1) };
}

fn next_local_key() -> LocalKey {
    NEXT_LOCAL_KEY.with(|next| {
        let key = next.get();
        next.set(key + 1);
        LocalKey(key)
    })
}

/// A value provided to one composition subtree.
pub struct ProvidedValue {
    pub(crate) key: LocalKey,
    pub(crate) value: Rc<dyn Any>,
}

/// Value implicitly available to every composable below a
/// [`CompositionLocalProvider`]. Reads outside any provider fall back to the
/// local's default.
pub struct CompositionLocal<T: Clone + 'static> {
    key: LocalKey,
    default: Rc<dyn Fn() -> T>,
}

impl<T: Clone + 'static> Clone for CompositionLocal<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            default: Rc::clone(&self.default),
        }
    }
}

impl<T: Clone + 'static> PartialEq for CompositionLocal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: Clone + 'static> Eq for CompositionLocal<T> {}

impl<T: Clone + 'static> CompositionLocal<T> {
    pub fn provides(&self, value: T) -> ProvidedValue {
        ProvidedValue {
            key: self.key,
            value: Rc::new(value),
        }
    }

    /// Returns the innermost provided value, or the default.
    pub fn current(&self) -> T {
        try_with_composer(|composer| composer.read_local(self.key))
            .flatten()
            .and_then(|value| value.downcast_ref::<T>().cloned())
            .unwrap_or_else(|| (self.default)())
    }
}

pub fn compositionLocalOf<T: Clone + 'static>(
    default: impl Fn() -> T + 'static,
) -> CompositionLocal<T> {
    CompositionLocal {
        key: next_local_key(),
        default: Rc::new(default),
    }
}

/// Makes `values` visible to everything composed inside `content`.
pub fn CompositionLocalProvider<R>(
    values: impl IntoIterator<Item = ProvidedValue>,
    content: impl FnOnce() -> R,
) -> R {
    let provided: Vec<ProvidedValue> = values.into_iter().collect();
    let depth = with_composer(|composer| composer.push_locals(provided));
    let result = content();
    with_composer(|composer| composer.pop_locals(depth));
    result
}
