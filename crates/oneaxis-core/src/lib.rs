//! Composition runtime for OneAxis
//!
//! A deliberately small take on a Compose-style runtime: content is plain Rust
//! closures that emit nodes through the thread-local [`Composer`], values
//! survive re-renders through [`remember`], and [`MutableState`] writes flag
//! the owning [`Composition`] for another render.

#![allow(non_snake_case)]

mod applier;
mod collections;
mod composer;
pub mod composer_context;
mod composition;
mod composition_local;
mod hash;
mod owned;
mod runtime;
mod state;

use std::hash::{Hash, Hasher};
use std::panic::Location;

pub use applier::{AsAny, MemoryApplier, Node};
pub use collections::map;
pub use composer::{Composer, ComposerCore};
pub use composer_context::{try_with_composer, with_composer as with_current_composer};
pub use composition::Composition;
pub use composition_local::{
    compositionLocalOf, CompositionLocal, CompositionLocalProvider, LocalKey, ProvidedValue,
};
pub use owned::Owned;
pub use runtime::{RuntimeHandle, WeakRuntimeHandle};
pub use state::MutableState;

pub type NodeId = usize;
pub type Key = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    Missing { id: NodeId },
    TypeMismatch { id: NodeId, expected: &'static str },
    MissingContext { id: NodeId, reason: &'static str },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id} missing"),
            NodeError::TypeMismatch { id, expected } => {
                write!(f, "node {id} type mismatch; expected {expected}")
            }
            NodeError::MissingContext { id, reason } => {
                write!(f, "missing context for node {id}: {reason}")
            }
        }
    }
}

impl std::error::Error for NodeError {}

pub fn location_key(file: &str, line: u32, column: u32) -> Key {
    hash_key(&(file, line, column))
}

/// Key for the source location of the `#[track_caller]` caller.
#[track_caller]
pub fn caller_key() -> Key {
    let location = Location::caller();
    location_key(location.file(), location.line(), location.column())
}

pub(crate) fn hash_key<K: Hash>(key: &K) -> Key {
    let mut hasher = hash::default::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Remembers a value at the current position of the active composition.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Owned<T> {
    with_current_composer(|composer| composer.remember(init))
}

/// Remembers a [`MutableState`] bound to the active composition's runtime.
pub fn useState<T: Clone + 'static>(init: impl FnOnce() -> T) -> MutableState<T> {
    with_current_composer(|composer| composer.use_state(init))
}

pub fn use_state<T: Clone + 'static>(init: impl FnOnce() -> T) -> MutableState<T> {
    useState(init)
}

/// Key of the innermost composition group.
pub fn current_group_key() -> Key {
    with_current_composer(|composer| composer.current_group_key())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
