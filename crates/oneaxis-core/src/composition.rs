use std::cell::{Ref, RefMut};
use std::rc::Rc;

use crate::composer::ComposerCore;
use crate::runtime::RuntimeHandle;
use crate::{composer_context, Composer, Key, MemoryApplier, NodeError, NodeId};

/// Owns the composer, slot table and node arena for one tree of content.
pub struct Composition {
    composer: Composer,
    runtime: RuntimeHandle,
    renders: u64,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition {
    pub fn new() -> Self {
        let runtime = RuntimeHandle::new();
        let core = Rc::new(ComposerCore::new(runtime.clone()));
        Self {
            composer: Composer::from_core(core),
            runtime,
            renders: 0,
        }
    }

    /// Composes `content` from scratch into a fresh node arena.
    ///
    /// Remembered values survive when the same call path is composed again;
    /// anything the new render does not reach is dropped.
    pub fn render(&mut self, key: Key, content: impl FnOnce()) -> Result<(), NodeError> {
        self.runtime.clear_invalidation();
        self.composer.begin(key);
        {
            let _guard = composer_context::enter(&self.composer);
            content();
        }
        self.renders += 1;
        log::trace!(
            "render #{} emitted {} node(s), {} remembered slot(s)",
            self.renders,
            self.composer.applier().len(),
            self.composer.slot_count()
        );
        self.composer.finish()
    }

    /// Returns true when state read by the last render has changed since.
    pub fn should_render(&self) -> bool {
        self.runtime.is_invalidated()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.composer.applier().roots().first().copied()
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn slot_count(&self) -> usize {
        self.composer.slot_count()
    }

    pub fn applier(&self) -> Ref<'_, MemoryApplier> {
        self.composer.applier()
    }

    pub fn applier_mut(&mut self) -> RefMut<'_, MemoryApplier> {
        self.composer.applier_mut()
    }
}
