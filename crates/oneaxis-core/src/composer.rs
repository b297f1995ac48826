use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::collections::map::HashMap;
use crate::composition_local::{LocalKey, ProvidedValue};
use crate::{hash_key, Key, MemoryApplier, MutableState, Node, NodeError, NodeId, Owned};
use crate::runtime::RuntimeHandle;

const REMEMBER_SALT: u64 = 0x5EED_0F_5107;

struct GroupFrame {
    key: Key,
    occurrences: HashMap<Key, usize>,
    remember_cursor: usize,
}

impl GroupFrame {
    fn new(key: Key) -> Self {
        Self {
            key,
            occurrences: HashMap::default(),
            remember_cursor: 0,
        }
    }
}

/// Remembered values, keyed by group path.
///
/// Each render moves the live slots to `previous`; slots that the render
/// revisits migrate back to `current`, everything else is dropped when the
/// render finishes.
#[derive(Default)]
struct SlotTable {
    previous: HashMap<Key, Box<dyn Any>>,
    current: HashMap<Key, Box<dyn Any>>,
}

impl SlotTable {
    fn begin(&mut self) {
        self.previous = std::mem::take(&mut self.current);
    }

    fn finish(&mut self) -> usize {
        let dropped = self.previous.len();
        self.previous.clear();
        dropped
    }
}

struct LocalEntry {
    key: LocalKey,
    value: Rc<dyn Any>,
}

pub struct ComposerCore {
    runtime: RuntimeHandle,
    applier: RefCell<MemoryApplier>,
    slots: RefCell<SlotTable>,
    groups: RefCell<Vec<GroupFrame>>,
    parents: RefCell<Vec<NodeId>>,
    locals: RefCell<Vec<LocalEntry>>,
    error: RefCell<Option<NodeError>>,
}

impl ComposerCore {
    pub(crate) fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            applier: RefCell::new(MemoryApplier::new()),
            slots: RefCell::new(SlotTable::default()),
            groups: RefCell::new(Vec::new()),
            parents: RefCell::new(Vec::new()),
            locals: RefCell::new(Vec::new()),
            error: RefCell::new(None),
        }
    }
}

/// Handle to the composer driving the current render.
#[derive(Clone)]
pub struct Composer {
    core: Rc<ComposerCore>,
}

impl Composer {
    pub(crate) fn from_core(core: Rc<ComposerCore>) -> Self {
        Self { core }
    }

    pub(crate) fn clone_core(&self) -> Rc<ComposerCore> {
        Rc::clone(&self.core)
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.core.runtime.clone()
    }

    pub(crate) fn begin(&self, root_key: Key) {
        self.core.applier.borrow_mut().clear();
        self.core.slots.borrow_mut().begin();
        *self.core.groups.borrow_mut() = vec![GroupFrame::new(root_key)];
        self.core.parents.borrow_mut().clear();
        self.core.locals.borrow_mut().clear();
        self.core.error.borrow_mut().take();
    }

    pub(crate) fn finish(&self) -> Result<(), NodeError> {
        let dropped = self.core.slots.borrow_mut().finish();
        if dropped > 0 {
            log::trace!("dropped {dropped} remembered slot(s) left behind by the last render");
        }
        self.core.groups.borrow_mut().clear();
        match self.core.error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Key of the innermost group, stable across renders for the same call path.
    pub fn current_group_key(&self) -> Key {
        self.core
            .groups
            .borrow()
            .last()
            .map(|frame| frame.key)
            .unwrap_or_default()
    }

    /// Runs `content` inside a child group identified by `key`.
    ///
    /// Siblings sharing the same `key` (a loop calling the same composable) are
    /// told apart by their occurrence index.
    pub fn with_group<R>(&self, key: Key, content: impl FnOnce(&Composer) -> R) -> R {
        let group_key = {
            let mut groups = self.core.groups.borrow_mut();
            match groups.last_mut() {
                Some(parent) => {
                    let occurrence = parent.occurrences.entry(key).or_insert(0);
                    let group_key = hash_key(&(parent.key, key, *occurrence));
                    *occurrence += 1;
                    group_key
                }
                None => hash_key(&(key, 0usize)),
            }
        };
        self.core
            .groups
            .borrow_mut()
            .push(GroupFrame::new(group_key));
        let result = content(self);
        self.core.groups.borrow_mut().pop();
        result
    }

    /// Returns the value remembered at this position, creating it with `init`
    /// on first composition.
    pub fn remember<T: 'static>(&self, init: impl FnOnce() -> T) -> Owned<T> {
        let slot_key = {
            let mut groups = self.core.groups.borrow_mut();
            match groups.last_mut() {
                Some(frame) => {
                    let index = frame.remember_cursor;
                    frame.remember_cursor += 1;
                    hash_key(&(frame.key, REMEMBER_SALT, index))
                }
                None => hash_key(&(REMEMBER_SALT, 0usize)),
            }
        };

        let existing = self.core.slots.borrow_mut().previous.remove(&slot_key);
        let owned = match existing.map(|slot| slot.downcast::<Owned<T>>()) {
            Some(Ok(owned)) => *owned,
            Some(Err(_)) => {
                log::warn!(
                    "remembered slot {slot_key:#x} changed type to {}; reinitialising",
                    std::any::type_name::<T>()
                );
                Owned::new(init())
            }
            None => Owned::new(init()),
        };

        self.core
            .slots
            .borrow_mut()
            .current
            .insert(slot_key, Box::new(owned.clone()));
        owned
    }

    pub fn use_state<T: Clone + 'static>(&self, init: impl FnOnce() -> T) -> MutableState<T> {
        let runtime = self.runtime_handle();
        let state = self.remember(|| MutableState::with_runtime(init(), &runtime));
        state.with(|state| state.clone())
    }

    /// Emits `node` under the current parent, or as a root when there is none.
    pub fn emit_node<N: Node>(&self, node: N) -> NodeId {
        let parent = self.core.parents.borrow().last().copied();
        let mut applier = self.core.applier.borrow_mut();
        let id = applier.create(Box::new(node));
        match parent {
            Some(parent) => {
                if let Err(err) = applier.attach(parent, id) {
                    self.core.error.borrow_mut().get_or_insert(err);
                }
            }
            None => applier.push_root(id),
        }
        id
    }

    /// Runs `content` with `id` as the parent of every emitted node.
    pub fn with_parent<R>(&self, id: NodeId, content: impl FnOnce() -> R) -> R {
        self.core.parents.borrow_mut().push(id);
        let result = content();
        self.core.parents.borrow_mut().pop();
        result
    }

    pub fn with_node_mut<N: Node, R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&mut N) -> R,
    ) -> Result<R, NodeError> {
        self.core.applier.borrow_mut().with_node_mut(id, f)
    }

    pub(crate) fn push_locals(&self, values: Vec<ProvidedValue>) -> usize {
        let mut locals = self.core.locals.borrow_mut();
        let depth = locals.len();
        locals.extend(values.into_iter().map(|provided| LocalEntry {
            key: provided.key,
            value: provided.value,
        }));
        depth
    }

    pub(crate) fn pop_locals(&self, depth: usize) {
        self.core.locals.borrow_mut().truncate(depth);
    }

    pub(crate) fn read_local(&self, key: LocalKey) -> Option<Rc<dyn Any>> {
        self.core
            .locals
            .borrow()
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| Rc::clone(&entry.value))
    }

    pub(crate) fn applier(&self) -> Ref<'_, MemoryApplier> {
        self.core.applier.borrow()
    }

    pub(crate) fn applier_mut(&self) -> RefMut<'_, MemoryApplier> {
        self.core.applier.borrow_mut()
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.core.slots.borrow().current.len()
    }
}
