use std::any::Any;

use crate::{NodeError, NodeId};

/// Upcasting helper so applier entries can be downcast to their concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A node emitted into the composition tree.
pub trait Node: AsAny {
    fn insert_child(&mut self, _child: NodeId) {}

    fn children(&self) -> &[NodeId] {
        &[]
    }
}

/// In-memory arena holding the nodes emitted by one render.
#[derive(Default)]
pub struct MemoryApplier {
    nodes: Vec<Box<dyn Node>>,
    roots: Vec<NodeId>,
}

impl MemoryApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    pub(crate) fn create(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub(crate) fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        let node = self
            .nodes
            .get_mut(parent)
            .ok_or(NodeError::Missing { id: parent })?;
        node.insert_child(child);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&dyn Node, NodeError> {
        self.nodes
            .get(id)
            .map(|node| node.as_ref())
            .ok_or(NodeError::Missing { id })
    }

    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, NodeError> {
        self.node(id).map(|node| node.children().to_vec())
    }

    pub fn with_node<N: Node, R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&N) -> R,
    ) -> Result<R, NodeError> {
        let node: &dyn Node = self.node(id)?;
        let typed = node
            .as_any()
            .downcast_ref::<N>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<N>(),
            })?;
        Ok(f(typed))
    }

    pub fn with_node_mut<N: Node, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut N) -> R,
    ) -> Result<R, NodeError> {
        let node: &mut dyn Node = self
            .nodes
            .get_mut(id)
            .map(|node| node.as_mut())
            .ok_or(NodeError::Missing { id })?;
        let typed = node
            .as_any_mut()
            .downcast_mut::<N>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<N>(),
            })?;
        Ok(f(typed))
    }
}
