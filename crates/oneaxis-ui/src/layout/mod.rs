//! Layout engine
//!
//! Layout runs in two passes over the nodes of one render. The measure pass
//! walks the tree top-down, running each node's modifier chain around its
//! measure policy and recording the size and child placements. The placement
//! pass then resolves absolute rectangles in pre-order; this is also where
//! geometry probes publish their extent into their measurement channel.
//! Subscriptions see the publications only once placement has finished.

pub mod policies;

use std::cell::RefCell;
use std::rc::Rc;

use oneaxis_core::map::HashMap;
use oneaxis_core::{MemoryApplier, NodeError, NodeId};
use oneaxis_ui_graphics::{Color, Point, Rect, Size};
use oneaxis_ui_layout::{Constraints, Measurable, MeasurePolicy, Placeable, Placement};

use crate::measurement_channel::{ChannelSubscription, PublicationCollector};
use crate::modifier::Modifier;
use crate::widgets::nodes::LayoutNode;
pub use crate::widgets::nodes::LayoutNodeKind;

/// Result of running layout for a composed tree.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn new(root: LayoutBox) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }
}

/// Layout information for a single node, in absolute coordinates.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub node_id: NodeId,
    pub rect: Rect,
    pub node_data: LayoutNodeData,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn new(
        node_id: NodeId,
        rect: Rect,
        node_data: LayoutNodeData,
        children: Vec<LayoutBox>,
    ) -> Self {
        Self {
            node_id,
            rect,
            node_data,
            children,
        }
    }

    /// Depth-first search for the first box matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&LayoutBox) -> bool) -> Option<&LayoutBox> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// First text box whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&LayoutBox> {
        self.find(&|layout| layout.node_data.text() == Some(text))
    }

    /// Number of boxes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(LayoutBox::count).sum::<usize>()
    }
}

/// Snapshot of the data required to render a layout node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNodeData {
    pub kind: LayoutNodeKind,
    pub background: Option<Color>,
    pub z_index: i32,
}

impl LayoutNodeData {
    pub fn new(kind: LayoutNodeKind, background: Option<Color>, z_index: i32) -> Self {
        Self {
            kind,
            background,
            z_index,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            LayoutNodeKind::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_probe(&self) -> bool {
        matches!(self.kind, LayoutNodeKind::Probe { .. })
    }
}

/// Extension trait that equips `MemoryApplier` with layout computation.
pub trait LayoutEngine {
    /// Measures, places and then delivers channel publications.
    fn compute_layout(&mut self, root: NodeId, max_size: Size) -> Result<LayoutTree, NodeError>;
}

impl LayoutEngine for MemoryApplier {
    fn compute_layout(&mut self, root: NodeId, max_size: Size) -> Result<LayoutTree, NodeError> {
        let mut measurements = measure_layout(self, root, max_size)?;
        measurements.deliver();
        Ok(measurements.into_layout_tree())
    }
}

/// Output of one layout pass, before channel delivery.
#[derive(Debug)]
pub struct LayoutMeasurements {
    layout_tree: LayoutTree,
    publications: PublicationCollector,
    subscriptions: Vec<Rc<ChannelSubscription>>,
}

impl LayoutMeasurements {
    pub fn root_size(&self) -> Size {
        self.layout_tree.root().rect.size()
    }

    pub fn layout_tree(&self) -> &LayoutTree {
        &self.layout_tree
    }

    pub fn into_layout_tree(self) -> LayoutTree {
        self.layout_tree
    }

    pub fn publications(&self) -> &PublicationCollector {
        &self.publications
    }

    /// Hands every subscription its channel's publications. Returns how many
    /// subscriptions received a changed value.
    ///
    /// Callbacks typically write composition state, so callers should not be
    /// holding the applier while this runs.
    pub fn deliver(&mut self) -> usize {
        let mut delivered = 0;
        for subscription in &self.subscriptions {
            let values = self.publications.take(subscription.key());
            if subscription.deliver(&values).is_some() {
                delivered += 1;
            }
        }
        if !self.publications.is_empty() {
            log::debug!(
                "{} measurement channel(s) published without a subscriber",
                self.publications.unclaimed()
            );
        }
        delivered
    }
}

/// Runs the measure and placement passes for the tree rooted at `root`.
pub fn measure_layout(
    applier: &MemoryApplier,
    root: NodeId,
    max_size: Size,
) -> Result<LayoutMeasurements, NodeError> {
    let pass = LayoutPass::new(applier);
    pass.measure_node(root, Constraints::loose(max_size.width, max_size.height));
    if let Some(err) = pass.error.borrow_mut().take() {
        return Err(err);
    }

    let mut publications = PublicationCollector::default();
    let mut subscriptions = Vec::new();
    let root_box = pass.place_node(
        root,
        Point::ZERO,
        0,
        &mut publications,
        &mut subscriptions,
    )?;
    log::trace!(
        "laid out {} box(es), {} subscription(s)",
        root_box.count(),
        subscriptions.len()
    );
    Ok(LayoutMeasurements {
        layout_tree: LayoutTree::new(root_box),
        publications,
        subscriptions,
    })
}

#[derive(Debug)]
struct MeasuredNode {
    size: Size,
    content_offset: Point,
    placements: Vec<Placement>,
}

struct LayoutPass<'a> {
    applier: &'a MemoryApplier,
    measured: RefCell<HashMap<NodeId, MeasuredNode>>,
    error: RefCell<Option<NodeError>>,
}

impl<'a> LayoutPass<'a> {
    fn new(applier: &'a MemoryApplier) -> Self {
        Self {
            applier,
            measured: RefCell::new(HashMap::default()),
            error: RefCell::new(None),
        }
    }

    fn record_error(&self, err: NodeError) {
        log::warn!("layout failed: {err}");
        self.error.borrow_mut().get_or_insert(err);
    }

    fn measure_node(&self, id: NodeId, constraints: Constraints) -> Size {
        let snapshot = self.applier.with_node::<LayoutNode, _>(id, |node| {
            (
                node.modifier.clone(),
                Rc::clone(&node.policy),
                node.children.clone(),
            )
        });
        let (modifier, policy, children): (Modifier, Rc<dyn MeasurePolicy>, Vec<NodeId>) =
            match snapshot {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    self.record_error(err);
                    return Size::ZERO;
                }
            };

        let measurables: Vec<NodeMeasurable<'_, 'a>> = children
            .iter()
            .map(|&child| NodeMeasurable { pass: self, id: child })
            .collect();
        let refs: Vec<&dyn Measurable> = measurables
            .iter()
            .map(|measurable| measurable as &dyn Measurable)
            .collect();

        let mut placements = Vec::new();
        let (size, content_offset) = modifier.measure(constraints, &mut |inner: Constraints| {
            let result = policy.measure(&refs, inner);
            placements = result.placements;
            result.size
        });

        self.measured.borrow_mut().insert(
            id,
            MeasuredNode {
                size,
                content_offset,
                placements,
            },
        );
        size
    }

    fn place_node(
        &self,
        id: NodeId,
        origin: Point,
        z_index: i32,
        publications: &mut PublicationCollector,
        subscriptions: &mut Vec<Rc<ChannelSubscription>>,
    ) -> Result<LayoutBox, NodeError> {
        let measured = self
            .measured
            .borrow_mut()
            .remove(&id)
            .ok_or(NodeError::MissingContext {
                id,
                reason: "node placed without being measured",
            })?;
        let (kind, background, subscription) =
            self.applier.with_node::<LayoutNode, _>(id, |node| {
                (
                    node.kind.clone(),
                    node.modifier.background_color(),
                    node.subscription.clone(),
                )
            })?;

        let rect = Rect::from_origin_size(origin, measured.size);
        if let LayoutNodeKind::Probe {
            axis,
            channel: Some(channel),
        } = &kind
        {
            publications.publish(*channel, axis.extent_of(measured.size));
        }
        if let Some(subscription) = subscription {
            subscriptions.push(subscription);
        }

        let content_origin = origin + measured.content_offset;
        let mut children = Vec::with_capacity(measured.placements.len());
        for placement in &measured.placements {
            let child_origin = content_origin + Point::new(placement.x, placement.y);
            children.push(self.place_node(
                placement.node_id,
                child_origin,
                placement.z_index,
                publications,
                subscriptions,
            )?);
        }

        Ok(LayoutBox::new(
            id,
            rect,
            LayoutNodeData::new(kind, background, z_index),
            children,
        ))
    }
}

struct NodeMeasurable<'p, 'a> {
    pass: &'p LayoutPass<'a>,
    id: NodeId,
}

impl Measurable for NodeMeasurable<'_, '_> {
    fn measure(&self, constraints: Constraints) -> Placeable {
        Placeable::new(self.id, self.pass.measure_node(self.id, constraints))
    }

    fn node_id(&self) -> NodeId {
        self.id
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
