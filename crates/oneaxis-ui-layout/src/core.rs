//! Core layout traits and types shared by OneAxis widgets.

use crate::constraints::Constraints;
use oneaxis_core::NodeId;
use oneaxis_ui_graphics::Size;

/// Child that a [`MeasurePolicy`] can measure.
pub trait Measurable {
    /// Measures the child with the provided constraints.
    fn measure(&self, constraints: Constraints) -> Placeable;

    /// Identifier of the underlying layout node.
    fn node_id(&self) -> NodeId;
}

/// Outcome of measuring one child, ready to be placed by its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeable {
    node_id: NodeId,
    size: Size,
}

impl Placeable {
    pub fn new(node_id: NodeId, size: Size) -> Self {
        Self { node_id, size }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Places the child at `(x, y)` relative to its parent's content box.
    pub fn place(&self, x: f32, y: f32) -> Placement {
        Placement::new(self.node_id, x, y, 0)
    }

    /// Places the child on a paint layer other than the default.
    pub fn place_with_z_index(&self, x: f32, y: f32, z_index: i32) -> Placement {
        Placement::new(self.node_id, x, y, z_index)
    }
}

/// Policy responsible for measuring and placing children.
pub trait MeasurePolicy {
    fn measure(&self, measurables: &[&dyn Measurable], constraints: Constraints)
        -> MeasureResult;
}

/// Result of a measurement operation.
#[derive(Clone, Debug)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }
}

/// Placement information for a measured child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub node_id: NodeId,
    pub x: f32,
    pub y: f32,
    pub z_index: i32,
}

impl Placement {
    pub fn new(node_id: NodeId, x: f32, y: f32, z_index: i32) -> Self {
        Self {
            node_id,
            x,
            y,
            z_index,
        }
    }
}
