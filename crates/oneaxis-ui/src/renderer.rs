use crate::layout::{LayoutBox, LayoutNodeKind, LayoutTree};
use oneaxis_core::NodeId;
use oneaxis_ui_graphics::{Color, Rect};

/// Layer that a paint operation targets within the rendering pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintLayer {
    Behind,
    Content,
}

/// A rendered operation emitted by the headless renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Primitive {
        node_id: NodeId,
        layer: PaintLayer,
        rect: Rect,
        color: Color,
    },
    Text {
        node_id: NodeId,
        rect: Rect,
        value: String,
    },
}

/// A collection of render operations for a composed scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>) -> Self {
        Self { operations }
    }

    /// Returns a slice of recorded render operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<RenderOp> {
        self.operations
    }

    /// Text values in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Text { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }

    /// Rectangle of the first text op whose value equals `value`.
    pub fn find_text(&self, value: &str) -> Option<Rect> {
        self.operations.iter().find_map(|op| match op {
            RenderOp::Text { value: text, rect, .. } if text == value => Some(*rect),
            _ => None,
        })
    }

    /// Returns an iterator over primitives that target the provided paint layer.
    pub fn primitives_for(&self, layer: PaintLayer) -> impl Iterator<Item = (&Rect, &Color)> {
        self.operations.iter().filter_map(move |op| match op {
            RenderOp::Primitive {
                layer: op_layer,
                rect,
                color,
                ..
            } if *op_layer == layer => Some((rect, color)),
            _ => None,
        })
    }
}

/// A lightweight renderer that walks the layout tree and materialises paint commands.
///
/// Siblings paint in ascending z-index, so underlay layers come first. Probes
/// have no visual footprint and emit nothing.
#[derive(Default)]
pub struct HeadlessRenderer;

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, tree: &LayoutTree) -> RecordedRenderScene {
        let mut operations = Vec::new();
        self.render_box(tree.root(), &mut operations);
        RecordedRenderScene::new(operations)
    }

    fn render_box(&self, layout: &LayoutBox, operations: &mut Vec<RenderOp>) {
        if layout.node_data.is_probe() {
            return;
        }
        if let Some(color) = layout.node_data.background {
            if !color.is_transparent() {
                operations.push(RenderOp::Primitive {
                    node_id: layout.node_id,
                    layer: PaintLayer::Behind,
                    rect: layout.rect,
                    color,
                });
            }
        }
        if let LayoutNodeKind::Text(value) = &layout.node_data.kind {
            operations.push(RenderOp::Text {
                node_id: layout.node_id,
                rect: layout.rect,
                value: value.clone(),
            });
        }

        let mut children: Vec<&LayoutBox> = layout.children.iter().collect();
        children.sort_by_key(|child| child.node_data.z_index);
        for child in children {
            self.render_box(child, operations);
        }
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
