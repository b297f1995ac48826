#![allow(non_snake_case)]

use std::rc::Rc;

use super::layout::emit_layout_node;
use super::nodes::{LayoutNode, LayoutNodeKind};
use crate::layout::policies::LeafMeasurePolicy;
use crate::modifier::Modifier;
use oneaxis_core::{caller_key, NodeId};

/// Empty leaf; give it a size through `modifier`.
#[track_caller]
pub fn Spacer(modifier: Modifier) -> NodeId {
    let node = LayoutNode::new(modifier, Rc::new(LeafMeasurePolicy), LayoutNodeKind::Layout);
    emit_layout_node(caller_key(), node, || {})
}
