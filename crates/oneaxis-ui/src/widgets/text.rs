#![allow(non_snake_case)]

use std::rc::Rc;

use super::layout::emit_layout_node;
use super::nodes::{LayoutNode, LayoutNodeKind};
use crate::layout::policies::TextMeasurePolicy;
use crate::modifier::Modifier;
use oneaxis_core::{caller_key, NodeId};

/// A run of text sized by the thread's text measurer.
#[track_caller]
pub fn Text(value: impl Into<String>, modifier: Modifier) -> NodeId {
    let value = value.into();
    let node = LayoutNode::new(
        modifier,
        Rc::new(TextMeasurePolicy::new(value.clone())),
        LayoutNodeKind::Text(value),
    );
    emit_layout_node(caller_key(), node, || {})
}
