#![allow(non_snake_case)]

use std::rc::Rc;

use oneaxis_core::{caller_key, with_current_composer, Key, NodeId};
use oneaxis_ui_layout::MeasurePolicy;

use super::nodes::{LayoutNode, LayoutNodeKind};
use crate::modifier::Modifier;

/// Emits a layout node measured by `policy`, with `content` as its children.
#[track_caller]
pub fn Layout<P, F>(modifier: Modifier, policy: P, content: F) -> NodeId
where
    P: MeasurePolicy + 'static,
    F: FnOnce(),
{
    let key = caller_key();
    emit_layout_node(
        key,
        LayoutNode::new(modifier, Rc::new(policy), LayoutNodeKind::Layout),
        content,
    )
}

pub(crate) fn emit_layout_node(key: Key, node: LayoutNode, content: impl FnOnce()) -> NodeId {
    with_current_composer(|composer| {
        composer.with_group(key, |composer| {
            let id = composer.emit_node(node);
            composer.with_parent(id, content);
            id
        })
    })
}
