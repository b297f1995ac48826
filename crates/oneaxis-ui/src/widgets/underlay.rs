//! Underlay: primary content plus a background layer that takes the node's
//! size without contributing to it.

#![allow(non_snake_case)]

use std::cell::Cell;
use std::rc::Rc;

use oneaxis_core::{caller_key, with_current_composer, Key, NodeId};
use oneaxis_ui_layout::Alignment;

use super::nodes::{LayoutNode, LayoutNodeKind};
use crate::layout::policies::UnderlayMeasurePolicy;
use crate::measurement_channel::ChannelSubscription;
use crate::modifier::Modifier;

/// Composes `content` as the node's children, then `background` as a layer
/// measured tight to the resulting size and painted behind it. Content is
/// placed from the top-start corner.
#[track_caller]
pub fn Underlay<C, B>(modifier: Modifier, content: C, background: B) -> NodeId
where
    C: FnOnce(),
    B: FnOnce(),
{
    emit_underlay(
        caller_key(),
        modifier,
        Alignment::TOP_START,
        None,
        content,
        background,
    )
}

pub(crate) fn emit_underlay(
    key: Key,
    modifier: Modifier,
    content_alignment: Alignment,
    subscription: Option<Rc<ChannelSubscription>>,
    content: impl FnOnce(),
    background: impl FnOnce(),
) -> NodeId {
    let primary_count = Rc::new(Cell::new(0));
    let policy = UnderlayMeasurePolicy::new(Rc::clone(&primary_count), content_alignment);
    let mut node = LayoutNode::new(modifier, Rc::new(policy), LayoutNodeKind::Layout);
    if let Some(subscription) = subscription {
        node = node.with_subscription(subscription);
    }

    with_current_composer(|composer| {
        composer.with_group(key, |composer| {
            let id = composer.emit_node(node);
            composer.with_parent(id, || {
                content();
                match composer.with_node_mut(id, |node: &mut LayoutNode| node.children.len()) {
                    Ok(count) => primary_count.set(count),
                    Err(err) => log::error!("underlay {id} lost its node: {err}"),
                }
                background();
            });
            id
        })
    })
}
