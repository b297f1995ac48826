//! Layout node stored in the applier for every widget.

use std::rc::Rc;

use oneaxis_core::{Node, NodeId};
use oneaxis_ui_layout::{Axis, MeasurePolicy};

use crate::measurement_channel::{ChannelKey, ChannelSubscription};
use crate::modifier::Modifier;

/// What a node contributes beyond its geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutNodeKind {
    /// Plain container or leaf with no paint of its own.
    Layout,
    /// A run of text.
    Text(String),
    /// Invisible probe publishing its extent along `axis`.
    Probe {
        axis: Axis,
        channel: Option<ChannelKey>,
    },
}

pub struct LayoutNode {
    pub(crate) modifier: Modifier,
    pub(crate) policy: Rc<dyn MeasurePolicy>,
    pub(crate) kind: LayoutNodeKind,
    pub(crate) children: Vec<NodeId>,
    pub(crate) subscription: Option<Rc<ChannelSubscription>>,
}

impl LayoutNode {
    pub fn new(modifier: Modifier, policy: Rc<dyn MeasurePolicy>, kind: LayoutNodeKind) -> Self {
        Self {
            modifier,
            policy,
            kind,
            children: Vec::new(),
            subscription: None,
        }
    }

    /// Attaches the channel subscription delivered after each layout pass.
    pub fn with_subscription(mut self, subscription: Rc<ChannelSubscription>) -> Self {
        self.subscription = Some(subscription);
        self
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    pub fn kind(&self) -> &LayoutNodeKind {
        &self.kind
    }

    pub fn subscription(&self) -> Option<&Rc<ChannelSubscription>> {
        self.subscription.as_ref()
    }
}

impl Node for LayoutNode {
    fn insert_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }
}
