//! Single-axis geometry readers
//!
//! `HorizontalGeometryReader` fills the available width, measures it with an
//! invisible probe painted behind its content and hands the width to the
//! content factory. `VerticalGeometryReader` does the same for height.
//!
//! The factory first sees `0.0`. The probe publishes during placement, the
//! reader's subscription stores the value once the pass ends, and the write
//! schedules another render in which the factory sees the real extent.

#![allow(non_snake_case)]

use std::rc::Rc;

use oneaxis_core::{
    caller_key, compositionLocalOf, with_current_composer, CompositionLocal,
    CompositionLocalProvider, NodeId,
};
use oneaxis_ui_layout::{Alignment, Axis};

use super::layout::emit_layout_node;
use super::nodes::{LayoutNode, LayoutNodeKind};
use super::underlay::emit_underlay;
use crate::layout::policies::ProbeMeasurePolicy;
use crate::measurement_channel::{ChannelKey, ChannelSubscription, MergePolicy, AXIS_VALUE_DEFAULT};
use crate::modifier::Modifier;

thread_local! {
    static LOCAL_WIDTH_CHANNEL: CompositionLocal<Option<ChannelKey>> = compositionLocalOf(|| None);
    static LOCAL_HEIGHT_CHANNEL: CompositionLocal<Option<ChannelKey>> = compositionLocalOf(|| None);
}

/// Local through which probes find the nearest enclosing reader of `axis`.
fn channel_local(axis: Axis) -> CompositionLocal<Option<ChannelKey>> {
    match axis {
        Axis::Horizontal => LOCAL_WIDTH_CHANNEL.with(CompositionLocal::clone),
        Axis::Vertical => LOCAL_HEIGHT_CHANNEL.with(CompositionLocal::clone),
    }
}

/// Configuration for a geometry reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderSpec {
    pub merge: MergePolicy,
    /// Where content narrower (or shorter) than the reader sits inside it.
    pub content_alignment: Alignment,
}

impl Default for ReaderSpec {
    fn default() -> Self {
        Self {
            merge: MergePolicy::default(),
            content_alignment: Alignment::CENTER,
        }
    }
}

impl ReaderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// How several probes publishing into this reader in one pass combine.
    pub fn merge(mut self, merge: MergePolicy) -> Self {
        self.merge = merge;
        self
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }
}

/// Reads the width offered to it and passes it to `content`.
///
/// Content is centred inside the reader; use [`AxisGeometryReader`] with a
/// [`ReaderSpec`] to align it differently.
///
/// Example:
/// ```text
/// HorizontalGeometryReader(|width| {
///     Text(format!("width={width}"), Modifier::empty());
/// });
/// ```
#[track_caller]
pub fn HorizontalGeometryReader<F>(content: F) -> NodeId
where
    F: Fn(f32) + 'static,
{
    AxisGeometryReader(Axis::Horizontal, ReaderSpec::default(), content)
}

/// Reads the height offered to it and passes it to `content`.
#[track_caller]
pub fn VerticalGeometryReader<F>(content: F) -> NodeId
where
    F: Fn(f32) + 'static,
{
    AxisGeometryReader(Axis::Vertical, ReaderSpec::default(), content)
}

#[track_caller]
pub fn AxisGeometryReader<F>(axis: Axis, spec: ReaderSpec, content: F) -> NodeId
where
    F: Fn(f32) + 'static,
{
    let key = caller_key();
    with_current_composer(|composer| {
        composer.with_group(key, |composer| {
            let channel = ChannelKey::new(axis, composer.current_group_key());
            let measured = composer.use_state(|| AXIS_VALUE_DEFAULT);
            let subscription = composer
                .remember(|| {
                    let measured = measured.clone();
                    Rc::new(ChannelSubscription::new(channel, spec.merge, move |value| {
                        measured.set(value);
                    }))
                })
                .with(Rc::clone);
            subscription.set_policy(spec.merge);

            let value = measured.value();
            let local = channel_local(axis);
            CompositionLocalProvider([local.provides(Some(channel))], || {
                emit_underlay(
                    key,
                    Modifier::empty().fill_max_along(axis),
                    spec.content_alignment,
                    Some(subscription),
                    || content(value),
                    || {
                        AxisReaderView(axis);
                    },
                )
            })
        })
    })
}

/// Invisible probe publishing its width to the nearest horizontal reader.
#[track_caller]
pub fn WidthReaderView() -> NodeId {
    AxisReaderView(Axis::Horizontal)
}

/// Invisible probe publishing its height to the nearest vertical reader.
#[track_caller]
pub fn HeightReaderView() -> NodeId {
    AxisReaderView(Axis::Vertical)
}

#[track_caller]
pub fn AxisReaderView(axis: Axis) -> NodeId {
    let channel = channel_local(axis).current();
    if channel.is_none() {
        log::trace!("{axis:?} probe has no enclosing reader; it will publish nothing");
    }
    let node = LayoutNode::new(
        Modifier::empty(),
        Rc::new(ProbeMeasurePolicy),
        LayoutNodeKind::Probe { axis, channel },
    );
    emit_layout_node(caller_key(), node, || {})
}
