//! High level UI primitives and single-axis geometry readers built on top of
//! the OneAxis composition runtime.

pub use oneaxis_core::{Composition, Key, NodeError, NodeId};

pub mod layout;
mod measurement_channel;
mod modifier;
mod renderer;
mod text;
pub mod widgets;

pub use layout::{
    measure_layout, policies::*, LayoutBox, LayoutEngine, LayoutMeasurements, LayoutNodeData,
    LayoutNodeKind, LayoutTree,
};
pub use measurement_channel::{
    ChannelKey, ChannelSubscription, MergePolicy, PublicationCollector, AXIS_VALUE_DEFAULT,
};
pub use modifier::{FillDirection, Modifier};
pub use oneaxis_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};
pub use oneaxis_ui_layout::{
    Alignment, Arrangement, Axis, Constraints, CrossAxisAlignment, HorizontalAlignment,
    LinearArrangement, Measurable, MeasurePolicy, MeasureResult, Placeable, Placement,
    VerticalAlignment,
};
pub use renderer::{HeadlessRenderer, PaintLayer, RecordedRenderScene, RenderOp};
pub use text::{measure_text, set_text_measurer, MonospacedTextMeasurer, TextMeasurer};
pub use widgets::{
    AxisGeometryReader, AxisReaderView, Box, BoxSpec, Column, ColumnSpec, HeightReaderView,
    HorizontalGeometryReader, Layout, LayoutNode, ReaderSpec, Row, RowSpec, Spacer, Text,
    Underlay, VerticalGeometryReader, WidthReaderView,
};

pub mod prelude {
    pub use crate::modifier::Modifier;
    pub use crate::widgets::{
        AxisGeometryReader, Box, BoxSpec, Column, ColumnSpec, HeightReaderView,
        HorizontalGeometryReader, ReaderSpec, Row, RowSpec, Spacer, Text, Underlay,
        VerticalGeometryReader, WidthReaderView,
    };
    pub use crate::MergePolicy;
    pub use oneaxis_ui_graphics::{Color, Size};
    pub use oneaxis_ui_layout::{Alignment, Axis, LinearArrangement};
}
