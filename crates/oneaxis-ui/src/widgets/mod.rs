//! UI Widget components

pub mod box_widget;
pub mod column;
pub mod geometry_reader;
pub mod layout;
pub mod nodes;
pub mod row;
pub mod spacer;
pub mod text;
pub mod underlay;

pub use box_widget::*;
pub use column::*;
pub use geometry_reader::*;
pub use layout::Layout;
pub use nodes::*;
pub use row::*;
pub use spacer::*;
pub use text::*;
pub use underlay::Underlay;
