//! Layout contracts & policies for OneAxis

mod alignment;
mod arrangement;
mod axis;
mod constraints;
mod core;

pub use alignment::*;
pub use arrangement::*;
pub use axis::*;
pub use constraints::*;
pub use core::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
    pub use crate::arrangement::LinearArrangement;
    pub use crate::axis::Axis;
    pub use crate::constraints::Constraints;
    pub use crate::core::{Measurable, MeasurePolicy, MeasureResult, Placeable, Placement};
}
