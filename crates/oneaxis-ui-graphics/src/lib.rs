//! Pure math/data for drawing & units in OneAxis
//!
//! Geometry primitives and colour definitions shared by the layout engine,
//! the headless renderer and the geometry readers.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
