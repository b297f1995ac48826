//! Layout constraints system

use crate::Axis;
use oneaxis_ui_graphics::Size;

/// Constraints used during layout measurement.
///
/// `f32::INFINITY` as a maximum means the axis is unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Constrains the provided size to fit within these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Largest size satisfying the constraints, falling back to the minimum on
    /// unbounded axes.
    pub fn max_bounded_size(&self) -> Size {
        let width = if self.has_bounded_width() {
            self.max_width
        } else {
            self.min_width
        };
        let height = if self.has_bounded_height() {
            self.max_height
        } else {
            self.min_height
        };
        Size::new(width, height)
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    pub fn is_bounded_along(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.has_bounded_width(),
            Axis::Vertical => self.has_bounded_height(),
        }
    }

    /// `(min, max)` along `axis`.
    pub fn bounds_along(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.min_width, self.max_width),
            Axis::Vertical => (self.min_height, self.max_height),
        }
    }

    /// Replaces the bounds along `axis`.
    pub fn with_bounds_along(self, axis: Axis, min: f32, max: f32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                min_width: min,
                max_width: max,
                ..self
            },
            Axis::Vertical => Self {
                min_height: min,
                max_height: max,
                ..self
            },
        }
    }

    /// Deflates constraints by the given amount on all sides.
    pub fn deflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }

    /// Narrows these constraints towards the requested bounds without ever
    /// leaving the incoming range.
    pub fn restrict(
        self,
        min_width: f32,
        max_width: f32,
        min_height: f32,
        max_height: f32,
    ) -> Self {
        let clamp_w = |value: f32| value.clamp(self.min_width, self.max_width);
        let clamp_h = |value: f32| value.clamp(self.min_height, self.max_height);
        Self {
            min_width: clamp_w(min_width),
            max_width: clamp_w(max_width).max(clamp_w(min_width)),
            min_height: clamp_h(min_height),
            max_height: clamp_h(max_height).max(clamp_h(min_height)),
        }
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
