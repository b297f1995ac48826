//! Fill modifiers (`fill_max_width`, `fill_max_height`, `fill_max_size`)

use super::{MeasureNext, Modifier, ModifierElement};
use oneaxis_ui_graphics::{Point, Size};
use oneaxis_ui_layout::{Axis, Constraints};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillDirection {
    Horizontal,
    Vertical,
    Both,
}

impl FillDirection {
    fn covers(self, axis: Axis) -> bool {
        match self {
            FillDirection::Both => true,
            FillDirection::Horizontal => axis.is_horizontal(),
            FillDirection::Vertical => axis.is_vertical(),
        }
    }
}

impl From<Axis> for FillDirection {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => FillDirection::Horizontal,
            Axis::Vertical => FillDirection::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FillElement {
    direction: FillDirection,
    fraction: f32,
}

impl FillElement {
    /// Makes every bounded, covered axis tight at `max * fraction`. Unbounded
    /// axes are left alone so the content keeps its natural extent.
    pub(crate) fn measure(
        &self,
        constraints: Constraints,
        next: &mut MeasureNext<'_>,
    ) -> (Size, Point) {
        let mut filled = constraints;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if !self.direction.covers(axis) || !constraints.is_bounded_along(axis) {
                continue;
            }
            let (min, max) = constraints.bounds_along(axis);
            let extent = (max * self.fraction).clamp(min, max);
            filled = filled.with_bounds_along(axis, extent, extent);
        }
        next(filled)
    }
}

impl Modifier {
    /// Have the content fill the maximum available width.
    ///
    /// Example: `Modifier::empty().fill_max_width()`
    pub fn fill_max_width(self) -> Self {
        self.fill_max_width_fraction(1.0)
    }

    pub fn fill_max_width_fraction(self, fraction: f32) -> Self {
        self.fill(FillDirection::Horizontal, fraction)
    }

    /// Have the content fill the maximum available height.
    pub fn fill_max_height(self) -> Self {
        self.fill_max_height_fraction(1.0)
    }

    pub fn fill_max_height_fraction(self, fraction: f32) -> Self {
        self.fill(FillDirection::Vertical, fraction)
    }

    /// Have the content fill the maximum available size on both axes.
    pub fn fill_max_size(self) -> Self {
        self.fill(FillDirection::Both, 1.0)
    }

    /// Fill along `axis`, used by the geometry readers.
    pub fn fill_max_along(self, axis: Axis) -> Self {
        self.fill(axis.into(), 1.0)
    }

    fn fill(self, direction: FillDirection, fraction: f32) -> Self {
        self.with_element(ModifierElement::Fill(FillElement {
            direction,
            fraction: fraction.clamp(0.0, 1.0),
        }))
    }
}
