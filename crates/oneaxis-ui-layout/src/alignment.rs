//! Alignment utilities for positioning content

use oneaxis_ui_graphics::Size;

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Placement along the width.
    pub horizontal: HorizontalAlignment,
    /// Placement along the height.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Combines a horizontal and a vertical component.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Children sit in the top-start corner.
    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);

    /// Children are centred on both axes.
    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );

    /// Children sit in the bottom-end corner.
    pub const BOTTOM_END: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Bottom);

    /// Offset of a `child` box aligned inside `available`.
    pub fn align(&self, available: Size, child: Size) -> (f32, f32) {
        (
            self.horizontal.align(available.width, child.width),
            self.vertical.align(available.height, child.height),
        )
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Flush with the leading edge.
    Start,
    /// Centred in the available width.
    CenterHorizontally,
    /// Flush with the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Offset from the leading edge for a `child` wide box in `available` width.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => ((available - child) / 2.0).max(0.0),
            HorizontalAlignment::End => (available - child).max(0.0),
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Flush with the top edge.
    Top,
    /// Centred in the available height.
    CenterVertically,
    /// Flush with the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// Offset from the top edge for a `child` tall box in `available` height.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => ((available - child) / 2.0).max(0.0),
            VerticalAlignment::Bottom => (available - child).max(0.0),
        }
    }
}

/// Cross-axis alignment for flex children, independent of direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    /// Top of a Row, leading edge of a Column.
    Start,
    /// Centred across the main axis.
    Center,
    /// Bottom of a Row, trailing edge of a Column.
    End,
}

impl CrossAxisAlignment {
    /// Offset along the cross axis for a `child` extent in `available` space.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            CrossAxisAlignment::Start => 0.0,
            CrossAxisAlignment::Center => ((available - child) / 2.0).max(0.0),
            CrossAxisAlignment::End => (available - child).max(0.0),
        }
    }
}

impl From<HorizontalAlignment> for CrossAxisAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Start => CrossAxisAlignment::Start,
            HorizontalAlignment::CenterHorizontally => CrossAxisAlignment::Center,
            HorizontalAlignment::End => CrossAxisAlignment::End,
        }
    }
}

impl From<VerticalAlignment> for CrossAxisAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => CrossAxisAlignment::Start,
            VerticalAlignment::CenterVertically => CrossAxisAlignment::Center,
            VerticalAlignment::Bottom => CrossAxisAlignment::End,
        }
    }
}
