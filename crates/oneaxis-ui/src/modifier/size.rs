use super::{MeasureNext, Modifier, ModifierElement};
use oneaxis_ui_graphics::{Point, Size};
use oneaxis_ui_layout::Constraints;

/// Preferred exact extents; `None` keeps the incoming bounds for that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SizeElement {
    width: Option<f32>,
    height: Option<f32>,
}

impl SizeElement {
    pub(crate) fn measure(
        &self,
        constraints: Constraints,
        next: &mut MeasureNext<'_>,
    ) -> (Size, Point) {
        let restricted = constraints.restrict(
            self.width.unwrap_or(constraints.min_width),
            self.width.unwrap_or(constraints.max_width),
            self.height.unwrap_or(constraints.min_height),
            self.height.unwrap_or(constraints.max_height),
        );
        let (size, offset) = next(restricted);
        (restricted.constrain(size), offset)
    }
}

impl Modifier {
    /// Requests an exact size, within the incoming constraints.
    ///
    /// Example: `Modifier::empty().size(Size::new(100.0, 40.0))`
    pub fn size(self, size: Size) -> Self {
        self.sized(Some(size.width), Some(size.height))
    }

    pub fn width(self, width: f32) -> Self {
        self.sized(Some(width), None)
    }

    pub fn height(self, height: f32) -> Self {
        self.sized(None, Some(height))
    }

    fn sized(self, width: Option<f32>, height: Option<f32>) -> Self {
        let clean = |value: Option<f32>| value.map(|v| v.max(0.0));
        self.with_element(ModifierElement::Size(SizeElement {
            width: clean(width),
            height: clean(height),
        }))
    }
}
