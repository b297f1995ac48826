use super::{MeasureNext, Modifier, ModifierElement};
use oneaxis_ui_graphics::{EdgeInsets, Point, Size};
use oneaxis_ui_layout::Constraints;

pub(crate) fn measure(
    insets: EdgeInsets,
    constraints: Constraints,
    next: &mut MeasureNext<'_>,
) -> (Size, Point) {
    let horizontal = insets.horizontal_sum();
    let vertical = insets.vertical_sum();
    let (inner, offset) = next(constraints.deflate(horizontal, vertical));
    let size = constraints.constrain(Size::new(
        inner.width + horizontal,
        inner.height + vertical,
    ));
    (size, Point::new(offset.x + insets.left, offset.y + insets.top))
}

impl Modifier {
    /// Uniform padding on every edge.
    pub fn padding(self, all: f32) -> Self {
        self.padding_insets(EdgeInsets::uniform(all))
    }

    pub fn padding_symmetric(self, horizontal: f32, vertical: f32) -> Self {
        self.padding_insets(EdgeInsets::symmetric(horizontal, vertical))
    }

    pub fn padding_insets(self, insets: EdgeInsets) -> Self {
        self.with_element(ModifierElement::Padding(insets))
    }
}
