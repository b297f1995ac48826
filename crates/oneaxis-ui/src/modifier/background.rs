use super::{Modifier, ModifierElement};
use oneaxis_ui_graphics::Color;

impl Modifier {
    /// Paints `color` behind the node's content. Has no effect on layout.
    ///
    /// Example: `Modifier::empty().background(Color::BLUE)`
    pub fn background(self, color: Color) -> Self {
        self.with_element(ModifierElement::Background(color))
    }
}
