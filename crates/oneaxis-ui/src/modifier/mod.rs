//! Modifier chain
//!
//! A [`Modifier`] is an ordered list of elements applied outer to inner around
//! a node's measure policy. Layout elements reshape the constraints the node
//! sees; `background` only contributes paint data.

mod background;
mod fill;
mod padding;
mod size;

pub use fill::FillDirection;

use oneaxis_ui_graphics::{Color, EdgeInsets, Point, Size};
use oneaxis_ui_layout::Constraints;

use fill::FillElement;
use size::SizeElement;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ModifierElement {
    Size(SizeElement),
    Fill(FillElement),
    Padding(EdgeInsets),
    Background(Color),
}

/// Measures whatever sits inside the current element and reports its size and
/// the offset of the node's content box relative to that inner element.
pub(crate) type MeasureNext<'a> = dyn FnMut(Constraints) -> (Size, Point) + 'a;

impl ModifierElement {
    fn measure(&self, constraints: Constraints, next: &mut MeasureNext<'_>) -> (Size, Point) {
        match self {
            ModifierElement::Size(element) => element.measure(constraints, next),
            ModifierElement::Fill(element) => element.measure(constraints, next),
            ModifierElement::Padding(insets) => padding::measure(*insets, constraints, next),
            ModifierElement::Background(_) => next(constraints),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    elements: Vec<ModifierElement>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `next` inside this modifier.
    pub fn then(mut self, next: Modifier) -> Self {
        self.elements.extend(next.elements);
        self
    }

    fn with_element(mut self, element: ModifierElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Colour painted behind the node, taken from the last `background` in the chain.
    pub fn background_color(&self) -> Option<Color> {
        self.elements.iter().rev().find_map(|element| match element {
            ModifierElement::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// Runs the chain outer to inner around `inner`, returning the outer size
    /// and the offset of the content box.
    pub(crate) fn measure(
        &self,
        constraints: Constraints,
        inner: &mut dyn FnMut(Constraints) -> Size,
    ) -> (Size, Point) {
        measure_chain(&self.elements, constraints, inner)
    }
}

fn measure_chain(
    elements: &[ModifierElement],
    constraints: Constraints,
    inner: &mut dyn FnMut(Constraints) -> Size,
) -> (Size, Point) {
    match elements.split_first() {
        None => (inner(constraints), Point::ZERO),
        Some((element, rest)) => {
            element.measure(constraints, &mut |next: Constraints| {
                measure_chain(rest, next, &mut *inner)
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
