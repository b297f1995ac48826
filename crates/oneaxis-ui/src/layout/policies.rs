use std::cell::Cell;
use std::rc::Rc;

use oneaxis_ui_graphics::Size;
use oneaxis_ui_layout::{
    Alignment, Arrangement, Axis, Constraints, CrossAxisAlignment, LinearArrangement,
    Measurable, MeasurePolicy, MeasureResult,
};

use crate::text::measure_text;

/// MeasurePolicy for Box layout - stacks children on top of each other.
///
/// The box is as large as its largest child, clamped to the incoming
/// constraints, and every child is positioned inside it with
/// `content_alignment`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMeasurePolicy {
    /// Where each child sits inside the box.
    pub content_alignment: Alignment,
    /// Pass the incoming minimums on to children instead of loosening them.
    pub propagate_min_constraints: bool,
}

impl BoxMeasurePolicy {
    pub fn new(content_alignment: Alignment, propagate_min_constraints: bool) -> Self {
        Self {
            content_alignment,
            propagate_min_constraints,
        }
    }
}

impl MeasurePolicy for BoxMeasurePolicy {
    fn measure(&self, measurables: &[&dyn Measurable], constraints: Constraints) -> MeasureResult {
        let child_constraints = if self.propagate_min_constraints {
            constraints
        } else {
            constraints.loosen()
        };

        let placeables: Vec<_> = measurables
            .iter()
            .map(|measurable| measurable.measure(child_constraints))
            .collect();

        let content = placeables.iter().fold(Size::ZERO, |acc, placeable| {
            Size::new(acc.width.max(placeable.width()), acc.height.max(placeable.height()))
        });
        let size = constraints.constrain(content);

        let placements = placeables
            .iter()
            .map(|placeable| {
                let (x, y) = self.content_alignment.align(size, placeable.size());
                placeable.place(x, y)
            })
            .collect();

        MeasureResult::new(size, placements)
    }
}

/// Flex layout policy shared by Row and Column.
///
/// Children are measured in order with loose constraints. Each one may take
/// the main-axis space its predecessors (and the arrangement's spacing) left
/// over; on the cross axis every child gets the full incoming maximum.
///
/// ## Sizing
///
/// - The main axis wraps the children, clamped to the incoming bounds. A
///   `fill_max_width()` on a Row therefore makes it span the parent, which
///   is what gives `SpaceBetween` room to work.
/// - The cross axis takes the largest child.
/// - When the main axis is unbounded the layout keeps its natural extent.
///
/// Children that do not fit are still placed; they simply overflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlexMeasurePolicy {
    /// Main axis direction (Horizontal for Row, Vertical for Column)
    pub axis: Axis,
    /// Distribution of children along the main axis
    pub arrangement: LinearArrangement,
    /// Alignment of every child across the main axis
    pub cross_alignment: CrossAxisAlignment,
}

impl FlexMeasurePolicy {
    /// Policy for a Row: horizontal main axis, children aligned vertically.
    pub fn row(arrangement: LinearArrangement, alignment: impl Into<CrossAxisAlignment>) -> Self {
        Self {
            axis: Axis::Horizontal,
            arrangement,
            cross_alignment: alignment.into(),
        }
    }

    /// Policy for a Column: vertical main axis, children aligned horizontally.
    pub fn column(arrangement: LinearArrangement, alignment: impl Into<CrossAxisAlignment>) -> Self {
        Self {
            axis: Axis::Vertical,
            arrangement,
            cross_alignment: alignment.into(),
        }
    }
}

impl MeasurePolicy for FlexMeasurePolicy {
    fn measure(&self, measurables: &[&dyn Measurable], constraints: Constraints) -> MeasureResult {
        let main = self.axis;
        let cross = main.cross_axis();
        let (main_min, main_max) = constraints.bounds_along(main);
        let (cross_min, cross_max) = constraints.bounds_along(cross);
        let spacing = self.arrangement.spacing();

        // Each child may use whatever main-axis space its predecessors left.
        let mut used = 0.0_f32;
        let mut cross_extent = 0.0_f32;
        let mut placeables = Vec::with_capacity(measurables.len());
        for (index, measurable) in measurables.iter().enumerate() {
            if index > 0 {
                used += spacing;
            }
            let remaining = (main_max - used).max(0.0);
            let child_constraints = Constraints::loose(0.0, 0.0)
                .with_bounds_along(main, 0.0, remaining)
                .with_bounds_along(cross, 0.0, cross_max);
            let placeable = measurable.measure(child_constraints);
            used += main.extent_of(placeable.size());
            cross_extent = cross_extent.max(cross.extent_of(placeable.size()));
            placeables.push(placeable);
        }

        let main_size = used.clamp(main_min, main_max);
        let cross_size = cross_extent.clamp(cross_min, cross_max);

        let sizes: Vec<f32> = placeables
            .iter()
            .map(|placeable| main.extent_of(placeable.size()))
            .collect();
        let mut positions = vec![0.0; sizes.len()];
        self.arrangement.arrange(main_size, &sizes, &mut positions);

        let placements = placeables
            .iter()
            .zip(positions)
            .map(|(placeable, position)| {
                let cross_offset = self
                    .cross_alignment
                    .align(cross_size, cross.extent_of(placeable.size()));
                let (x, y) = main.offset(position, cross_offset);
                placeable.place(x, y)
            })
            .collect();

        MeasureResult::new(main.size(main_size, cross_size), placements)
    }
}

/// Sizes the node from its primary children only; the remaining children form
/// a background layer measured tight to that size and painted behind.
///
/// Primary children are measured like a [`BoxMeasurePolicy`] with loosened
/// minimums. Background children are then measured with tight constraints
/// equal to the resulting size and placed at the origin with z-index `-1`,
/// so they can neither grow nor move the node.
#[derive(Clone, Debug)]
pub struct UnderlayMeasurePolicy {
    /// How many leading children are primary content. Filled in by the widget
    /// once its content has been composed.
    primary_count: Rc<Cell<usize>>,
    /// Where primary children sit inside the node.
    content_alignment: Alignment,
}

impl UnderlayMeasurePolicy {
    /// Shares `primary_count` with the widget that composes the children.
    pub fn new(primary_count: Rc<Cell<usize>>, content_alignment: Alignment) -> Self {
        Self {
            primary_count,
            content_alignment,
        }
    }
}

impl MeasurePolicy for UnderlayMeasurePolicy {
    fn measure(&self, measurables: &[&dyn Measurable], constraints: Constraints) -> MeasureResult {
        let split = self.primary_count.get().min(measurables.len());
        let (primary, background) = measurables.split_at(split);

        let primary_result =
            BoxMeasurePolicy::new(self.content_alignment, false).measure(primary, constraints);
        let size = primary_result.size;
        let layer_constraints = Constraints::tight(size.width, size.height);

        let mut placements = primary_result.placements;
        placements.extend(background.iter().map(|measurable| {
            measurable
                .measure(layer_constraints)
                .place_with_z_index(0.0, 0.0, -1)
        }));
        MeasureResult::new(size, placements)
    }
}

/// Leaf sized by the thread's text measurer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMeasurePolicy {
    text: String,
}

impl TextMeasurePolicy {
    /// Measures `text` with whatever measurer is installed when layout runs.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MeasurePolicy for TextMeasurePolicy {
    fn measure(&self, _measurables: &[&dyn Measurable], constraints: Constraints) -> MeasureResult {
        MeasureResult::new(constraints.constrain(measure_text(&self.text)), Vec::new())
    }
}

/// Leaf that takes all the space it is offered.
///
/// Bounded axes resolve to the maximum; unbounded ones fall back to the
/// minimum. Geometry readers use it for their invisible probes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProbeMeasurePolicy;

impl MeasurePolicy for ProbeMeasurePolicy {
    fn measure(&self, _measurables: &[&dyn Measurable], constraints: Constraints) -> MeasureResult {
        MeasureResult::new(constraints.max_bounded_size(), Vec::new())
    }
}

/// Leaf that takes the smallest size allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LeafMeasurePolicy;

impl MeasurePolicy for LeafMeasurePolicy {
    fn measure(&self, _measurables: &[&dyn Measurable], constraints: Constraints) -> MeasureResult {
        MeasureResult::new(
            Size::new(constraints.min_width, constraints.min_height),
            Vec::new(),
        )
    }
}

#[cfg(test)]
#[path = "tests/policies_tests.rs"]
mod tests;
