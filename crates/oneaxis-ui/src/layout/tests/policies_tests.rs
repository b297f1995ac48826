use super::*;
use oneaxis_core::NodeId;
use oneaxis_ui_layout::{HorizontalAlignment, Placeable, VerticalAlignment};

struct Fixed {
    id: NodeId,
    size: Size,
}

impl Measurable for Fixed {
    fn measure(&self, constraints: Constraints) -> Placeable {
        Placeable::new(self.id, constraints.constrain(self.size))
    }

    fn node_id(&self) -> NodeId {
        self.id
    }
}

/// Takes whatever it is offered, like a probe.
struct Greedy {
    id: NodeId,
}

impl Measurable for Greedy {
    fn measure(&self, constraints: Constraints) -> Placeable {
        Placeable::new(self.id, constraints.max_bounded_size())
    }

    fn node_id(&self) -> NodeId {
        self.id
    }
}

#[test]
fn box_sizes_to_largest_child_and_aligns_the_rest() {
    let small = Fixed { id: 1, size: Size::new(10.0, 10.0) };
    let large = Fixed { id: 2, size: Size::new(40.0, 30.0) };
    let policy = BoxMeasurePolicy::new(Alignment::BOTTOM_END, false);

    let result = policy.measure(&[&small, &large], Constraints::loose(100.0, 100.0));
    assert_eq!(result.size, Size::new(40.0, 30.0));
    assert_eq!((result.placements[0].x, result.placements[0].y), (30.0, 20.0));
    assert_eq!((result.placements[1].x, result.placements[1].y), (0.0, 0.0));
}

#[test]
fn column_places_children_top_to_bottom() {
    let a = Fixed { id: 1, size: Size::new(20.0, 10.0) };
    let b = Fixed { id: 2, size: Size::new(40.0, 10.0) };
    let policy = FlexMeasurePolicy::column(
        LinearArrangement::spaced_by(5.0),
        HorizontalAlignment::CenterHorizontally,
    );

    let result = policy.measure(&[&a, &b], Constraints::loose(100.0, 100.0));
    assert_eq!(result.size, Size::new(40.0, 25.0));
    assert_eq!((result.placements[0].x, result.placements[0].y), (10.0, 0.0));
    assert_eq!((result.placements[1].x, result.placements[1].y), (0.0, 15.0));
}

#[test]
fn row_shares_remaining_width_in_order() {
    let a = Fixed { id: 1, size: Size::new(70.0, 10.0) };
    let b = Greedy { id: 2 };
    let policy = FlexMeasurePolicy::row(LinearArrangement::Start, VerticalAlignment::Top);

    let result = policy.measure(&[&a, &b], Constraints::loose(100.0, 20.0));
    assert_eq!(result.size, Size::new(100.0, 20.0));
    assert_eq!(result.placements[1].x, 70.0);
}

#[test]
fn underlay_ignores_background_when_sizing() {
    let primary = Fixed { id: 1, size: Size::new(50.0, 16.0) };
    let probe = Greedy { id: 2 };
    let policy = UnderlayMeasurePolicy::new(Rc::new(Cell::new(1)), Alignment::TOP_START);

    let result = policy.measure(&[&primary, &probe], Constraints::loose(300.0, 200.0));
    assert_eq!(result.size, Size::new(50.0, 16.0));
    assert_eq!(result.placements.len(), 2);
    assert_eq!(result.placements[1].z_index, -1);
    assert_eq!((result.placements[1].x, result.placements[1].y), (0.0, 0.0));
}

#[test]
fn underlay_with_stale_count_clamps_to_children() {
    let only = Fixed { id: 1, size: Size::new(8.0, 8.0) };
    let policy = UnderlayMeasurePolicy::new(Rc::new(Cell::new(5)), Alignment::TOP_START);

    let result = policy.measure(&[&only], Constraints::loose(100.0, 100.0));
    assert_eq!(result.size, Size::new(8.0, 8.0));
    assert_eq!(result.placements.len(), 1);
}

#[test]
fn probe_takes_maximum_when_bounded_minimum_otherwise() {
    let bounded = ProbeMeasurePolicy.measure(&[], Constraints::loose(300.0, 200.0));
    assert_eq!(bounded.size, Size::new(300.0, 200.0));

    let unbounded = ProbeMeasurePolicy.measure(
        &[],
        Constraints {
            min_width: 72.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: 16.0,
        },
    );
    assert_eq!(unbounded.size, Size::new(72.0, 16.0));
}

#[test]
fn text_policy_uses_thread_measurer() {
    let result = TextMeasurePolicy::new("hello").measure(&[], Constraints::loose(100.0, 100.0));
    assert_eq!(result.size, Size::new(40.0, 16.0));
}

#[test]
fn leaf_policy_takes_minimum() {
    let result = LeafMeasurePolicy.measure(&[], Constraints::tight(12.0, 4.0));
    assert_eq!(result.size, Size::new(12.0, 4.0));
}
