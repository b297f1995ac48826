use super::*;

fn measure_with(modifier: &Modifier, constraints: Constraints, natural: Size) -> (Size, Point, Constraints) {
    let mut seen = None;
    let (size, offset) = modifier.measure(constraints, &mut |inner: Constraints| {
        seen = Some(inner);
        inner.constrain(natural)
    });
    (size, offset, seen.expect("inner measured"))
}

#[test]
fn padding_deflates_inner_constraints_and_offsets_content() {
    let modifier = Modifier::empty().padding(10.0);
    let (size, offset, inner) =
        measure_with(&modifier, Constraints::loose(100.0, 100.0), Size::new(20.0, 30.0));

    assert_eq!(inner.max_width, 80.0);
    assert_eq!(inner.max_height, 80.0);
    assert_eq!(size, Size::new(40.0, 50.0));
    assert_eq!(offset, Point::new(10.0, 10.0));
}

#[test]
fn fill_max_width_makes_bounded_width_tight() {
    let modifier = Modifier::empty().fill_max_width();
    let (size, _, inner) =
        measure_with(&modifier, Constraints::loose(300.0, 200.0), Size::new(40.0, 16.0));

    assert_eq!((inner.min_width, inner.max_width), (300.0, 300.0));
    assert_eq!((inner.min_height, inner.max_height), (0.0, 200.0));
    assert_eq!(size, Size::new(300.0, 16.0));
}

#[test]
fn fill_leaves_unbounded_axis_to_natural_size() {
    let modifier = Modifier::empty().fill_max_width();
    let (size, _, inner) = measure_with(
        &modifier,
        Constraints::loose(f32::INFINITY, 200.0),
        Size::new(72.0, 16.0),
    );

    assert!(!inner.has_bounded_width());
    assert_eq!(size, Size::new(72.0, 16.0));
}

#[test]
fn fill_fraction_scales_the_maximum() {
    let modifier = Modifier::empty().fill_max_height_fraction(0.25);
    let (size, _, _) =
        measure_with(&modifier, Constraints::loose(100.0, 400.0), Size::new(10.0, 10.0));
    assert_eq!(size, Size::new(10.0, 100.0));
}

#[test]
fn size_requests_exact_extent_within_incoming_range() {
    let modifier = Modifier::empty().width(120.0);
    let (size, _, inner) =
        measure_with(&modifier, Constraints::loose(100.0, 100.0), Size::new(10.0, 10.0));

    assert_eq!((inner.min_width, inner.max_width), (100.0, 100.0));
    assert_eq!(size, Size::new(100.0, 10.0));
}

#[test]
fn chain_applies_outer_to_inner() {
    let modifier = Modifier::empty()
        .padding(5.0)
        .then(Modifier::empty().fill_max_width());
    let (size, offset, inner) =
        measure_with(&modifier, Constraints::loose(100.0, 100.0), Size::new(10.0, 10.0));

    assert_eq!((inner.min_width, inner.max_width), (90.0, 90.0));
    assert_eq!(size, Size::new(100.0, 20.0));
    assert_eq!(offset, Point::new(5.0, 5.0));
}

#[test]
fn background_does_not_affect_layout_and_last_one_wins() {
    let modifier = Modifier::empty()
        .background(Color::RED)
        .then(Modifier::empty().background(Color::BLUE));
    let (size, offset, _) =
        measure_with(&modifier, Constraints::loose(100.0, 100.0), Size::new(10.0, 10.0));

    assert_eq!(size, Size::new(10.0, 10.0));
    assert_eq!(offset, Point::ZERO);
    assert_eq!(modifier.background_color(), Some(Color::BLUE));
    assert_eq!(Modifier::empty().background_color(), None);
}
