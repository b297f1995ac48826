use super::{Arrangement, LinearArrangement};

#[test]
fn space_between_pins_first_and_last() {
    let arrangement = LinearArrangement::SpaceBetween;
    let sizes = vec![10.0, 10.0, 10.0];
    let mut positions = vec![0.0; sizes.len()];
    arrangement.arrange(100.0, &sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 45.0, 90.0]);
}

#[test]
fn spaced_by_uses_fixed_spacing() {
    let arrangement = LinearArrangement::spaced_by(5.0);
    let sizes = vec![10.0, 10.0];
    let mut positions = vec![0.0; sizes.len()];
    arrangement.arrange(40.0, &sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 15.0]);
    assert_eq!(arrangement.spacing(), 5.0);
}

#[test]
fn center_and_end_shift_the_block() {
    let sizes = vec![20.0, 20.0];
    let mut positions = vec![0.0; 2];
    LinearArrangement::Center.arrange(100.0, &sizes, &mut positions);
    assert_eq!(positions, vec![30.0, 50.0]);
    LinearArrangement::End.arrange(100.0, &sizes, &mut positions);
    assert_eq!(positions, vec![60.0, 80.0]);
}

#[test]
fn overflow_never_produces_negative_offsets() {
    let sizes = vec![80.0, 80.0];
    let mut positions = vec![0.0; 2];
    LinearArrangement::End.arrange(100.0, &sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 80.0]);
}
