use oneaxis_testing::ComposeTestRule;
use oneaxis_ui::{
    AxisGeometryReader, AxisReaderView, Axis, Box, BoxSpec, HorizontalGeometryReader, MergePolicy,
    Modifier, ReaderSpec, Text, VerticalGeometryReader,
};

/// A reader whose content carries a second probe on the same axis, 50 long
/// on that axis. The content probe is placed before the reader's own
/// background probe, which spans the whole 300x100 viewport.
fn settle_with_extra_probe(axis: Axis, policy: Option<MergePolicy>) -> Vec<String> {
    let mut rule = ComposeTestRule::with_viewport(300.0, 100.0);
    rule.set_content(move || {
        let content = move |value: f32| {
            let short = match axis {
                Axis::Horizontal => Modifier::empty().width(50.0),
                Axis::Vertical => Modifier::empty().height(50.0),
            };
            Box(short, BoxSpec::default(), || {
                AxisReaderView(axis);
            });
            Text(format!("v={value}"), Modifier::empty());
        };
        match (policy, axis) {
            (Some(policy), _) => {
                AxisGeometryReader(axis, ReaderSpec::new().merge(policy), content);
            }
            (None, Axis::Horizontal) => {
                HorizontalGeometryReader(content);
            }
            (None, Axis::Vertical) => {
                VerticalGeometryReader(content);
            }
        }
    })
    .expect("settle");
    rule.texts()
}

#[test]
fn two_probes_in_one_channel_reset_to_zero_by_default() {
    assert_eq!(
        settle_with_extra_probe(Axis::Horizontal, None),
        vec!["v=0".to_string()]
    );
    assert_eq!(
        settle_with_extra_probe(Axis::Horizontal, Some(MergePolicy::ResetToDefault)),
        vec!["v=0".to_string()]
    );
}

#[test]
fn first_wins_keeps_the_content_probe() {
    assert_eq!(
        settle_with_extra_probe(Axis::Horizontal, Some(MergePolicy::FirstWins)),
        vec!["v=50".to_string()]
    );
}

#[test]
fn last_wins_keeps_the_background_probe() {
    assert_eq!(
        settle_with_extra_probe(Axis::Horizontal, Some(MergePolicy::LastWins)),
        vec!["v=300".to_string()]
    );
}

#[test]
fn max_keeps_the_widest_probe() {
    assert_eq!(
        settle_with_extra_probe(Axis::Horizontal, Some(MergePolicy::Max)),
        vec!["v=300".to_string()]
    );
}

#[test]
fn vertical_readers_merge_the_same_way() {
    let cases = [
        (None, "v=0"),
        (Some(MergePolicy::ResetToDefault), "v=0"),
        (Some(MergePolicy::FirstWins), "v=50"),
        (Some(MergePolicy::LastWins), "v=100"),
        (Some(MergePolicy::Max), "v=100"),
    ];
    for (policy, expected) in cases {
        assert_eq!(
            settle_with_extra_probe(Axis::Vertical, policy),
            vec![expected.to_string()],
            "policy {policy:?}"
        );
    }
}
