use super::*;
use oneaxis_ui::{Column, ColumnSpec, HorizontalGeometryReader, Modifier, Text};

#[test]
fn rule_without_content_is_idle() {
    let mut rule = ComposeTestRule::new();
    assert!(!rule.has_content());
    assert_eq!(rule.pump_until_idle(), Ok(0));
    assert!(rule.texts().is_empty());
    assert!(rule.layout_tree().is_none());
}

#[test]
fn set_content_settles_geometry_readers() {
    let mut rule = ComposeTestRule::with_viewport(240.0, 100.0);
    rule.set_content(|| {
        HorizontalGeometryReader(|width| {
            Text(format!("width={width}"), Modifier::empty());
        });
    })
    .expect("settle");

    assert_eq!(rule.texts(), vec!["width=240".to_string()]);
    let rect = rule.find_text("width=240").expect("text painted");
    // 72 wide, centred in the 240 wide reader.
    assert_eq!((rect.x, rect.y), (84.0, 0.0));
}

#[test]
fn recorder_clones_share_values() {
    let recorder = Recorder::new();
    let sink = recorder.clone();
    sink.record(1.0_f32);
    sink.record(2.0);

    assert_eq!(recorder.values(), vec![1.0, 2.0]);
    assert_eq!(recorder.first(), Some(1.0));
    assert_eq!(recorder.last(), Some(2.0));
    recorder.clear();
    assert!(sink.is_empty());
}

#[test]
fn recomposition_reruns_content() {
    let calls = Recorder::new();
    let sink = calls.clone();
    let mut rule = ComposeTestRule::with_viewport(100.0, 100.0);
    rule.set_content(move || {
        sink.record(());
        Column(Modifier::empty(), ColumnSpec::default(), || {
            Text("static", Modifier::empty());
        });
    })
    .expect("settle");
    assert_eq!(calls.len(), 1);

    rule.recomposition().expect("settle");
    assert_eq!(calls.len(), 2);
    assert_eq!(rule.texts(), vec!["static".to_string()]);
}
