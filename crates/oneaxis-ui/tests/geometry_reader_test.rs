use std::cell::Cell;
use std::rc::Rc;

use oneaxis_testing::{ComposeTestRule, Recorder};
use oneaxis_ui::{
    Alignment, Axis, AxisGeometryReader, Box, BoxSpec, Column, ColumnSpec, HeightReaderView,
    HorizontalGeometryReader, Modifier, ReaderSpec, Row, RowSpec, Size, Text,
    VerticalGeometryReader, WidthReaderView,
};

fn width_label(recorder: Recorder<f32>) -> impl FnMut() + 'static {
    move || {
        let recorder = recorder.clone();
        HorizontalGeometryReader(move |width| {
            recorder.record(width);
            Text(format!("width={width}"), Modifier::empty());
        });
    }
}

#[test]
fn reader_in_300_wide_parent_displays_width_300() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(width_label(Recorder::new())).expect("settle");

    assert_eq!(rule.texts(), vec!["width=300".to_string()]);
    // "width=300" is 72 wide and centred in the 300 wide reader.
    let label = rule.find_text("width=300").expect("label painted");
    assert_eq!((label.x, label.y, label.width), (114.0, 0.0, 72.0));
}

#[test]
fn content_alignment_can_be_overridden() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        AxisGeometryReader(
            Axis::Horizontal,
            ReaderSpec::new().content_alignment(Alignment::TOP_START),
            |width| {
                Text(format!("width={width}"), Modifier::empty());
            },
        );
    })
    .expect("settle");

    let label = rule.find_text("width=300").expect("label painted");
    assert_eq!((label.x, label.y), (0.0, 0.0));
}

#[test]
fn content_sees_zero_before_the_first_pass_completes() {
    let recorder = Recorder::new();
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(width_label(recorder.clone())).expect("settle");

    assert_eq!(recorder.first(), Some(0.0));
    assert_eq!(recorder.last(), Some(300.0));
}

#[test]
fn single_probe_reports_every_allotted_width() {
    for width in [0.0, 1.0, 137.5, 300.0, 1024.0] {
        let recorder = Recorder::new();
        let mut rule = ComposeTestRule::with_viewport(width, 80.0);
        rule.set_content(width_label(recorder.clone())).expect("settle");

        assert_eq!(recorder.last(), Some(width), "allotted width {width}");
    }
}

#[test]
fn resizing_replaces_the_old_measurement() {
    let recorder = Recorder::new();
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(width_label(recorder.clone())).expect("settle");
    recorder.clear();

    rule.set_viewport(120.0, 200.0).expect("settle");

    assert_eq!(recorder.values(), vec![120.0]);
    assert_eq!(rule.texts(), vec!["width=120".to_string()]);
}

#[test]
fn vertical_reader_reports_height() {
    let recorder = Recorder::new();
    let sink = recorder.clone();
    let mut rule = ComposeTestRule::with_viewport(100.0, 250.0);
    rule.set_content(move || {
        let sink = sink.clone();
        VerticalGeometryReader(move |height| {
            sink.record(height);
            Text(format!("height={height}"), Modifier::empty());
        });
    })
    .expect("settle");

    assert_eq!(recorder.first(), Some(0.0));
    assert_eq!(rule.texts(), vec!["height=250".to_string()]);

    rule.set_viewport(100.0, 90.0).expect("settle");
    assert_eq!(recorder.last(), Some(90.0));
}

#[test]
fn probe_does_not_move_content_or_siblings() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        Column(Modifier::empty(), ColumnSpec::default(), || {
            HorizontalGeometryReader(|_| {
                Text("fixed", Modifier::empty());
            });
            Text("below", Modifier::empty());
        });
    })
    .expect("settle");

    let fixed = rule.find_text("fixed").expect("fixed painted");
    let below = rule.find_text("below").expect("below painted");
    assert_eq!((fixed.x, fixed.y, fixed.width, fixed.height), (130.0, 0.0, 40.0, 16.0));
    assert_eq!((below.x, below.y), (0.0, 16.0));

    let root = rule.root().expect("layout");
    let reader = &root.children[0];
    assert_eq!(reader.rect.size(), Size::new(300.0, 16.0));

    rule.set_viewport(500.0, 200.0).expect("settle");
    let fixed_wide = rule.find_text("fixed").expect("fixed painted");
    assert_eq!(fixed_wide.size(), fixed.size());
    assert_eq!((fixed_wide.x, fixed_wide.y), (230.0, 0.0));
    assert_eq!(rule.find_text("below"), Some(below));
}

#[test]
fn height_probe_does_not_move_content_or_siblings() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        Row(Modifier::empty(), RowSpec::default(), || {
            VerticalGeometryReader(|_| {
                Text("fixed", Modifier::empty());
            });
            Text("beside", Modifier::empty());
        });
    })
    .expect("settle");

    let fixed = rule.find_text("fixed").expect("fixed painted");
    let beside = rule.find_text("beside").expect("beside painted");
    assert_eq!((fixed.x, fixed.y, fixed.width, fixed.height), (0.0, 92.0, 40.0, 16.0));
    assert_eq!((beside.x, beside.y), (40.0, 0.0));

    let root = rule.root().expect("layout");
    let reader = &root.children[0];
    assert_eq!(reader.rect.size(), Size::new(40.0, 200.0));

    rule.set_viewport(300.0, 300.0).expect("settle");
    let fixed_tall = rule.find_text("fixed").expect("fixed painted");
    assert_eq!(fixed_tall.size(), fixed.size());
    assert_eq!((fixed_tall.x, fixed_tall.y), (0.0, 142.0));
    assert_eq!(rule.find_text("beside"), Some(beside));
}

#[test]
fn unbounded_width_settles_on_natural_extent() {
    let recorder = Recorder::new();
    let mut rule = ComposeTestRule::with_viewport(f32::INFINITY, 100.0);
    rule.set_content(width_label(recorder.clone())).expect("settle");

    // "width=0" measures 56, "width=56" and "width=64" both measure 64.
    assert_eq!(recorder.last(), Some(64.0));
    assert_eq!(rule.texts(), vec!["width=64".to_string()]);
}

#[test]
fn unbounded_height_settles_on_natural_extent() {
    let recorder = Recorder::new();
    let sink = recorder.clone();
    let mut rule = ComposeTestRule::with_viewport(300.0, f32::INFINITY);
    rule.set_content(move || {
        let sink = sink.clone();
        VerticalGeometryReader(move |height| {
            sink.record(height);
            Text(format!("h={height}"), Modifier::empty());
        });
    })
    .expect("settle");

    // One line of text is 16 tall whatever it says.
    assert_eq!(recorder.values(), vec![0.0, 16.0]);
    assert_eq!(rule.texts(), vec!["h=16".to_string()]);
}

#[test]
fn unmounting_discards_the_measurement() {
    let show = Rc::new(Cell::new(true));
    let recorder = Recorder::new();
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    {
        let show = Rc::clone(&show);
        let mut content = width_label(recorder.clone());
        rule.set_content(move || {
            Column(Modifier::empty(), ColumnSpec::default(), || {
                if show.get() {
                    content();
                }
                Text("always", Modifier::empty());
            });
        })
        .expect("settle");
    }
    assert_eq!(recorder.last(), Some(300.0));

    show.set(false);
    rule.recomposition().expect("settle");
    assert_eq!(rule.texts(), vec!["always".to_string()]);

    recorder.clear();
    show.set(true);
    rule.recomposition().expect("settle");
    assert_eq!(recorder.values(), vec![0.0, 300.0]);
}

#[test]
fn nested_readers_on_one_axis_report_their_own_boxes() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        HorizontalGeometryReader(|outer| {
            Column(Modifier::empty(), ColumnSpec::default(), || {
                Text(format!("outer={outer}"), Modifier::empty());
                Box(Modifier::empty().width(120.0), BoxSpec::default(), || {
                    HorizontalGeometryReader(|inner| {
                        Text(format!("inner={inner}"), Modifier::empty());
                    });
                });
            });
        });
    })
    .expect("settle");

    assert_eq!(
        rule.texts(),
        vec!["outer=300".to_string(), "inner=120".to_string()]
    );
}

#[test]
fn probes_of_the_other_axis_do_not_reach_the_reader() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        VerticalGeometryReader(|height| {
            Box(Modifier::empty().size(Size::new(50.0, 50.0)), BoxSpec::default(), || {
                WidthReaderView();
            });
            Text(format!("height={height}"), Modifier::empty());
        });
    })
    .expect("settle");

    assert_eq!(rule.texts(), vec!["height=200".to_string()]);
}

#[test]
fn nested_vertical_readers_report_their_own_boxes() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        VerticalGeometryReader(|outer| {
            Row(Modifier::empty(), RowSpec::default(), || {
                Text(format!("outer={outer}"), Modifier::empty());
                Box(Modifier::empty().height(120.0), BoxSpec::default(), || {
                    VerticalGeometryReader(|inner| {
                        Text(format!("inner={inner}"), Modifier::empty());
                    });
                });
            });
        });
    })
    .expect("settle");

    assert_eq!(
        rule.texts(),
        vec!["outer=200".to_string(), "inner=120".to_string()]
    );
}

#[test]
fn height_probes_do_not_reach_a_width_reader() {
    let mut rule = ComposeTestRule::with_viewport(300.0, 200.0);
    rule.set_content(|| {
        HorizontalGeometryReader(|width| {
            Box(Modifier::empty().size(Size::new(50.0, 50.0)), BoxSpec::default(), || {
                HeightReaderView();
            });
            Text(format!("width={width}"), Modifier::empty());
        });
    })
    .expect("settle");

    assert_eq!(rule.texts(), vec!["width=300".to_string()]);
}
