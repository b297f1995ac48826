use super::*;
use oneaxis_ui::{HorizontalGeometryReader, Modifier, Spacer, Text};

fn width_label_shell(width: f32) -> AppShell {
    AppShell::new(ShellConfig::new().viewport(width, 100.0), || {
        HorizontalGeometryReader(|width| {
            Text(format!("width={width}"), Modifier::empty());
        });
    })
}

#[test]
fn reader_settles_on_second_pass() {
    let mut shell = width_label_shell(300.0);

    assert_eq!(shell.update(), Ok(2));
    assert_eq!(shell.scene().texts().collect::<Vec<_>>(), vec!["width=300"]);
    assert!(!shell.should_update());
    assert_eq!(shell.update(), Ok(0));
}

#[test]
fn viewport_change_is_picked_up_by_the_next_update() {
    let mut shell = width_label_shell(300.0);
    shell.update().expect("settle");

    shell.set_viewport(120.0, 100.0);
    assert!(shell.should_update());
    shell.update().expect("settle");
    assert_eq!(shell.scene().texts().collect::<Vec<_>>(), vec!["width=120"]);

    shell.set_viewport(120.0, 100.0);
    assert!(!shell.should_update());
}

#[test]
fn unbounded_width_converges_on_natural_extent() {
    let mut shell = AppShell::new(ShellConfig::new().viewport(f32::INFINITY, 100.0), || {
        HorizontalGeometryReader(|width| {
            Text(format!("w={width}"), Modifier::empty());
        });
    });

    // "w=0" is 24 wide, "w=24" is 32 wide, "w=32" stays 32 wide.
    assert_eq!(shell.update(), Ok(3));
    assert_eq!(shell.scene().texts().collect::<Vec<_>>(), vec!["w=32"]);
}

#[test]
fn content_growing_with_its_own_measurement_never_settles() {
    let config = ShellConfig::new()
        .viewport(f32::INFINITY, 100.0)
        .max_settle_passes(4);
    let mut shell = AppShell::new(config, || {
        HorizontalGeometryReader(|width| {
            Spacer(Modifier::empty().width(width + 8.0));
        });
    });

    assert_eq!(shell.update(), Err(ShellError::Unsettled { passes: 4 }));
}

#[test]
fn empty_content_has_no_root() {
    let mut shell = AppShell::new(ShellConfig::default(), || {});
    assert_eq!(shell.update(), Err(ShellError::NoRoot));
}

#[test]
fn shell_errors_render_readably() {
    let err: ShellError = NodeError::Missing { id: 3 }.into();
    assert_eq!(err.to_string(), "node 3 missing");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(
        ShellError::Unsettled { passes: 16 }.to_string(),
        "layout did not settle after 16 passes"
    );
}
