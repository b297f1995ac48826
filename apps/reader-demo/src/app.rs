use oneaxis_ui::{
    Box, BoxSpec, Color, Column, ColumnSpec, HorizontalGeometryReader, LinearArrangement,
    Modifier, Row, RowSpec, Size, Spacer, Text, VerticalGeometryReader,
};

/// Below this width the labels stack vertically.
pub const COMPACT_BREAKPOINT: f32 = 480.0;

pub fn reader_app() {
    Column(
        Modifier::empty().padding(8.0),
        ColumnSpec::new().vertical_arrangement(LinearArrangement::spaced_by(8.0)),
        || {
            WidthBanner();
            ResponsiveLabels();
            HeightPanel();
        },
    );
}

/// Prints the width and draws a bar at half of it.
#[track_caller]
pub fn WidthBanner() {
    HorizontalGeometryReader(|width| {
        Column(Modifier::empty(), ColumnSpec::default(), || {
            Text(format!("width={width}"), Modifier::empty());
            Spacer(
                Modifier::empty()
                    .size(Size::new(width / 2.0, 4.0))
                    .background(Color::BLUE),
            );
        });
    });
}

/// Lays two labels out side by side, or stacked on narrow screens.
#[track_caller]
pub fn ResponsiveLabels() {
    HorizontalGeometryReader(|width| {
        let labels = || {
            Text("first", Modifier::empty());
            Text("second", Modifier::empty());
        };
        if width < COMPACT_BREAKPOINT {
            Column(Modifier::empty(), ColumnSpec::default(), labels);
        } else {
            Row(
                Modifier::empty().fill_max_width(),
                RowSpec::new().horizontal_arrangement(LinearArrangement::SpaceBetween),
                labels,
            );
        }
    });
}

/// A fixed-height panel reporting its own height.
#[track_caller]
pub fn HeightPanel() {
    Box(Modifier::empty().height(96.0), BoxSpec::default(), || {
        VerticalGeometryReader(|height| {
            Text(format!("panel height={height}"), Modifier::empty());
        });
    });
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
