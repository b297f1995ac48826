//! Assertion helpers for layout geometry and rendered text.

use oneaxis_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual} (diff: {diff})"
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{msg} - x"));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{msg} - y"));
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{msg} - width"));
    assert_approx_eq(actual.height, expected.height, tolerance, &format!("{msg} - height"));
}

/// Assert that a list contains a specific text fragment.
pub fn assert_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        texts.iter().any(|t| t.contains(fragment)),
        "{msg}: text '{fragment}' not found in {texts:?}"
    );
}

/// Assert that a list does not contain a specific text fragment.
pub fn assert_not_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        !texts.iter().any(|t| t.contains(fragment)),
        "{msg}: text '{fragment}' unexpectedly found in {texts:?}"
    );
}
