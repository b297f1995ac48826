//! Text measurement
//!
//! There is no font stack; text is measured by a per-thread [`TextMeasurer`].
//! The default treats every character as one fixed-width cell.

use std::cell::RefCell;
use std::rc::Rc;

use oneaxis_ui_graphics::Size;

pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Size;
}

/// Fixed-width cells: `char_width` per character, `line_height` per line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str) -> Size {
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        Size::new(
            widest as f32 * self.char_width,
            lines as f32 * self.line_height,
        )
    }
}

thread_local! {
    static TEXT_MEASURER: RefCell<Rc<dyn TextMeasurer>> =
        RefCell::new(Rc::new(MonospacedTextMeasurer::default()));
}

/// Installs `measurer` for every layout pass run on this thread.
pub fn set_text_measurer(measurer: impl TextMeasurer + 'static) {
    TEXT_MEASURER.with(|current| *current.borrow_mut() = Rc::new(measurer));
}

pub fn measure_text(text: &str) -> Size {
    let measurer = TEXT_MEASURER.with(|current| Rc::clone(&current.borrow()));
    measurer.measure(text)
}
