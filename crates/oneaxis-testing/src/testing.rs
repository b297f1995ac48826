use std::cell::RefCell;
use std::rc::Rc;

use oneaxis_app_shell::{AppShell, ShellConfig, ShellError};
use oneaxis_core::Composition;
use oneaxis_ui::{LayoutBox, LayoutTree, RecordedRenderScene};
use oneaxis_ui_graphics::{Rect, Size};

/// Headless harness for exercising compositions in tests.
///
/// `ComposeTestRule` mirrors the ergonomics of the Jetpack Compose testing
/// APIs. It owns an [`AppShell`] with a fixed viewport and settles the
/// content after every change, so assertions always see the state a user
/// would see once geometry readers have caught up.
pub struct ComposeTestRule {
    config: ShellConfig,
    shell: Option<AppShell>,
}

impl ComposeTestRule {
    /// Create a new test rule with the default 800x600 viewport.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self::with_config(ShellConfig::new().viewport(width, height))
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            config,
            shell: None,
        }
    }

    /// Install the provided content and settle it.
    pub fn set_content(&mut self, content: impl FnMut() + 'static) -> Result<(), ShellError> {
        self.shell = Some(AppShell::new(self.config, content));
        self.pump_until_idle().map(|_| ())
    }

    /// Resize the viewport and settle again.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), ShellError> {
        self.config.viewport = Size::new(width, height);
        if let Some(shell) = self.shell.as_mut() {
            shell.set_viewport(width, height);
        }
        self.pump_until_idle().map(|_| ())
    }

    /// Force a recomposition of the installed content and settle it.
    pub fn recomposition(&mut self) -> Result<(), ShellError> {
        if let Some(shell) = self.shell.as_mut() {
            shell.invalidate();
        }
        self.pump_until_idle().map(|_| ())
    }

    /// Drive compose, layout and delivery until nothing changes. Returns the
    /// number of passes that ran.
    pub fn pump_until_idle(&mut self) -> Result<usize, ShellError> {
        match self.shell.as_mut() {
            Some(shell) => shell.update(),
            None => Ok(0),
        }
    }

    /// Returns whether user content has been installed in this rule.
    pub fn has_content(&self) -> bool {
        self.shell.is_some()
    }

    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.shell.as_ref().map(AppShell::composition)
    }

    pub fn layout_tree(&self) -> Option<&LayoutTree> {
        self.shell.as_ref().and_then(AppShell::layout_tree)
    }

    pub fn root(&self) -> Option<&LayoutBox> {
        self.layout_tree().map(LayoutTree::root)
    }

    pub fn scene(&self) -> Option<&RecordedRenderScene> {
        self.shell.as_ref().map(AppShell::scene)
    }

    /// Every text painted in the settled scene, in paint order.
    pub fn texts(&self) -> Vec<String> {
        self.scene()
            .map(|scene| scene.texts().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Bounds of the first painted text equal to `text`.
    pub fn find_text(&self, text: &str) -> Option<Rect> {
        self.scene().and_then(|scene| scene.find_text(text))
    }
}

impl Default for ComposeTestRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects values handed to a callback, typically a content factory.
/// Clones share the same storage.
#[derive(Debug)]
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T: Clone> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Recorder<T> {
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn record(&self, value: T) {
        self.values.borrow_mut().push(value);
    }

    pub fn values(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    pub fn first(&self) -> Option<T> {
        self.values.borrow().first().cloned()
    }

    pub fn last(&self) -> Option<T> {
        self.values.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `ComposeTestRule`.
pub fn run_test_composition<R>(f: impl FnOnce(&mut ComposeTestRule) -> R) -> R {
    let mut rule = ComposeTestRule::new();
    f(&mut rule)
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
