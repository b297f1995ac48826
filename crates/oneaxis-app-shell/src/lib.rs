//! Application shell for OneAxis content.
//!
//! A geometry reader only learns its extent after layout, and storing that
//! extent schedules another render. [`AppShell::update`] therefore repeats
//! compose, layout and delivery until a pass changes no state, then paints
//! the settled tree with the headless renderer.

use std::fmt;

// Use web_time for cross-platform time support (native + WASM)
use web_time::Instant;

use oneaxis_core::{location_key, Composition, Key, NodeError};
use oneaxis_ui::{measure_layout, HeadlessRenderer, LayoutTree, RecordedRenderScene};
use oneaxis_ui_graphics::Size;

/// Passes allowed before [`AppShell::update`] gives up on settling.
pub const DEFAULT_MAX_SETTLE_PASSES: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellConfig {
    /// Space offered to the root. Either extent may be `f32::INFINITY`.
    pub viewport: Size,
    pub max_settle_passes: usize,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn max_settle_passes(mut self, passes: usize) -> Self {
        self.max_settle_passes = passes.max(1);
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            max_settle_passes: DEFAULT_MAX_SETTLE_PASSES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellError {
    Node(NodeError),
    /// The content emitted no node.
    NoRoot,
    /// State was still changing after `passes` compose/layout passes.
    Unsettled { passes: usize },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Node(err) => write!(f, "{err}"),
            ShellError::NoRoot => f.write_str("content emitted no root node"),
            ShellError::Unsettled { passes } => {
                write!(f, "layout did not settle after {passes} passes")
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Node(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NodeError> for ShellError {
    fn from(err: NodeError) -> Self {
        ShellError::Node(err)
    }
}

pub struct AppShell {
    composition: Composition,
    content: Box<dyn FnMut()>,
    root_key: Key,
    config: ShellConfig,
    renderer: HeadlessRenderer,
    layout_tree: Option<LayoutTree>,
    scene: RecordedRenderScene,
    needs_compose: bool,
    layout_dirty: bool,
}

impl AppShell {
    pub fn new(config: ShellConfig, content: impl FnMut() + 'static) -> Self {
        Self {
            composition: Composition::new(),
            content: Box::new(content),
            root_key: location_key(file!(), line!(), column!()),
            config,
            renderer: HeadlessRenderer::new(),
            layout_tree: None,
            scene: RecordedRenderScene::default(),
            needs_compose: true,
            layout_dirty: true,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let viewport = Size::new(width, height);
        if viewport != self.config.viewport {
            self.config.viewport = viewport;
            self.layout_dirty = true;
        }
    }

    /// Forces the next [`update`](Self::update) to recompose from scratch.
    pub fn invalidate(&mut self) {
        self.needs_compose = true;
    }

    /// Returns true when a call to [`update`](Self::update) would do work.
    pub fn should_update(&self) -> bool {
        self.needs_compose || self.layout_dirty || self.composition.should_render()
    }

    /// Runs compose, layout and delivery until nothing changes, then renders
    /// the scene. Returns the number of passes taken; zero means the shell
    /// was already settled.
    pub fn update(&mut self) -> Result<usize, ShellError> {
        let start = Instant::now();
        let mut passes = 0;
        while self.should_update() {
            if passes == self.config.max_settle_passes {
                log::warn!(
                    "giving up after {passes} settle passes; content keeps changing its own size"
                );
                return Err(ShellError::Unsettled { passes });
            }
            passes += 1;
            self.run_pass(passes)?;
        }

        if passes > 0 {
            if let Some(tree) = &self.layout_tree {
                self.scene = self.renderer.render(tree);
            }
            log::debug!(
                "settled in {passes} pass(es) and {:?}",
                start.elapsed()
            );
        }
        Ok(passes)
    }

    fn run_pass(&mut self, pass: usize) -> Result<(), ShellError> {
        if self.needs_compose || self.composition.should_render() {
            self.needs_compose = false;
            let content = &mut self.content;
            self.composition.render(self.root_key, || content())?;
        }
        self.layout_dirty = false;

        let root = self.composition.root().ok_or(ShellError::NoRoot)?;
        let mut measurements = {
            let applier = self.composition.applier();
            measure_layout(&applier, root, self.config.viewport)?
        };
        // The applier borrow is released; delivery writes state.
        let runtime = self.composition.runtime_handle();
        let writes_before = runtime.invalidation_count();
        let delivered = measurements.deliver();
        log::debug!(
            "settle pass {pass}: {delivered} measurement(s) changed, {} state write(s)",
            runtime.invalidation_count().wrapping_sub(writes_before)
        );
        self.layout_tree = Some(measurements.into_layout_tree());
        Ok(())
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn layout_tree(&self) -> Option<&LayoutTree> {
        self.layout_tree.as_ref()
    }

    pub fn scene(&self) -> &RecordedRenderScene {
        &self.scene
    }
}

#[cfg(test)]
#[path = "tests/app_shell_tests.rs"]
mod tests;
