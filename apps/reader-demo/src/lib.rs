#![allow(non_snake_case)]

pub mod app;

/// Viewport widths the demo walks through, narrowest first.
pub const SWEEP_WIDTHS: &[f32] = &[320.0, 480.0, 640.0, 1024.0];
pub const VIEWPORT_HEIGHT: f32 = 600.0;
