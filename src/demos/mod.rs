//! The demo programs
//!
//! Each demo is a [`Demo`] driven by `platform::window::run`: `update` runs at
//! the fixed simulation rate, `draw` once per presented frame.

pub mod bounce;
pub mod platform_check;
pub mod sensors;
pub mod shooter;
pub mod showcase;

pub use bounce::BounceDemo;
pub use platform_check::PlatformCheck;
pub use sensors::SensorDemo;
pub use shooter::ShooterDemo;
pub use showcase::ShowcaseDemo;

use crate::platform::Input;
use crate::renderer::{Canvas, colors};

/// Timing of the most recent presented frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Wall-clock seconds since the previous frame (clamped)
    pub dt: f32,
    /// Average frames per second
    pub fps: f32,
}

/// What the GPU layer reports once it is up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuSummary {
    pub adapter: String,
    pub backend: String,
    pub surface_format: String,
}

pub trait Demo {
    /// Base window title
    fn title(&self) -> String;

    /// Advance by one fixed step
    fn update(&mut self, input: &Input<'_>, dt: f32);

    /// Record this frame's geometry
    fn draw(&self, canvas: &mut Canvas);

    /// Short status appended to the window title
    fn status(&self) -> String {
        String::new()
    }

    fn clear_color(&self) -> [f32; 4] {
        colors::RAYWHITE
    }

    /// Whether Escape closes the window
    fn exit_on_escape(&self) -> bool {
        true
    }

    /// Called once per presented frame before `draw`
    fn on_frame(&mut self, _stats: &FrameStats) {}

    /// Called once after the renderer is created
    fn on_gpu_ready(&mut self, _gpu: &GpuSummary) {}
}

/// Right-aligned FPS readout in the classic green
pub(crate) fn draw_fps(canvas: &mut Canvas, fps: f32) {
    let text = format!("{:.0} FPS", fps);
    let x = canvas.width() - canvas.text_width(&text, 16.0) - 10.0;
    canvas.text(&text, glam::Vec2::new(x, 10.0), 16.0, colors::LIME);
}
