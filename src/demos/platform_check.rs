//! Bring-up test pattern
//!
//! Logs what the GPU layer came up with, draws a fixed pattern that makes
//! scaling or colour-space mistakes obvious, and keeps frame-time statistics.

use glam::Vec2;

use super::{Demo, FrameStats, GpuSummary, draw_fps};
use crate::consts::SCREEN_WIDTH;
use crate::platform::Input;
use crate::renderer::{Canvas, colors, font};

/// Every character the built-in font is expected to cover
pub const GLYPH_SET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ 0123456789 .,:;!?-+=/()[]<>%'\"_*#&|";
/// Mixed-script line checked against the font at startup
pub const SAMPLE_TEXT: &str = "Hello, 世界! Grüße 123";
pub const REPORT_INTERVAL: f32 = 5.0;

const BARS: [[f32; 4]; 8] = [
    colors::WHITE,
    colors::YELLOW,
    colors::SKYBLUE,
    colors::GREEN,
    colors::PINK,
    colors::RED,
    colors::BLUE,
    colors::BLACK,
];

/// Running min / max / mean of frame times in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimeStats {
    pub count: u32,
    pub min: f32,
    pub max: f32,
    pub total: f32,
}

impl FrameTimeStats {
    pub fn record(&mut self, dt: f32) {
        if self.count == 0 {
            self.min = dt;
            self.max = dt;
        } else {
            self.min = self.min.min(dt);
            self.max = self.max.max(dt);
        }
        self.total += dt;
        self.count += 1;
    }

    pub fn mean(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f32
        }
    }
}

#[derive(Debug, Default)]
pub struct PlatformCheck {
    gpu: Option<GpuSummary>,
    missing: Vec<char>,
    window: FrameTimeStats,
    since_report: f32,
    reports: u32,
    fps: f32,
}

impl PlatformCheck {
    pub fn new() -> Self {
        let missing = font::missing_glyphs(SAMPLE_TEXT);
        if missing.is_empty() {
            log::info!("Font covers the sample text");
        } else {
            let list: String = missing.iter().collect();
            log::info!("Font cannot draw {} sample characters: {}", missing.len(), list);
        }
        Self {
            missing,
            ..Self::default()
        }
    }

    pub fn missing(&self) -> &[char] {
        &self.missing
    }

    pub fn reports(&self) -> u32 {
        self.reports
    }

    /// Statistics of the current reporting window
    pub fn frame_times(&self) -> &FrameTimeStats {
        &self.window
    }

    fn report(&mut self) {
        log::info!(
            "Frame time over {} frames: min {:.2} ms, max {:.2} ms, mean {:.2} ms",
            self.window.count,
            self.window.min * 1000.0,
            self.window.max * 1000.0,
            self.window.mean() * 1000.0
        );
        self.reports += 1;
        self.window = FrameTimeStats::default();
        self.since_report = 0.0;
    }
}

impl Demo for PlatformCheck {
    fn title(&self) -> String {
        "Platform Check".into()
    }

    fn update(&mut self, _input: &Input<'_>, _dt: f32) {}

    fn draw(&self, canvas: &mut Canvas) {
        let bar_width = SCREEN_WIDTH / BARS.len() as f32;
        for (i, color) in BARS.iter().enumerate() {
            canvas.rect(
                Vec2::new(i as f32 * bar_width, 0.0),
                Vec2::new(bar_width, 160.0),
                *color,
            );
        }
        canvas.gradient_h(
            Vec2::new(0.0, 160.0),
            Vec2::new(SCREEN_WIDTH, 30.0),
            colors::BLACK,
            colors::WHITE,
        );

        for row in 0..3 {
            for col in 0..10 {
                let center = Vec2::new(60.0 + col as f32 * 75.0, 230.0 + row as f32 * 60.0);
                let radius = 5.0 + (row * 10 + col) as f32;
                canvas.circle(center, radius.min(25.0), colors::DARKBLUE);
                canvas.circle_lines(center, 27.0, 1.0, colors::GRAY);
            }
        }

        canvas.text(GLYPH_SET, Vec2::new(20.0, 420.0), 16.0, colors::DARKGRAY);
        canvas.text(SAMPLE_TEXT, Vec2::new(20.0, 450.0), 16.0, colors::MAROON);

        let adapter = match &self.gpu {
            Some(gpu) => format!("{} ({}) {}", gpu.adapter, gpu.backend, gpu.surface_format),
            None => "NO ADAPTER YET".to_string(),
        };
        canvas.text(&adapter, Vec2::new(20.0, 500.0), 10.0, colors::DARKGRAY);
        canvas.text(
            &format!(
                "FRAME MIN {:.1} MAX {:.1} MEAN {:.1} MS",
                self.window.min * 1000.0,
                self.window.max * 1000.0,
                self.window.mean() * 1000.0
            ),
            Vec2::new(20.0, 520.0),
            10.0,
            colors::DARKGRAY,
        );
        draw_fps(canvas, self.fps);
    }

    fn status(&self) -> String {
        format!("{:.0} FPS", self.fps)
    }

    fn on_frame(&mut self, stats: &FrameStats) {
        self.fps = stats.fps;
        self.window.record(stats.dt);
        self.since_report += stats.dt;
        if self.since_report >= REPORT_INTERVAL {
            self.report();
        }
    }

    fn on_gpu_ready(&mut self, gpu: &GpuSummary) {
        log::info!(
            "Adapter: {} via {}, surface format {}",
            gpu.adapter,
            gpu.backend,
            gpu.surface_format
        );
        self.gpu = Some(gpu.clone());
    }
}
