//! Simulated sensor dashboard
//!
//! Three channels sampled at a fixed rate into ring buffers and plotted live.
//! Each reading is a deterministic waveform plus seeded noise, so a given
//! seed always produces the same trace.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Demo, FrameStats, draw_fps};
use crate::consts::SCREEN_WIDTH;
use crate::platform::{Input, Key};
use crate::renderer::{Canvas, colors};

/// Samples per second
pub const SAMPLE_RATE: f32 = 20.0;
pub const SAMPLE_INTERVAL: f32 = 1.0 / SAMPLE_RATE;
/// Samples kept per channel (12 seconds)
pub const HISTORY_LEN: usize = 240;

/// Static description of a sensor channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelParams {
    pub name: &'static str,
    pub unit: &'static str,
    /// Resting value
    pub base: f32,
    pub amplitude: f32,
    /// Waveform period in seconds
    pub period: f32,
    pub phase: f32,
    /// Uniform noise half-width
    pub noise: f32,
    /// Chance per sample of a transient spike
    pub spike_chance: f64,
    pub spike: f32,
    /// Latest value above this raises the alarm
    pub threshold: f32,
    /// Plot range
    pub range: (f32, f32),
    pub color: [f32; 4],
}

impl ChannelParams {
    /// Noise-free reading at time `t`
    pub fn waveform(&self, t: f32) -> f32 {
        self.base + self.amplitude * (TAU * t / self.period + self.phase).sin()
    }
}

pub fn default_channels() -> Vec<ChannelParams> {
    vec![
        ChannelParams {
            name: "TEMPERATURE",
            unit: "C",
            base: 22.0,
            amplitude: 3.0,
            period: 30.0,
            phase: 0.0,
            noise: 0.3,
            spike_chance: 0.0,
            spike: 0.0,
            threshold: 24.5,
            range: (15.0, 30.0),
            color: colors::ORANGE,
        },
        ChannelParams {
            name: "HUMIDITY",
            unit: "%",
            base: 45.0,
            amplitude: 10.0,
            period: 45.0,
            phase: 1.0,
            noise: 1.5,
            spike_chance: 0.0,
            spike: 0.0,
            threshold: 54.0,
            range: (20.0, 80.0),
            color: colors::SKYBLUE,
        },
        ChannelParams {
            name: "VIBRATION",
            unit: "G",
            base: 0.25,
            amplitude: 0.1,
            period: 5.0,
            phase: 0.0,
            noise: 0.05,
            spike_chance: 0.02,
            spike: 0.6,
            threshold: 0.6,
            range: (0.0, 1.2),
            color: colors::LIME,
        },
    ]
}

/// Fixed-capacity sample history; the oldest sample is dropped when full
#[derive(Debug, Clone)]
pub struct History {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn stats(&self) -> Option<ChannelStats> {
        let latest = self.latest()?;
        let (min, max, sum) = self
            .iter()
            .fold((f32::MAX, f32::MIN, 0.0), |(lo, hi, sum), v| {
                (lo.min(v), hi.max(v), sum + v)
            });
        Some(ChannelStats {
            latest,
            min,
            max,
            mean: sum / self.len() as f32,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    pub latest: f32,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

#[derive(Debug, Clone)]
pub struct Channel {
    pub params: ChannelParams,
    pub history: History,
}

impl Channel {
    pub fn is_alarming(&self) -> bool {
        self.history
            .latest()
            .is_some_and(|v| v > self.params.threshold)
    }
}

pub struct SensorDemo {
    pub channels: Vec<Channel>,
    rng: Pcg32,
    /// Simulated seconds of sampling (stops while frozen)
    pub clock: f32,
    sample_timer: f32,
    pub frozen: bool,
    pub selected: usize,
    fps: f32,
    /// Wall-clock seconds for blinking
    time: f32,
}

impl SensorDemo {
    pub fn new(seed: u64) -> Self {
        log::info!("Sensor dashboard: seed {seed}, {SAMPLE_RATE} Hz, {HISTORY_LEN} samples");
        Self {
            channels: default_channels()
                .into_iter()
                .map(|params| Channel {
                    params,
                    history: History::new(HISTORY_LEN),
                })
                .collect(),
            rng: Pcg32::seed_from_u64(seed),
            clock: 0.0,
            sample_timer: 0.0,
            frozen: false,
            selected: 0,
            fps: 0.0,
            time: 0.0,
        }
    }

    /// Take one reading from every channel
    fn sample(&mut self) {
        self.clock += SAMPLE_INTERVAL;
        for channel in &mut self.channels {
            let params = &channel.params;
            let mut value = params.waveform(self.clock);
            if params.noise > 0.0 {
                value += self.rng.random_range(-params.noise..params.noise);
            }
            if params.spike_chance > 0.0 && self.rng.random_bool(params.spike_chance) {
                value += params.spike;
            }
            channel.history.push(value);
        }
    }

    pub fn step(&mut self, dt: f32) {
        if self.frozen {
            return;
        }
        self.sample_timer += dt;
        while self.sample_timer >= SAMPLE_INTERVAL {
            self.sample_timer -= SAMPLE_INTERVAL;
            self.sample();
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.channels.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.channels.len() - 1) % self.channels.len();
    }

    fn draw_channel(&self, canvas: &mut Canvas, index: usize, top: f32, height: f32) {
        let channel = &self.channels[index];
        let params = &channel.params;
        let selected = index == self.selected;
        let alarming = channel.is_alarming();

        let panel_pos = Vec2::new(10.0, top);
        let panel_size = Vec2::new(SCREEN_WIDTH - 20.0, height - 10.0);
        canvas.rect(panel_pos, panel_size, [0.12, 0.12, 0.16, 1.0]);
        if selected {
            canvas.rect_lines(panel_pos, panel_size, 2.0, colors::GOLD);
        }

        canvas.text(params.name, panel_pos + Vec2::new(10.0, 10.0), 16.0, params.color);
        if alarming && (self.time * 4.0) as i32 % 2 == 0 {
            canvas.circle(panel_pos + Vec2::new(190.0, 17.0), 6.0, colors::RED);
            canvas.text("ALARM", panel_pos + Vec2::new(200.0, 10.0), 16.0, colors::RED);
        }

        if let Some(stats) = channel.history.stats() {
            let lines = [
                format!("NOW  {:7.2} {}", stats.latest, params.unit),
                format!("MIN  {:7.2}", stats.min),
                format!("MAX  {:7.2}", stats.max),
                format!("MEAN {:7.2}", stats.mean),
            ];
            for (i, line) in lines.iter().enumerate() {
                canvas.text(
                    line,
                    panel_pos + Vec2::new(10.0, 34.0 + i as f32 * 18.0),
                    12.0,
                    colors::LIGHTGRAY,
                );
            }

            // Value bar
            let (lo, hi) = params.range;
            let frac = ((stats.latest - lo) / (hi - lo)).clamp(0.0, 1.0);
            let bar_pos = panel_pos + Vec2::new(10.0, panel_size.y - 16.0);
            canvas.rect(bar_pos, Vec2::new(200.0, 8.0), colors::DARKGRAY);
            let fill = if alarming { colors::RED } else { params.color };
            canvas.rect(bar_pos, Vec2::new(200.0 * frac, 8.0), fill);
        }

        self.draw_plot(
            canvas,
            channel,
            panel_pos + Vec2::new(230.0, 8.0),
            Vec2::new(panel_size.x - 240.0, panel_size.y - 16.0),
        );
    }

    fn draw_plot(&self, canvas: &mut Canvas, channel: &Channel, pos: Vec2, size: Vec2) {
        let params = &channel.params;
        let (lo, hi) = params.range;
        let to_y = |v: f32| pos.y + size.y * (1.0 - ((v - lo) / (hi - lo)).clamp(0.0, 1.0));

        canvas.rect(pos, size, [0.05, 0.05, 0.08, 1.0]);
        canvas.line(
            Vec2::new(pos.x, to_y(params.threshold)),
            Vec2::new(pos.x + size.x, to_y(params.threshold)),
            1.0,
            colors::with_alpha(colors::RED, 0.6),
        );

        let step = size.x / (HISTORY_LEN - 1) as f32;
        // Newest sample sits at the right edge
        let offset = HISTORY_LEN - channel.history.len();
        let points: Vec<Vec2> = channel
            .history
            .iter()
            .enumerate()
            .map(|(i, v)| Vec2::new(pos.x + (offset + i) as f32 * step, to_y(v)))
            .collect();
        for pair in points.windows(2) {
            canvas.line(pair[0], pair[1], 2.0, params.color);
        }
        for (point, value) in points.iter().zip(channel.history.iter()) {
            if value > params.threshold {
                canvas.circle(*point, 3.0, colors::RED);
            }
        }
    }
}

impl Demo for SensorDemo {
    fn title(&self) -> String {
        "Sensor Dashboard".into()
    }

    fn update(&mut self, input: &Input<'_>, dt: f32) {
        if input.key_pressed(Key::Space) {
            self.frozen = !self.frozen;
            log::info!("sampling {}", if self.frozen { "frozen" } else { "resumed" });
        }
        if input.any_pressed(&[Key::ArrowDown, Key::Tab]) {
            self.select_next();
        }
        if input.key_pressed(Key::ArrowUp) {
            self.select_prev();
        }
        self.step(dt);
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.text("SENSOR DASHBOARD", Vec2::new(10.0, 10.0), 20.0, colors::WHITE);
        let hint = if self.frozen {
            "FROZEN - SPACE TO RESUME"
        } else {
            "SPACE FREEZE - UP/DOWN SELECT"
        };
        canvas.text(hint, Vec2::new(10.0, 36.0), 12.0, colors::GRAY);
        draw_fps(canvas, self.fps);

        let top = 60.0;
        let height = (canvas.height() - top) / self.channels.len() as f32;
        for i in 0..self.channels.len() {
            self.draw_channel(canvas, i, top + i as f32 * height, height);
        }
    }

    fn status(&self) -> String {
        let channel = &self.channels[self.selected];
        let latest = channel.history.latest().unwrap_or(f32::NAN);
        let alarms = self.channels.iter().filter(|c| c.is_alarming()).count();
        format!(
            "{} {:.2}{} - {} alarm(s){}",
            channel.params.name.to_lowercase(),
            latest,
            channel.params.unit,
            alarms,
            if self.frozen { " - frozen" } else { "" }
        )
    }

    fn clear_color(&self) -> [f32; 4] {
        [0.06, 0.06, 0.09, 1.0]
    }

    fn on_frame(&mut self, stats: &FrameStats) {
        self.fps = stats.fps;
        self.time += stats.dt;
    }
}
