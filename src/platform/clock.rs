//! Frame timing
//!
//! Delta time is clamped so a debugger pause or a minimized window does not
//! feed a huge step into the fixed-timestep accumulator.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples averaged for the FPS readout
pub const FPS_SAMPLES: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    samples: VecDeque<f32>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            samples: VecDeque::with_capacity(FPS_SAMPLES),
        }
    }

    /// Restart the baseline, e.g. after the window was suspended
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advance and return the clamped delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;
        self.frame_index = self.frame_index.wrapping_add(1);

        let dt = dt.as_secs_f32();
        self.record(dt);
        dt
    }

    fn record(&mut self, dt: f32) {
        if self.samples.len() == FPS_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(dt);
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Average frames per second over the recent window
    pub fn fps(&self) -> f32 {
        fps_from_samples(self.samples.iter().copied())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

fn fps_from_samples(samples: impl Iterator<Item = f32>) -> f32 {
    let (sum, count) = samples.fold((0.0, 0usize), |(s, n), dt| (s + dt, n + 1));
    if count == 0 || sum <= 0.0 {
        0.0
    } else {
        count as f32 / sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_average() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            clock.record(0.02);
        }
        assert!((clock.fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_sample_window_is_bounded() {
        let mut clock = FrameClock::new();
        for _ in 0..FPS_SAMPLES {
            clock.record(1.0);
        }
        for _ in 0..FPS_SAMPLES {
            clock.record(0.01);
        }
        assert_eq!(clock.samples.len(), FPS_SAMPLES);
        assert!((clock.fps() - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_empty_clock_reports_zero() {
        assert_eq!(FrameClock::new().fps(), 0.0);
    }

    #[test]
    fn test_tick_is_clamped() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0001 && dt <= 0.25);
        assert_eq!(clock.frame_index(), 1);
    }
}
