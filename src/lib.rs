//! Arcade Demos - small immediate-mode graphics programs
//!
//! Core modules:
//! - `sim`: Deterministic shooter simulation (pools, particles, collisions, game state)
//! - `demos`: The individual programs (bounce, shooter, showcase, sensors, platform check)
//! - `renderer`: WebGPU triangle renderer and immediate-mode canvas
//! - `platform`: Window, input and frame timing on top of winit
//! - `settings`: User preferences loaded from JSON

pub mod demos;
pub mod highscores;
pub mod logging;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{InputPreference, QualityPreset, Settings};

use glam::Vec2;

/// Shared configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the target frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Slack when comparing summed `SIM_DT` steps against whole-second boundaries
    pub const TIME_EPSILON: f32 = 1e-4;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Logical canvas size; the window is letterboxed onto it
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: u8 = 5;
    /// Seconds between shots while fire is held
    pub const SHOOT_COOLDOWN: f32 = 0.15;
    /// Damage immunity after being hit (seconds)
    pub const INVINCIBILITY_DURATION: f32 = 2.0;

    /// Bullet defaults
    pub const BULLET_POOL_SIZE: usize = 50;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 500.0;
    /// Bullets are culled this far past any screen edge
    pub const BULLET_MARGIN: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_POOL_SIZE: usize = 20;
    pub const ENEMY_RADIUS: f32 = 15.0;
    /// Enemies are culled this far below the bottom edge
    pub const ENEMY_MARGIN: f32 = 50.0;

    /// Points for destroying an enemy
    pub const KILL_SCORE: u32 = 10;
    /// Seconds of play per wave
    pub const WAVE_DURATION: f32 = 20.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Linear interpolation between two RGBA colors
#[inline]
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Convert HSV (hue in degrees, saturation and value in 0-1) to RGBA
pub fn hsv_to_rgba(hue: f32, saturation: f32, value: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);

        let p = polar_to_cartesian(2.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_hsv_primaries() {
        let red = hsv_to_rgba(0.0, 1.0, 1.0, 1.0);
        assert_eq!(red, [1.0, 0.0, 0.0, 1.0]);
        let green = hsv_to_rgba(120.0, 1.0, 1.0, 1.0);
        assert!((green[1] - 1.0).abs() < 1e-5 && green[0].abs() < 1e-5);
        let blue = hsv_to_rgba(240.0, 1.0, 1.0, 0.5);
        assert!((blue[2] - 1.0).abs() < 1e-5 && blue[3] == 0.5);
    }

    #[test]
    fn test_lerp_color_clamps() {
        let a = [0.0, 0.0, 0.0, 0.0];
        let b = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(lerp_color(a, b, 2.0), b);
        assert_eq!(lerp_color(a, b, -1.0), a);
    }
}
