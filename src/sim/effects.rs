//! Particle burst presets used by the shooter

use glam::Vec2;

use super::particles::Burst;

/// Particles in an enemy explosion
pub const EXPLOSION_PARTICLES: usize = 20;
/// Particles when a bullet chips a tough enemy
pub const SPARK_PARTICLES: usize = 5;
/// Particles when the player is hit
pub const PLAYER_HIT_PARTICLES: usize = 12;

pub const PLAYER_COLOR: [f32; 4] = [0.3, 0.8, 1.0, 1.0];

/// Big burst when an enemy is destroyed
pub fn explosion(pos: Vec2, color: [f32; 4]) -> Burst {
    Burst {
        pos,
        color,
        count: EXPLOSION_PARTICLES,
        speed: 50.0..200.0,
        lifetime: 0.8,
        size: 2.0..5.0,
    }
}

/// Small burst on a non-lethal hit
pub fn spark(pos: Vec2, color: [f32; 4]) -> Burst {
    Burst {
        pos,
        color,
        count: SPARK_PARTICLES,
        speed: 30.0..90.0,
        lifetime: 0.3,
        size: 1.0..2.5,
    }
}

/// Burst around the player when damage lands
pub fn player_hit(pos: Vec2) -> Burst {
    Burst {
        pos,
        color: PLAYER_COLOR,
        count: PLAYER_HIT_PARTICLES,
        speed: 60.0..160.0,
        lifetime: 0.6,
        size: 2.0..4.0,
    }
}

/// Single faint particle left behind a falling enemy
pub fn trail(pos: Vec2, color: [f32; 4]) -> Burst {
    let [r, g, b, _] = color;
    Burst {
        pos,
        color: [r, g, b, 0.6],
        count: 1,
        speed: 10.0..40.0,
        lifetime: 0.5,
        size: 1.0..3.0,
    }
}
