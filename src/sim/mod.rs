//! Deterministic shooter simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool slot order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod particles;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, resolve_bullet_hits, resolve_player_hits};
pub use particles::{Burst, Particle, ParticleMotion, ParticleSystem};
pub use pool::Pool;
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
