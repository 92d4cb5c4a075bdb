//! Game state and core simulation types
//!
//! Everything a shooter session needs lives in `GameState`; the orchestrator in
//! `tick` is the only code that mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::{ParticleMotion, ParticleSystem};
use super::pool::Pool;
use crate::consts::*;

/// Downward pull on shooter particles (pixels/s²)
pub const PARTICLE_GRAVITY: f32 = 60.0;

/// Number of background stars
pub const STAR_COUNT: usize = 80;
/// Starfield scroll speed (pixels/s)
pub const STAR_SCROLL_SPEED: f32 = 40.0;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen until the pause key is pressed again
    Paused,
    /// Run ended, waiting for confirm to return to the menu
    GameOver,
}

/// Notable things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    ShotFired,
    EnemySpawned { health: u8 },
    EnemyDamaged { pos: Vec2 },
    /// Enemy destroyed by a bullet; an explosion burst was emitted
    EnemyDestroyed { pos: Vec2 },
    PlayerHit { health: u8 },
    WaveReached(u32),
    Paused,
    Resumed,
    GameOver { score: u32, wave: u32 },
    ReturnedToMenu,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub health: u8,
    pub score: u32,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
    pub invincible: bool,
    /// Seconds of invincibility left
    pub invincible_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 80.0),
            health: PLAYER_MAX_HEALTH,
            score: 0,
            shoot_cooldown: 0.0,
            invincible: false,
            invincible_timer: 0.0,
        }
    }
}

impl Player {
    /// Move by `direction` (unit-ish vector) for `dt` seconds, clamped to the screen
    pub fn move_by(&mut self, direction: Vec2, dt: f32) {
        let direction = if direction.length_squared() > 1.0 {
            direction.normalize()
        } else {
            direction
        };
        self.pos += direction * PLAYER_SPEED * dt;
        self.pos.x = self.pos.x.clamp(PLAYER_RADIUS, SCREEN_WIDTH - PLAYER_RADIUS);
        self.pos.y = self.pos.y.clamp(PLAYER_RADIUS, SCREEN_HEIGHT - PLAYER_RADIUS);
    }

    /// Count down shot cooldown and invincibility
    pub fn update_timers(&mut self, dt: f32) {
        self.shoot_cooldown -= dt;
        if self.shoot_cooldown <= TIME_EPSILON {
            self.shoot_cooldown = 0.0;
        }

        if self.invincible {
            self.invincible_timer -= dt;
            if self.invincible_timer <= TIME_EPSILON {
                self.invincible_timer = 0.0;
                self.invincible = false;
            }
        }
    }

    /// Apply one point of damage unless invincible. Returns true if damage landed.
    pub fn take_hit(&mut self) -> bool {
        if self.invincible {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        self.invincible = true;
        self.invincible_timer = INVINCIBILITY_DURATION;
        true
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// A player bullet
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -BULLET_SPEED),
        }
    }

    /// True once the bullet is past any edge by more than the margin
    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -BULLET_MARGIN
            || self.pos.x > SCREEN_WIDTH + BULLET_MARGIN
            || self.pos.y < -BULLET_MARGIN
            || self.pos.y > SCREEN_HEIGHT + BULLET_MARGIN
    }
}

/// A falling enemy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1 or 2
    pub health: u8,
    /// Spin angle (radians), purely visual
    pub rotation: f32,
    /// Spin speed (radians/s)
    pub spin: f32,
}

impl Enemy {
    /// Color by health tier
    pub fn color(&self) -> [f32; 4] {
        match self.health {
            0 | 1 => [0.95, 0.25, 0.25, 1.0],
            _ => [0.65, 0.3, 0.95, 1.0],
        }
    }

    /// True once the enemy has fallen below the bottom edge plus margin
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT + ENEMY_MARGIN
    }
}

/// Complete shooter session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Pool<Bullet>,
    pub enemies: Pool<Enemy>,
    pub particles: ParticleSystem,
    /// Seconds of PLAYING time in this session, summed in f64 so wave
    /// boundaries land on whole step counts
    pub elapsed: f64,
    /// Seconds since the last enemy spawn
    pub spawn_timer: f32,
    /// Difficulty tier, starting at 1
    pub wave: u32,
    /// Chance per step that an enemy drops a trail particle
    pub trail_chance: f64,
    /// Background star positions and scroll offset
    pub stars: Vec<Vec2>,
    pub star_offset: f32,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create a session sitting on the menu
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Vec2::new(
                    rng.random_range(0.0..SCREEN_WIDTH),
                    rng.random_range(0.0..SCREEN_HEIGHT),
                )
            })
            .collect();

        Self {
            seed,
            phase: GamePhase::Menu,
            player: Player::default(),
            bullets: Pool::new(BULLET_POOL_SIZE),
            enemies: Pool::new(ENEMY_POOL_SIZE),
            particles: ParticleSystem::new(ParticleMotion::Gravity(PARTICLE_GRAVITY)),
            elapsed: 0.0,
            spawn_timer: 0.0,
            wave: 1,
            trail_chance: 0.1,
            stars,
            star_offset: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Cap the particle collection (quality setting)
    pub fn with_particle_cap(mut self, cap: usize) -> Self {
        self.particles.max_particles = Some(cap);
        self
    }

    /// Start a fresh run: new player, empty pools, wave 1, PLAYING
    pub fn reset(&mut self) {
        self.player = Player::default();
        self.bullets.clear();
        self.enemies.clear();
        self.particles.clear();
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.wave = 1;
        self.phase = GamePhase::Playing;
    }

    /// Seconds between enemy spawns at the current elapsed time
    pub fn spawn_interval(&self) -> f32 {
        (2.0 - self.elapsed as f32 / 30.0).max(0.5)
    }

    /// Chance that a newly spawned enemy has 2 health
    pub fn tough_enemy_chance(&self) -> f64 {
        (0.1 * self.wave as f64).min(0.6)
    }

    /// Enemy fall speed multiplier at the current elapsed time
    pub fn enemy_speed_scale(&self) -> f32 {
        1.0 + self.elapsed as f32 / 60.0
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
