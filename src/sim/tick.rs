//! Fixed timestep simulation tick
//!
//! Orchestrates one step of the shooter: state machine transitions, player,
//! spawning, movement, collisions and particle aging.

use glam::Vec2;
use rand::Rng;

use super::collision::{resolve_bullet_hits, resolve_player_hits};
use super::effects;
use super::state::{Bullet, Enemy, GameEvent, GamePhase, GameState, STAR_SCROLL_SPEED};
use crate::consts::*;

/// Input commands for a single tick (platform-agnostic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired movement direction; vectors longer than 1 are normalized
    pub movement: Vec2,
    /// Fire button held
    pub fire: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Start / continue (one-shot)
    pub confirm: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    match state.phase {
        GamePhase::Menu => {
            scroll_stars(state, dt);
            state.particles.update(dt);
            if input.confirm {
                state.reset();
                state.emit(GameEvent::SessionStarted);
                log::info!("session started (seed {})", state.seed);
            }
        }
        GamePhase::Playing => tick_playing(state, input, dt),
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                state.emit(GameEvent::Resumed);
                log::debug!("resumed");
            }
        }
        GamePhase::GameOver => {
            // Let the last explosions play out behind the game over screen
            scroll_stars(state, dt);
            state.particles.update(dt);
            if input.confirm {
                state.phase = GamePhase::Menu;
                state.emit(GameEvent::ReturnedToMenu);
            }
        }
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    // 1. Pause
    if input.pause {
        state.phase = GamePhase::Paused;
        state.emit(GameEvent::Paused);
        log::debug!("paused at {:.1}s", state.elapsed);
        return;
    }

    scroll_stars(state, dt);

    // 2. Player movement and timers
    state.player.update_timers(dt);
    state.player.move_by(input.movement, dt);

    // 3. Shooting
    if input.fire && state.player.shoot_cooldown <= 0.0 {
        let muzzle = state.player.pos - Vec2::new(0.0, PLAYER_RADIUS);
        if state.bullets.spawn(Bullet::new(muzzle)).is_some() {
            state.emit(GameEvent::ShotFired);
        } else {
            log::trace!("bullet pool full, shot dropped");
        }
        state.player.shoot_cooldown = SHOOT_COOLDOWN;
    }

    // 4. Bullets
    for (_, bullet) in state.bullets.iter_mut() {
        bullet.pos += bullet.vel * dt;
    }
    state.bullets.retain(|b| !b.is_off_screen());

    // 5. Enemy spawning
    state.elapsed += f64::from(dt);
    state.spawn_timer += dt;
    if state.spawn_timer + TIME_EPSILON >= state.spawn_interval() {
        state.spawn_timer = 0.0;
        spawn_enemy(state);
    }

    // 6. Wave
    let wave = 1 + (state.elapsed / f64::from(WAVE_DURATION)).floor() as u32;
    if wave != state.wave {
        state.wave = wave;
        state.emit(GameEvent::WaveReached(wave));
        log::info!("wave {} reached", wave);
    }

    // 7. Enemies
    let trail_chance = state.trail_chance.clamp(0.0, 1.0);
    for (_, enemy) in state.enemies.iter_mut() {
        enemy.pos += enemy.vel * dt;
        enemy.rotation += enemy.spin * dt;
        if trail_chance > 0.0 && state.rng.random_bool(trail_chance) {
            let tail = enemy.pos - Vec2::new(0.0, ENEMY_RADIUS);
            state
                .particles
                .add_burst(&effects::trail(tail, enemy.color()), &mut state.rng);
        }
    }
    state.enemies.retain(|e| !e.is_off_screen());

    // 8. Collisions
    resolve_bullet_hits(state);
    resolve_player_hits(state);

    // 9. Particles
    state.particles.update(dt);

    // 10. End condition
    if state.player.is_dead() {
        state.phase = GamePhase::GameOver;
        state.emit(GameEvent::GameOver {
            score: state.player.score,
            wave: state.wave,
        });
        log::info!(
            "game over: score {} at wave {} after {:.1}s",
            state.player.score,
            state.wave,
            state.elapsed
        );
    }
}

/// Spawn one enemy above the top edge, scaled by the current difficulty
fn spawn_enemy(state: &mut GameState) {
    let tough_chance = state.tough_enemy_chance();
    let speed_scale = state.enemy_speed_scale();
    let rng = &mut state.rng;

    let x = rng.random_range(ENEMY_RADIUS * 2.0..SCREEN_WIDTH - ENEMY_RADIUS * 2.0);
    let health = if rng.random_bool(tough_chance) { 2 } else { 1 };
    let speed = rng.random_range(80.0..140.0f32) * speed_scale;
    let drift = rng.random_range(-30.0..30.0f32);
    let spin = rng.random_range(-3.0..3.0f32);

    let enemy = Enemy {
        pos: Vec2::new(x, -ENEMY_RADIUS * 2.0),
        vel: Vec2::new(drift, speed),
        health,
        rotation: 0.0,
        spin,
    };

    if state.enemies.spawn(enemy).is_some() {
        state.emit(GameEvent::EnemySpawned { health });
    } else {
        log::trace!("enemy pool full, spawn dropped");
    }
}

fn scroll_stars(state: &mut GameState, dt: f32) {
    state.star_offset = (state.star_offset + STAR_SCROLL_SPEED * dt) % SCREEN_HEIGHT;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn pause() -> TickInput {
        TickInput {
            pause: true,
            ..Default::default()
        }
    }

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &confirm(), SIM_DT);
        state
    }

    #[test]
    fn test_menu_confirm_starts_session() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Menu);

        // No confirm - stays on the menu
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &confirm(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 5);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.wave, 1);
        assert!(state.events.contains(&GameEvent::SessionStarted));
    }

    #[test]
    fn test_tick_pause() {
        let mut state = playing_state(12345);
        tick(&mut state, &TickInput::default(), SIM_DT);
        let elapsed = state.elapsed;

        tick(&mut state, &pause(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        // Nothing advances while paused
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.elapsed, elapsed);

        tick(&mut state, &pause(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_wave_advances_after_twenty_seconds() {
        let mut state = playing_state(777);
        let idle = TickInput::default();

        state.reset();
        for _ in 0..(20 * 60 - 1) {
            // Keep the run alive regardless of random contacts
            state.player.health = PLAYER_MAX_HEALTH;
            tick(&mut state, &idle, SIM_DT);
        }
        assert_eq!(state.wave, 1);

        state.player.health = PLAYER_MAX_HEALTH;
        tick(&mut state, &idle, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 2);
    }

    #[test]
    fn test_zero_health_ends_game() {
        let mut state = playing_state(1);
        state.player.health = 0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
    }

    #[test]
    fn test_game_over_returns_to_menu() {
        let mut state = playing_state(1);
        state.player.health = 0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Pause does nothing on the game over screen
        tick(&mut state, &pause(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &confirm(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_invincibility_window_lasts_two_seconds() {
        let mut state = playing_state(99);
        let pos = state.player.pos;
        state.enemies.spawn(Enemy {
            pos,
            vel: Vec2::ZERO,
            health: 1,
            rotation: 0.0,
            spin: 0.0,
        });
        state.enemies.spawn(Enemy {
            pos,
            vel: Vec2::ZERO,
            health: 1,
            rotation: 0.0,
            spin: 0.0,
        });

        let idle = TickInput::default();
        tick(&mut state, &idle, 0.5);
        assert_eq!(state.player.health, 4);
        assert!(state.player.invincible);

        // 0.5s, 1.0s, 1.5s into the window: the remaining enemy is ignored
        for _ in 0..3 {
            tick(&mut state, &idle, 0.5);
            assert_eq!(state.player.health, 4);
            assert!(state.player.invincible);
        }

        // 2.0s: the window has closed and damage resumes
        tick(&mut state, &idle, 0.5);
        assert_eq!(state.player.health, 3);
    }

    #[test]
    fn test_invincibility_window_at_sim_rate() {
        let mut state = playing_state(99);
        state.trail_chance = 0.0;
        let pos = state.player.pos;
        for _ in 0..2 {
            state.enemies.spawn(Enemy {
                pos,
                vel: Vec2::ZERO,
                health: 1,
                rotation: 0.0,
                spin: 0.0,
            });
        }

        let idle = TickInput::default();
        tick(&mut state, &idle, SIM_DT);
        assert_eq!(state.player.health, 4);

        let mut steps = 0;
        while state.player.health == 4 {
            tick(&mut state, &idle, SIM_DT);
            steps += 1;
            assert!(steps <= 2 * 60, "window outlived two seconds");
        }
        assert_eq!(steps, 2 * 60);
        assert_eq!(state.player.health, 3);
    }

    #[test]
    fn test_fire_respects_cooldown_at_sim_rate() {
        let mut state = playing_state(5);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };

        // 0.15s is exactly 9 steps
        tick(&mut state, &fire, SIM_DT);
        for _ in 0..8 {
            tick(&mut state, &fire, SIM_DT);
            assert_eq!(state.bullets.active_count(), 1);
        }
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullets.active_count(), 2);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = playing_state(5);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let dt = 0.0625;

        tick(&mut state, &fire, dt);
        assert_eq!(state.bullets.active_count(), 1);
        tick(&mut state, &fire, dt);
        tick(&mut state, &fire, dt);
        assert_eq!(state.bullets.active_count(), 1);
        tick(&mut state, &fire, dt);
        assert_eq!(state.bullets.active_count(), 2);
    }

    #[test]
    fn test_full_bullet_pool_drops_shot() {
        let mut state = playing_state(5);
        for _ in 0..BULLET_POOL_SIZE {
            state.bullets.spawn(Bullet {
                pos: Vec2::new(10.0, 300.0),
                vel: Vec2::ZERO,
            });
        }
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullets.active_count(), BULLET_POOL_SIZE);
        assert!(!state.events.contains(&GameEvent::ShotFired));
    }

    #[test]
    fn test_bullets_leave_screen() {
        let mut state = playing_state(5);
        state.bullets.spawn(Bullet::new(Vec2::new(400.0, 0.0)));
        // 500 px/s upward: past the 10px margin within a tenth of a second
        for _ in 0..6 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.bullets.active_count(), 0);
    }

    #[test]
    fn test_enemy_spawns_on_timer() {
        let mut state = playing_state(2024);
        state.trail_chance = 0.0;
        let idle = TickInput::default();

        for _ in 0..3 {
            tick(&mut state, &idle, 0.5);
        }
        assert_eq!(state.enemies.active_count(), 0);

        tick(&mut state, &idle, 0.5);
        assert_eq!(state.enemies.active_count(), 1);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        );
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing_state(99999);
        let mut state2 = playing_state(99999);

        let inputs = [
            TickInput {
                movement: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.enemies.active_count(), state2.enemies.active_count());
        assert_eq!(state1.particles.len(), state2.particles.len());
        assert_eq!(state1.player.score, state2.player.score);
        assert!((state1.player.pos - state2.player.pos).length() < 1e-4);
    }
}
