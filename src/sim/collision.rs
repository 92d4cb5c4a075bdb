//! Circle-circle collision detection and response
//!
//! Every gameplay body is a circle. Two bodies touch only when the distance
//! between their centers is strictly less than the sum of their radii.

use glam::Vec2;

use super::effects;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Check whether two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Resolve bullet-vs-enemy hits.
///
/// Bullets are scanned in slot order; each bullet is consumed by the first
/// enemy (in slot order) it overlaps, so one bullet damages at most one enemy.
/// Returns the number of enemies destroyed.
pub fn resolve_bullet_hits(state: &mut GameState) -> u32 {
    let mut destroyed = 0;
    let bullet_slots: Vec<usize> = state.bullets.iter().map(|(i, _)| i).collect();

    for bullet_slot in bullet_slots {
        let Some(bullet_pos) = state.bullets.get(bullet_slot).map(|b| b.pos) else {
            continue;
        };

        let target = state
            .enemies
            .iter()
            .find(|(_, enemy)| {
                circles_overlap(bullet_pos, BULLET_RADIUS, enemy.pos, ENEMY_RADIUS)
            })
            .map(|(slot, _)| slot);

        let Some(enemy_slot) = target else {
            continue;
        };

        state.bullets.release(bullet_slot);

        let Some(enemy) = state.enemies.get_mut(enemy_slot) else {
            continue;
        };
        let color = enemy.color();
        enemy.health = enemy.health.saturating_sub(1);
        let pos = enemy.pos;

        if enemy.health == 0 {
            state.enemies.release(enemy_slot);
            state.player.score += KILL_SCORE;
            state
                .particles
                .add_burst(&effects::explosion(pos, color), &mut state.rng);
            state.emit(GameEvent::EnemyDestroyed { pos });
            destroyed += 1;
        } else {
            state
                .particles
                .add_burst(&effects::spark(pos, color), &mut state.rng);
            state.emit(GameEvent::EnemyDamaged { pos });
        }
    }

    destroyed
}

/// Resolve player-vs-enemy contact.
///
/// Ignored entirely while the player is invincible. The first overlapping
/// enemy is removed and costs one health point, which starts the
/// invincibility window. Returns true if the player took damage.
pub fn resolve_player_hits(state: &mut GameState) -> bool {
    if state.player.invincible {
        return false;
    }

    let player_pos = state.player.pos;
    let hit = state
        .enemies
        .iter()
        .find(|(_, enemy)| circles_overlap(player_pos, PLAYER_RADIUS, enemy.pos, ENEMY_RADIUS))
        .map(|(slot, _)| slot);

    let Some(enemy_slot) = hit else {
        return false;
    };

    if !state.player.take_hit() {
        return false;
    }

    state.enemies.release(enemy_slot);
    state
        .particles
        .add_burst(&effects::player_hit(player_pos), &mut state.rng);
    state.emit(GameEvent::PlayerHit {
        health: state.player.health,
    });
    log::debug!("player hit, health now {}", state.player.health);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy};
    use proptest::prelude::*;

    fn enemy_at(pos: Vec2, health: u8) -> Enemy {
        Enemy {
            pos,
            vel: Vec2::ZERO,
            health,
            rotation: 0.0,
            spin: 0.0,
        }
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345);
        state.reset();
        state
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(19.0, 0.0);
        assert!(!circles_overlap(a, 4.0, b, 15.0));
        assert!(circles_overlap(a, 4.0, Vec2::new(18.9, 0.0), 15.0));
    }

    #[test]
    fn test_lethal_bullet_hit() {
        let mut state = playing_state();
        state.bullets.spawn(Bullet::new(Vec2::new(200.0, 200.0)));
        state.enemies.spawn(enemy_at(Vec2::new(205.0, 195.0), 1));

        let destroyed = resolve_bullet_hits(&mut state);

        assert_eq!(destroyed, 1);
        assert_eq!(state.bullets.active_count(), 0);
        assert_eq!(state.enemies.active_count(), 0);
        assert_eq!(state.player.score, KILL_SCORE);
        assert_eq!(state.particles.len(), effects::EXPLOSION_PARTICLES);
        let explosions = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
            .count();
        assert_eq!(explosions, 1);
    }

    #[test]
    fn test_tough_enemy_survives_one_hit() {
        let mut state = playing_state();
        state.bullets.spawn(Bullet::new(Vec2::new(200.0, 200.0)));
        state.enemies.spawn(enemy_at(Vec2::new(200.0, 200.0), 2));

        assert_eq!(resolve_bullet_hits(&mut state), 0);
        assert_eq!(state.bullets.active_count(), 0);
        assert_eq!(state.enemies.active_count(), 1);
        assert_eq!(state.enemies.get(0).map(|e| e.health), Some(1));
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn test_bullet_consumed_by_first_enemy_only() {
        let mut state = playing_state();
        state.bullets.spawn(Bullet::new(Vec2::new(300.0, 300.0)));
        // Both enemies overlap the bullet
        state.enemies.spawn(enemy_at(Vec2::new(300.0, 290.0), 1));
        state.enemies.spawn(enemy_at(Vec2::new(300.0, 310.0), 1));

        assert_eq!(resolve_bullet_hits(&mut state), 1);
        assert!(state.enemies.get(0).is_none());
        assert!(state.enemies.get(1).is_some());
    }

    #[test]
    fn test_player_hit_starts_invincibility() {
        let mut state = playing_state();
        let pos = state.player.pos;
        state.enemies.spawn(enemy_at(pos, 1));
        state.enemies.spawn(enemy_at(pos + Vec2::new(5.0, 0.0), 1));

        assert!(resolve_player_hits(&mut state));
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH - 1);
        assert!(state.player.invincible);
        assert_eq!(state.enemies.active_count(), 1);

        // Second enemy still overlaps but the player is invincible
        assert!(!resolve_player_hits(&mut state));
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH - 1);
        assert_eq!(state.enemies.active_count(), 1);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 0.0f32..50.0, rb in 0.0f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(circles_overlap(a, ra, b, rb), circles_overlap(b, rb, a, ra));
        }

        #[test]
        fn prop_far_circles_never_overlap(
            ra in 0.1f32..50.0, rb in 0.1f32..50.0, gap in 0.01f32..100.0,
        ) {
            let b = Vec2::new(ra + rb + gap, 0.0);
            prop_assert!(!circles_overlap(Vec2::ZERO, ra, b, rb));
        }
    }
}
