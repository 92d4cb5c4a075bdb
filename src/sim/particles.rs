//! Particle bursts for visual effects
//!
//! Particles never affect gameplay. They are spawned in bursts, integrated each
//! step, aged by elapsed time and dropped once their lifetime runs out.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// A single short-lived particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [f32; 4],
    /// Seconds left before removal
    pub lifetime: f32,
    pub max_lifetime: f32,
    pub size: f32,
}

impl Particle {
    /// Opacity for rendering: remaining fraction of the lifetime, in [0, 1]
    pub fn alpha(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }

    /// Particle color with alpha faded by remaining lifetime
    pub fn faded_color(&self) -> [f32; 4] {
        let [r, g, b, a] = self.color;
        [r, g, b, a * self.alpha()]
    }
}

/// How particle velocity evolves between steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParticleMotion {
    /// Constant downward acceleration (pixels/s², +y is down)
    Gravity(f32),
    /// Velocity multiplied by this factor every step
    Damping(f32),
}

/// Parameters for one burst
#[derive(Debug, Clone)]
pub struct Burst {
    pub pos: Vec2,
    pub color: [f32; 4],
    pub count: usize,
    /// Speed range (pixels/s), sampled uniformly
    pub speed: Range<f32>,
    /// Lifetime of every particle in the burst (seconds)
    pub lifetime: f32,
    /// Size range (pixels), sampled uniformly
    pub size: Range<f32>,
}

/// Growable particle collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    pub motion: ParticleMotion,
    /// Optional hard cap; oldest particles are evicted to make room
    pub max_particles: Option<usize>,
}

impl ParticleSystem {
    pub fn new(motion: ParticleMotion) -> Self {
        Self {
            particles: Vec::new(),
            motion,
            max_particles: None,
        }
    }

    pub fn with_cap(motion: ParticleMotion, max_particles: usize) -> Self {
        Self {
            max_particles: Some(max_particles),
            ..Self::new(motion)
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Spawn `burst.count` particles radiating from `burst.pos` in random directions
    pub fn add_burst(&mut self, burst: &Burst, rng: &mut impl Rng) {
        if burst.count == 0 || self.max_particles == Some(0) {
            return;
        }

        self.particles.reserve(burst.count);
        for _ in 0..burst.count {
            let angle = rng.random_range(0.0..360.0f32).to_radians();
            let speed = sample(rng, &burst.speed);
            let size = sample(rng, &burst.size);
            self.particles.push(Particle {
                pos: burst.pos,
                vel: polar_to_cartesian(speed, angle),
                color: burst.color,
                lifetime: burst.lifetime,
                max_lifetime: burst.lifetime,
                size,
            });
        }
        self.evict_overflow();
    }

    /// Add a single particle, evicting the oldest one if capped
    pub fn push(&mut self, particle: Particle) {
        if self.max_particles == Some(0) {
            return;
        }
        self.particles.push(particle);
        self.evict_overflow();
    }

    /// Drop the oldest particles beyond the cap in one pass
    fn evict_overflow(&mut self) {
        let Some(cap) = self.max_particles else {
            return;
        };
        let overflow = self.particles.len().saturating_sub(cap);
        if overflow > 0 {
            self.particles.drain(..overflow);
        }
    }

    /// Integrate, age and prune particles
    pub fn update(&mut self, dt: f32) {
        if self.particles.is_empty() {
            return;
        }

        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel * dt;
            match self.motion {
                ParticleMotion::Gravity(g) => particle.vel.y += g * dt,
                ParticleMotion::Damping(factor) => particle.vel *= factor,
            }
            particle.lifetime -= dt;
        }
        self.particles.retain(|p| p.lifetime > 0.0);
    }
}

/// Uniform sample from a range, tolerating empty ranges
fn sample(rng: &mut impl Rng, range: &Range<f32>) -> f32 {
    if range.end > range.start {
        rng.random_range(range.clone())
    } else {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn burst(count: usize) -> Burst {
        Burst {
            pos: Vec2::new(100.0, 100.0),
            color: [1.0, 0.5, 0.0, 1.0],
            count,
            speed: 50.0..150.0,
            lifetime: 1.0,
            size: 2.0..4.0,
        }
    }

    #[test]
    fn test_burst_spawns_count_with_speed_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut system = ParticleSystem::new(ParticleMotion::Gravity(0.0));
        system.add_burst(&burst(25), &mut rng);

        assert_eq!(system.len(), 25);
        for p in system.iter() {
            let speed = p.vel.length();
            assert!(speed >= 50.0 - 1e-3 && speed <= 150.0 + 1e-3, "speed {speed}");
            assert!(p.size >= 2.0 && p.size < 4.0);
            assert_eq!(p.pos, Vec2::new(100.0, 100.0));
            assert_eq!(p.lifetime, p.max_lifetime);
        }
    }

    #[test]
    fn test_update_empty_is_noop() {
        let mut system = ParticleSystem::new(ParticleMotion::Damping(0.98));
        system.update(1.0 / 60.0);
        assert!(system.is_empty());
    }

    #[test]
    fn test_lifetime_decreases_until_removed() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = ParticleSystem::new(ParticleMotion::Gravity(60.0));
        system.add_burst(&burst(10), &mut rng);

        let mut last = system.particles[0].lifetime;
        // 1.0s lifetime, 0.25s steps: alive after 3 steps, gone after the 4th
        for _ in 0..3 {
            system.update(0.25);
            assert_eq!(system.len(), 10);
            let now = system.particles[0].lifetime;
            assert!(now < last);
            last = now;
        }
        system.update(0.25);
        assert!(system.is_empty());
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut system = ParticleSystem::new(ParticleMotion::Gravity(100.0));
        system.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: [1.0; 4],
            lifetime: 1.0,
            max_lifetime: 1.0,
            size: 1.0,
        });
        system.update(0.5);
        assert!((system.particles[0].vel.y - 50.0).abs() < 1e-5);
    }

    #[test]
    fn test_damping_slows_particles() {
        let mut system = ParticleSystem::new(ParticleMotion::Damping(0.98));
        system.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(100.0, 0.0),
            color: [1.0; 4],
            lifetime: 1.0,
            max_lifetime: 1.0,
            size: 1.0,
        });
        system.update(0.1);
        assert!((system.particles[0].vel.x - 98.0).abs() < 1e-4);
        assert!((system.particles[0].pos.x - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut system = ParticleSystem::with_cap(ParticleMotion::Damping(0.98), 5);
        let mut b = burst(3);
        system.add_burst(&b, &mut rng);
        b.pos = Vec2::new(500.0, 500.0);
        system.add_burst(&b, &mut rng);

        assert_eq!(system.len(), 5);
        // The newest three all come from the second burst
        let newest = system.particles.iter().rev().take(3);
        assert!(newest.into_iter().all(|p| p.pos == Vec2::new(500.0, 500.0)));
    }

    #[test]
    fn test_burst_larger_than_cap_keeps_newest() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut system = ParticleSystem::with_cap(ParticleMotion::Gravity(0.0), 4);
        let mut b = burst(3);
        system.add_burst(&b, &mut rng);
        b.pos = Vec2::new(500.0, 500.0);
        b.count = 10;
        system.add_burst(&b, &mut rng);

        assert_eq!(system.len(), 4);
        assert!(system.iter().all(|p| p.pos == Vec2::new(500.0, 500.0)));
    }

    #[test]
    fn test_full_system_keeps_cap_across_many_bursts() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut system = ParticleSystem::with_cap(ParticleMotion::Damping(0.98), 4000);
        for i in 0..200 {
            let mut b = burst(30);
            b.pos = Vec2::new(i as f32, 0.0);
            system.add_burst(&b, &mut rng);
            assert!(system.len() <= 4000);
        }
        assert_eq!(system.len(), 4000);
        // 6000 spawned, the oldest 2000 evicted: index 2000 falls in burst 66
        assert_eq!(system.particles[0].pos.x, 66.0);
        assert_eq!(system.particles[3999].pos.x, 199.0);
    }

    #[test]
    fn test_zero_cap_disables_particles() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut system = ParticleSystem::with_cap(ParticleMotion::Damping(0.98), 0);
        system.add_burst(&burst(10), &mut rng);
        assert!(system.is_empty());
    }

    proptest! {
        #[test]
        fn prop_alpha_in_unit_range(lifetime in -5.0f32..5.0, max in -1.0f32..5.0) {
            let p = Particle {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                color: [1.0; 4],
                lifetime,
                max_lifetime: max,
                size: 1.0,
            };
            let a = p.alpha();
            prop_assert!((0.0..=1.0).contains(&a));
        }
    }
}
