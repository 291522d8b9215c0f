//! Particle bursts for coin pickups
//!
//! Purely visual: the simulation never reads particle state. The driver
//! forwards `GameEvent`s each frame, steps the particles with the same dt
//! and draws whatever is alive.
//!
//! # Example
//!
//! ```rust
//! use platformer::particles::ParticleSystem;
//!
//! let mut particles = ParticleSystem::with_seed(7);
//! // events come from Game::update
//! particles.handle_events(&[]);
//! particles.update(1.0 / 60.0);
//! assert!(particles.is_empty());
//! ```

use crate::game::{GameEvent, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PARTICLES_PER_BURST: usize = 12;
pub const PARTICLE_LIFETIME: f32 = 0.6;
pub const PARTICLE_GRAVITY: f32 = 800.0;
pub const PARTICLE_SIZE: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: f32,
    pub color: Rgb,
}

impl Particle {
    /// Opacity in `[0, 1]`, fading linearly over the lifetime.
    pub fn alpha(&self) -> f32 {
        (self.life / PARTICLE_LIFETIME).clamp(0.0, 1.0)
    }
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new() -> Self {
        ParticleSystem {
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        ParticleSystem {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawns a burst at `(x, y)`, biased upward.
    pub fn emit(&mut self, x: f32, y: f32, color: Rgb) {
        for _ in 0..PARTICLES_PER_BURST {
            let vx = self.rng.gen_range(-100.0..100.0);
            let vy = self.rng.gen_range(-300.0..-100.0);
            self.particles.push(Particle {
                x,
                y,
                vx,
                vy,
                life: PARTICLE_LIFETIME,
                color,
            });
        }
    }

    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::CoinCollected { x, y, color, .. } = event {
                self.emit(*x, *y, *color);
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.vy += PARTICLE_GRAVITY * dt;
            p.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ResetCause, COIN_PARTICLE_COLOR};

    #[test]
    fn test_coin_event_spawns_burst() {
        let mut system = ParticleSystem::with_seed(1);
        system.handle_events(&[
            GameEvent::PlayerReset { cause: ResetCause::Enemy },
            GameEvent::CoinCollected {
                index: 0,
                x: 108.0,
                y: 108.0,
                color: COIN_PARTICLE_COLOR,
            },
        ]);

        assert_eq!(system.particles().len(), PARTICLES_PER_BURST);
        for p in system.particles() {
            assert_eq!((p.x, p.y), (108.0, 108.0));
            assert!(p.vx >= -100.0 && p.vx < 100.0);
            assert!(p.vy >= -300.0 && p.vy < -100.0);
            assert_eq!(p.color, COIN_PARTICLE_COLOR);
            assert_eq!(p.alpha(), 1.0);
        }
    }

    #[test]
    fn test_particles_fall_and_expire() {
        let mut system = ParticleSystem::with_seed(2);
        system.emit(0.0, 0.0, COIN_PARTICLE_COLOR);
        let before: Vec<f32> = system.particles().iter().map(|p| p.vy).collect();

        system.update(0.1);
        for (p, vy) in system.particles().iter().zip(before) {
            assert!((p.vy - (vy + 80.0)).abs() < 1e-3);
            assert!(p.alpha() < 1.0 && p.alpha() > 0.0);
        }

        for _ in 0..6 {
            system.update(0.1);
        }
        assert!(system.is_empty());
    }
}
