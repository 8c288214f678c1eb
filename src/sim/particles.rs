//! Particle bursts for collisions and goals

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Particle, ParticleColor};
use crate::consts::*;

/// Flat particle collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    /// Maximum live particles; the oldest are evicted to make room
    pub capacity: usize,
}

impl ParticleSystem {
    pub fn new(particles: Vec<Particle>, capacity: usize) -> Self {
        Self {
            particles,
            capacity,
        }
    }

    /// Spawn `count` particles at `origin` with random velocity and size
    pub fn spawn_burst<R: Rng>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        color: ParticleColor,
        count: usize,
    ) {
        for _ in 0..count {
            if self.capacity == 0 {
                return;
            }
            if self.particles.len() >= self.capacity {
                self.particles.remove(0);
            }
            let vel = Vec2::new(
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            );
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: 1.0,
                color,
                size: rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            });
        }
    }

    /// Integrate, age and damp every particle, then drop the dead ones
    pub fn advance(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.life -= PARTICLE_DECAY;
            particle.vel *= PARTICLE_DAMPING;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut system = ParticleSystem::new(Vec::new(), MAX_PARTICLES);
        let origin = Vec2::new(100.0, 50.0);
        system.spawn_burst(&mut rng, origin, ParticleColor::Wall, 12);

        assert_eq!(system.particles.len(), 12);
        for p in &system.particles {
            assert_eq!(p.pos, origin);
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, ParticleColor::Wall);
            assert!(p.vel.x.abs() <= PARTICLE_SPREAD && p.vel.y.abs() <= PARTICLE_SPREAD);
            assert!((PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE).contains(&p.size));
        }
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = ParticleSystem::new(Vec::new(), 10);
        system.spawn_burst(&mut rng, Vec2::ZERO, ParticleColor::Player, 8);
        system.spawn_burst(&mut rng, Vec2::ONE, ParticleColor::Ai, 8);
        assert_eq!(system.particles.len(), 10);
        assert_eq!(system.particles[0].color, ParticleColor::Player);
        assert_eq!(system.particles[9].color, ParticleColor::Ai);
    }

    #[test]
    fn test_advance_moves_and_damps() {
        let mut system = ParticleSystem::new(
            vec![Particle {
                pos: Vec2::ZERO,
                vel: Vec2::new(2.0, -1.0),
                life: 1.0,
                color: ParticleColor::Wall,
                size: 3.0,
            }],
            MAX_PARTICLES,
        );
        system.advance();
        let p = &system.particles[0];
        assert_eq!(p.pos, Vec2::new(2.0, -1.0));
        assert!((p.life - 0.98).abs() < 1e-6);
        assert!((p.vel.x - 1.96).abs() < 1e-6);
    }

    #[test]
    fn test_particles_expire() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut system = ParticleSystem::new(Vec::new(), MAX_PARTICLES);
        system.spawn_burst(&mut rng, Vec2::ZERO, ParticleColor::Ai, 5);
        let mut ticks = 0;
        while !system.particles.is_empty() {
            system.advance();
            ticks += 1;
            assert!(system.particles.iter().all(|p| p.life > 0.0));
            assert!(ticks <= 60);
        }
        assert!(ticks >= 49);
    }

    proptest! {
        #[test]
        fn prop_life_strictly_decreases(seed in any::<u64>(), count in 1usize..30) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut system = ParticleSystem::new(Vec::new(), MAX_PARTICLES);
            system.spawn_burst(&mut rng, Vec2::ZERO, ParticleColor::Wall, count);
            let before: Vec<f32> = system.particles.iter().map(|p| p.life).collect();
            system.advance();
            for (p, old) in system.particles.iter().zip(before) {
                prop_assert!(p.life < old);
                prop_assert!(p.life > 0.0);
            }
        }
    }
}
