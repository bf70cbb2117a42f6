//! The particle record the force kernel mutates.
//!
//! Allocation and destruction belong to the caller. The kernel only reads
//! `life`, writes `position`/`velocity`, and signals death by pushing `life`
//! past `life_time`.

use glam::Vec3;

/// Amount added past `life_time` when a force kills a particle.
pub const DEATH_EPSILON: f32 = 0.1;

/// One live particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Stable id assigned at allocation; selects noise rows and table entries.
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Elapsed seconds since spawn.
    pub life: f32,
    /// Total lifetime in seconds.
    pub life_time: f32,
}

impl Particle {
    /// A freshly spawned particle with zero elapsed life.
    pub fn new(id: u32, position: Vec3, velocity: Vec3, life_time: f32) -> Self {
        Self {
            id,
            position,
            velocity,
            life: 0.0,
            life_time,
        }
    }

    /// Marks the particle dead using the shared `life_time + ε` convention.
    pub fn kill(&mut self) {
        self.life = self.life_time + DEATH_EPSILON;
    }

    /// True once elapsed life has reached the lifetime.
    pub fn is_dead(&self) -> bool {
        self.life >= self.life_time
    }

    /// Elapsed life as a fraction of lifetime, clamped to [0, 1].
    ///
    /// A non-positive lifetime counts as fully elapsed.
    pub fn over_life(&self) -> f32 {
        if self.life_time <= 0.0 {
            return 1.0;
        }
        (self.life / self.life_time).clamp(0.0, 1.0)
    }
}
