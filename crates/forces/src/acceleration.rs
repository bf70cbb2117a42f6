//! Legacy per-layer acceleration.
//!
//! Predates [`ForceDescriptor`](crate::descriptor::ForceDescriptor): a plain
//! acceleration vector with no shape, no timing mode and no physics kind.

use glam::Vec3;
use particle_forces_core::curve::TimedCurve;
use particle_forces_core::particle::Particle;

/// Acceleration sampled over layer life, optionally scaled over particle life.
#[derive(Debug, Clone, PartialEq)]
pub struct AccelerationForce {
    pub force: TimedCurve<Vec3>,
    pub over_life: Option<TimedCurve<f32>>,
}

impl AccelerationForce {
    /// A constant acceleration.
    pub fn constant(force: Vec3) -> Self {
        Self {
            force: TimedCurve::constant(force),
            over_life: None,
        }
    }

    /// Scales the acceleration by `curve` sampled at normalized particle life
    /// (builder pattern).
    pub fn with_over_life(mut self, curve: TimedCurve<f32>) -> Self {
        self.over_life = Some(curve);
        self
    }

    pub fn apply(&self, particle: &mut Particle, layer_over_life: f32, dt: f32) {
        let mut acceleration = self.force.sample(layer_over_life);
        if let Some(curve) = &self.over_life {
            acceleration *= curve.sample(particle.over_life());
        }
        particle.velocity += acceleration * dt;
    }
}
