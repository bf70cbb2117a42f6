//! The per-particle, per-force entry point.

use crate::context::ForceContext;
use crate::descriptor::{ForceDescriptor, ForceKind, TimedValue};
use crate::physics;
use crate::shape::is_position_in_force_shape;
use crate::timing::get_value;
use glam::Vec3;
use particle_forces_core::curve::Interpolate;
use particle_forces_core::particle::Particle;
use particle_forces_core::prng::RandomSource;

/// Everything about the current tick that is not stored on the particle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceFrame {
    /// Tick duration in seconds.
    pub dt: f32,
    /// Normalized particle age in [0, 1].
    pub particle_over_life: f32,
    /// Normalized age of the owning layer in [0, 1].
    pub layer_over_life: f32,
    /// Gravity direction.
    pub down: Vec3,
    /// Particle position at the start of the tick; plane collision tests the
    /// segment from here to the current position.
    pub prev_position: Vec3,
    /// World-space origin of the force.
    pub force_origin: Vec3,
}

impl ForceContext {
    /// Applies one force to one particle for one tick.
    ///
    /// Inactive descriptors leave the particle untouched. Every kind except
    /// gravity is skipped when the particle lies outside the descriptor's
    /// shape. Applying several forces is order dependent: each sees the
    /// state the previous one left behind.
    pub fn apply_force<R: RandomSource + ?Sized>(
        &self,
        descriptor: &ForceDescriptor,
        particle: &mut Particle,
        frame: &ForceFrame,
        rng: &mut R,
    ) {
        if !descriptor.is_active {
            return;
        }
        let gated = !matches!(descriptor.kind, ForceKind::Gravity { .. });
        if gated && !is_position_in_force_shape(descriptor, particle.position, frame.force_origin)
        {
            return;
        }

        let was_alive = !particle.is_dead();
        let elapsed = particle.life;
        match &descriptor.kind {
            ForceKind::Drag { strength } => physics::drag::apply(
                resolve(descriptor, frame, elapsed, strength),
                frame.dt,
                &mut particle.velocity,
            ),
            ForceKind::Lorentz { axis, power } => physics::lorentz::apply(
                *axis,
                resolve(descriptor, frame, elapsed, power),
                frame.dt,
                frame.force_origin,
                particle.position,
                &mut particle.velocity,
            ),
            ForceKind::Gravity { power } => physics::gravity::apply(
                frame.down,
                resolve(descriptor, frame, elapsed, power),
                frame.dt,
                &mut particle.velocity,
            ),
            ForceKind::Wind(params) => physics::wind::apply(
                params,
                resolve(descriptor, frame, elapsed, &params.power),
                resolve(descriptor, frame, elapsed, &params.turbulence),
                self.noise(),
                frame,
                particle,
            ),
            ForceKind::PointGravity(params) => physics::point_gravity::apply(
                params,
                resolve(descriptor, frame, elapsed, &params.power),
                self.directions(),
                frame,
                particle,
            ),
            ForceKind::PlaneCollision(params) => physics::plane_collision::apply(
                params,
                resolve(descriptor, frame, elapsed, &params.power),
                frame,
                particle,
                rng,
            ),
        }
        if was_alive && particle.is_dead() {
            log::trace!("{} killed particle {}", descriptor.label(), particle.id);
        }
    }
}

/// Resolves a timed parameter with the descriptor's timing mode.
fn resolve<T: Interpolate>(
    descriptor: &ForceDescriptor,
    frame: &ForceFrame,
    elapsed: f32,
    value: &TimedValue<T>,
) -> T {
    get_value(
        descriptor.timing,
        frame.particle_over_life,
        frame.layer_over_life,
        elapsed,
        value,
    )
}
