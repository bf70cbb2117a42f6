//! Wind: a directional push whose strength and the particle's position are
//! modulated by the precomputed noise field.

use super::EPSILON;
use crate::apply::ForceFrame;
use crate::descriptor::WindParams;
use glam::Vec3;
use particle_forces_core::noise_field::NoiseField;
use particle_forces_core::particle::Particle;

/// Fixed gain applied to every wind push.
pub const WIND_SCALE: f32 = 100.0;

/// Applies wind to one particle.
///
/// Turbulence moves the position directly along a noise vector; the wind
/// itself accelerates velocity along `params.direction`, scaled by a noise
/// driven multiplier when `params.frequency` is non-zero. Both lookups use
/// the particle id as the noise row, so a particle sees the same noise track
/// every tick.
pub fn apply(
    params: &WindParams,
    power: f32,
    turbulence: f32,
    noise: &NoiseField,
    frame: &ForceFrame,
    particle: &mut Particle,
) {
    let id = particle.id;
    if turbulence.abs() > EPSILON {
        let mut offset = noise.sample(
            frame.particle_over_life,
            params.turbulence_frequency,
            id,
        );
        if offset.dot(params.direction) < 0.0
            && !allows_backward_turbulence(id, params.backward_turbulence_probability)
        {
            offset = -offset;
        }
        particle.position += offset * turbulence * frame.dt;
    }

    let mut multiplier = 1.0;
    if params.frequency.abs() > EPSILON {
        multiplier = noise.sample(frame.particle_over_life, params.frequency, id).x + params.bias;
    }
    particle.velocity += params.direction * frame.dt * multiplier * power * WIND_SCALE;
}

/// Whether this particle may keep turbulence that points against the wind.
///
/// Splits particles into 100 buckets by id; the top `percent` buckets keep
/// backward turbulence.
fn allows_backward_turbulence(id: u32, percent: u32) -> bool {
    id % 100 >= 100 - percent.min(100)
}
