//! Attraction toward a point, with an inner well that pins or kills.

use crate::apply::ForceFrame;
use crate::descriptor::PointGravityParams;
use glam::Vec3;
use particle_forces_core::directions::DirectionTable;
use particle_forces_core::particle::Particle;

/// Pulls a particle toward the force origin.
///
/// Outside the well radius, velocity gains `direction * power * dt`, where
/// `direction` points at the origin or, with random sphere points, at the
/// particle's own point on the well surface. Inside the well the particle is
/// killed or moved back onto the well surface. A particle sitting exactly on
/// the origin has no direction to be pushed along and is left in place.
pub fn apply(
    params: &PointGravityParams,
    power: f32,
    directions: &DirectionTable,
    frame: &ForceFrame,
    particle: &mut Particle,
) {
    let origin = frame.force_origin;
    let to_center = (origin - particle.position).normalize_or_zero();
    let direction = if params.use_random_points_on_sphere {
        let target = origin + directions.get(particle.id) * params.radius;
        (target - particle.position).normalize_or_zero()
    } else {
        to_center
    };

    let radius_squared = params.radius * params.radius;
    if particle.position.distance_squared(origin) > radius_squared {
        particle.velocity += direction * power * frame.dt;
    } else if params.kill_on_reach {
        particle.kill();
    } else if to_center != Vec3::ZERO {
        particle.position = origin - to_center * params.radius;
    }
}
