//! Collision with an infinite plane through the force origin, with
//! probabilistic reflection.

use super::EPSILON;
use crate::apply::ForceFrame;
use crate::descriptor::{BlockedCollision, PlaneCollisionParams};
use glam::{EulerRot, Quat, Vec3};
use particle_forces_core::particle::Particle;
use particle_forces_core::prng::RandomSource;

/// Detects a front-to-back crossing of the plane between the previous and
/// current position and reflects, kills or stops the particle.
///
/// Particles that were already behind the plane before this tick are
/// blocked unconditionally. Particles that stay in front are untouched.
pub fn apply<R: RandomSource + ?Sized>(
    params: &PlaneCollisionParams,
    power: f32,
    frame: &ForceFrame,
    particle: &mut Particle,
    rng: &mut R,
) {
    let normal = params.normal.normalize_or_zero();
    let a_proj = (frame.prev_position - frame.force_origin).dot(normal);
    let b_proj = (particle.position - frame.force_origin).dot(normal);

    if b_proj <= 0.0 && a_proj > 0.0 {
        if particle.velocity.length() < params.velocity_threshold {
            block(params.on_blocked, particle);
            return;
        }
        let ab_proj = a_proj - b_proj;
        if ab_proj < EPSILON {
            return;
        }
        let travel = particle.position - frame.prev_position;
        particle.position = frame.prev_position + travel * (a_proj / ab_proj);

        if rng.next_percent() < params.reflection_percent {
            particle.velocity = reflect(params, power, normal, particle.velocity, rng);
        } else {
            block(params.on_blocked, particle);
        }
    } else if a_proj < 0.0 && b_proj < 0.0 {
        block(params.on_blocked, particle);
    }
}

fn block(policy: BlockedCollision, particle: &mut Particle) {
    match policy {
        BlockedCollision::Kill => particle.kill(),
        BlockedCollision::ZeroVelocity => particle.velocity = Vec3::ZERO,
    }
}

/// The outgoing velocity of a reflected particle.
fn reflect<R: RandomSource + ?Sized>(
    params: &PlaneCollisionParams,
    power: f32,
    normal: Vec3,
    velocity: Vec3,
    rng: &mut R,
) -> Vec3 {
    let mut reflected = if params.normal_as_reflection_vector {
        normal * velocity.length()
    } else {
        velocity - 2.0 * velocity.dot(normal) * normal
    };

    let chaos = params.reflection_chaos_degrees.to_radians();
    if chaos.abs() > EPSILON {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rng.next_range_f32(-chaos, chaos),
            rng.next_range_f32(-chaos, chaos),
            rng.next_range_f32(-chaos, chaos),
        );
        reflected = rotation * reflected;
        let into_plane = reflected.dot(normal);
        if into_plane < 0.0 {
            reflected -= 2.0 * into_plane * normal;
        }
    }

    reflected *= power;
    if params.randomize_reflection_force {
        reflected *= rng.next_range_f32(params.reflection_force_min, params.reflection_force_max);
    }
    reflected
}
