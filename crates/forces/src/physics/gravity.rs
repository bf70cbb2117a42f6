//! Uniform acceleration along the caller's down vector.

use glam::Vec3;

/// Adds `down * power * dt` to velocity.
pub fn apply(down: Vec3, power: f32, dt: f32, velocity: &mut Vec3) {
    *velocity += down * power * dt;
}
