//! Vortex motion around an axis through the force origin.

use glam::Vec3;

/// Pushes velocity along `normalize((position - origin) × axis)`.
///
/// A particle on the axis (zero cross product) is left untouched.
pub fn apply(
    axis: Vec3,
    power: f32,
    dt: f32,
    force_origin: Vec3,
    position: Vec3,
    velocity: &mut Vec3,
) {
    let direction = (position - force_origin).cross(axis).normalize_or_zero();
    *velocity += direction * power * dt;
}
