//! Spatial containment test shared by all shape-gated forces.

use crate::descriptor::{ForceDescriptor, ForceShape};
use glam::Vec3;

/// True if `particle_pos` lies inside the descriptor's shape centered at
/// `force_origin`, or if the descriptor has infinite range.
///
/// Box boundaries are inclusive. Negative extents make the test always false
/// for boxes; spheres compare squared distances so a negative radius acts
/// like its absolute value.
pub fn is_position_in_force_shape(
    descriptor: &ForceDescriptor,
    particle_pos: Vec3,
    force_origin: Vec3,
) -> bool {
    if descriptor.is_infinity_range {
        return true;
    }
    match descriptor.shape {
        ForceShape::Box { half_size } => {
            let offset = (particle_pos - force_origin).abs();
            offset.cmple(half_size).all()
        }
        ForceShape::Sphere { .. } => {
            force_origin.distance_squared(particle_pos) <= descriptor.shape.radius_squared()
        }
    }
}
