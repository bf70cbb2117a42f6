//! Per-kind physics routines.
//!
//! Each routine receives parameter values already resolved for the current
//! particle and mutates velocity, position or life in place. Shape gating
//! happens in the dispatcher, not here.

pub mod drag;
pub mod gravity;
pub mod lorentz;
pub mod plane_collision;
pub mod point_gravity;
pub mod wind;

/// Magnitudes at or below this are treated as zero.
pub const EPSILON: f32 = 1e-5;
