#![deny(unsafe_code)]
//! Per-tick force kernel for a particle system.
//!
//! A [`ForceContext`] owns the precomputed noise field and direction table.
//! [`ForceContext::apply_force`] applies one [`ForceDescriptor`] to one
//! particle; [`LayerForces`] drives a layer's whole force list over its
//! particles, optionally in parallel with the `parallel` feature.

pub mod acceleration;
pub mod apply;
pub mod context;
pub mod descriptor;
pub mod layer;
pub mod physics;
pub mod shape;
pub mod timing;

pub use acceleration::AccelerationForce;
pub use apply::ForceFrame;
pub use context::ForceContext;
pub use descriptor::{
    BlockedCollision, ForceDescriptor, ForceKind, ForceShape, PlaneCollisionParams,
    PointGravityParams, TimedValue, TimingType, WindParams,
};
pub use layer::{LayerForces, PlacedForce, Tick};
pub use shape::is_position_in_force_shape;
pub use timing::get_value;

pub use particle_forces_core::{Particle, RandomSource, TableConfig, TimedCurve, Xorshift64};
