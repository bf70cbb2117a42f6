#![deny(unsafe_code)]
//! Core types for the particle force kernel.
//!
//! Provides the `Particle` record, `TimedCurve` keyframe curves, the
//! precomputed `NoiseField` and `DirectionTable`, their `TableConfig`,
//! the `Xorshift64` PRNG with the `RandomSource` trait, and `ForceError`.

pub mod config;
pub mod curve;
pub mod directions;
pub mod error;
pub mod noise_field;
pub mod params;
pub mod particle;
pub mod prng;

pub use config::TableConfig;
pub use curve::{Interpolate, TimedCurve};
pub use directions::DirectionTable;
pub use error::ForceError;
pub use noise_field::NoiseField;
pub use particle::{Particle, DEATH_EPSILON};
pub use prng::{RandomSource, Xorshift64};
