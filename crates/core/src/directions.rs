//! Precomputed table of unit vectors spread over the sphere.
//!
//! Directions are drawn with `theta = 2π·u1`, `phi = acos(1 − 2·u2)`, which
//! samples the sphere uniformly by area. Particles index the table by their
//! stable id, so a given particle always gets the same direction.

use crate::error::ForceError;
use crate::prng::Xorshift64;
use glam::Vec3;
use std::f64::consts::TAU;

/// Fixed-size table of unit vectors.
#[derive(Debug, Clone)]
pub struct DirectionTable {
    directions: Vec<Vec3>,
}

impl DirectionTable {
    /// Draws `count` directions from `rng`.
    ///
    /// Returns `ForceError::InvalidTableSize` if `count` is zero.
    pub fn generate(count: usize, rng: &mut Xorshift64) -> Result<Self, ForceError> {
        if count == 0 {
            return Err(ForceError::InvalidTableSize {
                name: "direction_count",
                value: count,
            });
        }
        let directions = (0..count)
            .map(|_| {
                let theta = TAU * rng.next_f64();
                let phi = (1.0 - 2.0 * rng.next_f64()).acos();
                Vec3::new(
                    (phi.sin() * theta.cos()) as f32,
                    (phi.sin() * theta.sin()) as f32,
                    phi.cos() as f32,
                )
            })
            .collect();
        log::debug!("generated direction table with {count} entries");
        Ok(Self { directions })
    }

    /// Number of directions in the table.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// The direction for a particle index, wrapping modulo the table size.
    pub fn get(&self, index: u32) -> Vec3 {
        self.directions[index as usize % self.directions.len()]
    }
}
