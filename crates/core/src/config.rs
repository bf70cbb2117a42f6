//! Configuration for the precomputed lookup tables.
//!
//! A [`TableConfig`] captures everything needed to rebuild the noise field
//! and direction table: their sizes and an optional RNG seed. With a seed,
//! two builds are bit-identical; without one the tables are seeded from the
//! wall clock.

use crate::error::ForceError;
use crate::params::{param_u64_opt, param_usize};
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default noise field width (time axis).
pub const DEFAULT_NOISE_WIDTH: usize = 256;
/// Default noise field height (one row per particle index bucket).
pub const DEFAULT_NOISE_HEIGHT: usize = 256;
/// Default number of unit vectors in the direction table.
pub const DEFAULT_DIRECTION_COUNT: usize = 1024;

/// Sizes and seeding for the noise field and direction table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    pub noise_width: usize,
    pub noise_height: usize,
    pub direction_count: usize,
    /// `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            noise_width: DEFAULT_NOISE_WIDTH,
            noise_height: DEFAULT_NOISE_HEIGHT,
            direction_count: DEFAULT_DIRECTION_COUNT,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Default table sizes with a fixed seed, for reproducible builds.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reads `noise_width`, `noise_height`, `direction_count` and `seed`
    /// from a JSON object, falling back to defaults for missing keys.
    pub fn from_json(params: &Value) -> Self {
        Self {
            noise_width: param_usize(params, "noise_width", DEFAULT_NOISE_WIDTH),
            noise_height: param_usize(params, "noise_height", DEFAULT_NOISE_HEIGHT),
            direction_count: param_usize(params, "direction_count", DEFAULT_DIRECTION_COUNT),
            seed: param_u64_opt(params, "seed"),
        }
    }

    /// Checks that every table dimension is non-zero and that the noise
    /// field size does not overflow.
    pub fn validate(&self) -> Result<(), ForceError> {
        for (name, value) in [
            ("noise_width", self.noise_width),
            ("noise_height", self.noise_height),
            ("direction_count", self.direction_count),
        ] {
            if value == 0 {
                return Err(ForceError::InvalidTableSize { name, value });
            }
        }
        self.noise_width
            .checked_mul(self.noise_height)
            .ok_or(ForceError::TableSizeOverflow {
                width: self.noise_width,
                height: self.noise_height,
            })?;
        Ok(())
    }

    /// The generator that feeds table construction.
    pub fn rng(&self) -> Xorshift64 {
        match self.seed {
            Some(seed) => Xorshift64::new(seed),
            None => Xorshift64::from_clock(),
        }
    }
}
