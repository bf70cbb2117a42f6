//! Precomputed tileable vector-noise table.
//!
//! The field is built once from two octaves of Perlin noise over a
//! normalized `[0, 2) x [0, 2)` domain. Each axis of the domain is mapped
//! onto a circle in 4D noise space, so the table wraps seamlessly on both
//! axes. Lookups read one row (chosen by particle index) and interpolate
//! linearly along the time axis.

use crate::error::ForceError;
use glam::Vec3;
use noise::{NoiseFn, Perlin};
use std::f64::consts::TAU;

/// Length of the normalized domain along each axis.
const DOMAIN_PERIOD: f64 = 2.0;

/// Radius of the circle each axis is wrapped onto, chosen so the circle's
/// circumference equals the domain period.
const TORUS_RADIUS: f64 = DOMAIN_PERIOD / TAU;

/// Seed offset between the x, y and z component generators.
const COMPONENT_SEED_STRIDE: u32 = 7919;

/// A width x height table of noise vectors, row-major.
#[derive(Debug, Clone)]
pub struct NoiseField {
    width: usize,
    height: usize,
    data: Vec<Vec3>,
}

impl NoiseField {
    /// Generates the table from two Perlin octaves.
    ///
    /// Returns `ForceError::InvalidTableSize` if either dimension is zero, or
    /// `ForceError::TableSizeOverflow` if `width * height` overflows.
    pub fn generate(width: usize, height: usize, seed: u32) -> Result<Self, ForceError> {
        let len = checked_len(width, height)?;
        let components = [
            Perlin::new(seed),
            Perlin::new(seed.wrapping_add(COMPONENT_SEED_STRIDE)),
            Perlin::new(seed.wrapping_add(2 * COMPONENT_SEED_STRIDE)),
        ];
        let mut data = Vec::with_capacity(len);
        for row in 0..height {
            let v = DOMAIN_PERIOD * row as f64 / height as f64;
            for col in 0..width {
                let u = DOMAIN_PERIOD * col as f64 / width as f64;
                let point = torus_point(u, v);
                let [x, y, z] = components.each_ref().map(|p| two_octaves(p, point));
                data.push(Vec3::new(x as f32, y as f32, z as f32));
            }
        }
        log::debug!("generated {width}x{height} noise field (seed {seed})");
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps a prebuilt row-major table.
    ///
    /// Returns `ForceError::InvalidTableSize` if a dimension is zero or the
    /// data length does not equal `width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<Vec3>) -> Result<Self, ForceError> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(ForceError::InvalidTableSize {
                name: "noise_data",
                value: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Table width (time axis).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Table height (particle index axis).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads cell `(col, row)` with wraparound on both axes.
    pub fn get(&self, col: usize, row: usize) -> Vec3 {
        self.data[(row % self.height) * self.width + col % self.width]
    }

    /// Looks up the noise vector for a particle.
    ///
    /// The time coordinate is `over_life * frequency` in table periods, so a
    /// frequency of 1 sweeps the whole row once over a particle's life. The
    /// row is `index mod height`. Adjacent columns are interpolated linearly;
    /// rows are never blended.
    pub fn sample(&self, over_life: f32, frequency: f32, index: u32) -> Vec3 {
        let width = self.width as f32;
        let mut pos = (over_life * frequency * width).rem_euclid(width);
        if !pos.is_finite() {
            pos = 0.0;
        }
        let col = (pos.floor() as usize).min(self.width - 1);
        let frac = pos - col as f32;
        let row = index as usize % self.height;
        self.get(col, row).lerp(self.get(col + 1, row), frac)
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, ForceError> {
    if width == 0 {
        return Err(ForceError::InvalidTableSize {
            name: "noise_width",
            value: width,
        });
    }
    if height == 0 {
        return Err(ForceError::InvalidTableSize {
            name: "noise_height",
            value: height,
        });
    }
    width
        .checked_mul(height)
        .ok_or(ForceError::TableSizeOverflow { width, height })
}

/// Maps a point of the `[0, 2)^2` domain onto a torus in 4D.
fn torus_point(u: f64, v: f64) -> [f64; 4] {
    let a = TAU * u / DOMAIN_PERIOD;
    let b = TAU * v / DOMAIN_PERIOD;
    [
        TORUS_RADIUS * a.cos(),
        TORUS_RADIUS * a.sin(),
        TORUS_RADIUS * b.cos(),
        TORUS_RADIUS * b.sin(),
    ]
}

/// Base octave plus one octave at double frequency and half amplitude.
fn two_octaves(noise: &Perlin, point: [f64; 4]) -> f64 {
    let doubled = point.map(|c| c * 2.0);
    noise.get(point) + 0.5 * noise.get(doubled)
}
