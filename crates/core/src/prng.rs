//! Deterministic PRNG based on the Xorshift64 algorithm, plus the
//! [`RandomSource`] trait through which the force kernel draws random numbers.
//!
//! Same seed always produces the same sequence of values across all
//! platforms (pure integer arithmetic in the core algorithm). Callers that
//! want reproducible runs seed explicitly; [`Xorshift64::from_clock`] gives
//! the wall-clock seeding used for production tables.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform random numbers for the stochastic parts of the kernel
/// (reflection rolls, reflection chaos, randomized reflection force).
///
/// Implementors only provide [`next_u32`](RandomSource::next_u32); the
/// float and percent helpers are derived from it.
pub trait RandomSource {
    /// Returns the next uniformly distributed 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Returns a uniformly distributed f32 in [0, 1).
    ///
    /// Uses the upper 24 bits so every result is exactly representable.
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns a uniformly distributed f32 in [min, max).
    fn next_range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a uniformly distributed integer in [0, 100).
    fn next_percent(&mut self) -> u32 {
        self.next_u32() % 100
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is automatically
/// replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, uses `0x5EED_DEAD_BEEF_CAFE` as a fallback.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a PRNG seeded from the wall clock (nanoseconds since the epoch).
    ///
    /// Not reproducible across runs. Falls back to the fixed seed if the clock
    /// reads before the epoch.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(Self::FALLBACK_SEED);
        log::debug!("seeding xorshift64 from wall clock: {nanos:#x}");
        Self::new(nanos)
    }

    /// Creates an independent stream derived from `seed` and `stream`.
    ///
    /// Both inputs go through a splitmix64 finalizer so neighbouring stream
    /// ids (consecutive particle ids, consecutive ticks) start far apart.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let mut z = seed ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::new(z ^ (z >> 31))
    }

    /// Advances the state and returns the next 64-bit value.
    ///
    /// Implements xorshift64 with shifts (13, 7, 17).
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl RandomSource for Xorshift64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}
