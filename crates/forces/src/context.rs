//! The shared lookup tables every force call reads.

use particle_forces_core::config::TableConfig;
use particle_forces_core::directions::DirectionTable;
use particle_forces_core::error::ForceError;
use particle_forces_core::noise_field::NoiseField;

/// Handle owning the noise field and direction table.
///
/// Built once before any force is applied and read-only afterwards, so a
/// `&ForceContext` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ForceContext {
    noise: NoiseField,
    directions: DirectionTable,
}

impl ForceContext {
    /// Builds tables with default sizes, seeded from the wall clock.
    pub fn init() -> Result<Self, ForceError> {
        Self::new(&TableConfig::default())
    }

    /// Builds tables from `config`.
    ///
    /// The noise seed and the direction table both come from the config's
    /// generator, so a seeded config reproduces the same context.
    pub fn new(config: &TableConfig) -> Result<Self, ForceError> {
        config.validate()?;
        let mut rng = config.rng();
        let noise_seed = (rng.next_u64() >> 32) as u32;
        let noise = NoiseField::generate(config.noise_width, config.noise_height, noise_seed)?;
        let directions = DirectionTable::generate(config.direction_count, &mut rng)?;
        log::debug!(
            "force context ready: {}x{} noise, {} directions",
            noise.width(),
            noise.height(),
            directions.len()
        );
        Ok(Self { noise, directions })
    }

    /// Wraps prebuilt tables.
    pub fn from_tables(noise: NoiseField, directions: DirectionTable) -> Self {
        Self { noise, directions }
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn directions(&self) -> &DirectionTable {
        &self.directions
    }
}
