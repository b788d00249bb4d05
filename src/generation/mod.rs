//! # Generation Module
//!
//! Procedural terrain generation for the world grid.
//!
//! Generation is driven by a [`GenerationConfig`] plus an injected, seedable
//! random number generator, so identical seed and dimensions reproduce the
//! same world. The [`Generator`] trait gives all generation systems a
//! consistent interface.

pub mod terrain;

pub use terrain::TerrainGenerator;

use crate::world::Grid;
use crate::OverlandResult;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural terrain generation.
///
/// The tuning knobs default to the values the terrain rules were balanced
/// around; tests narrow them (for example disabling mountains) to exercise
/// a single pass in isolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// World width in tiles
    pub width: u32,
    /// World height in tiles
    pub height: u32,
    /// Water seed points per map cell (fraction of the map area)
    pub water_seed_density: f64,
    /// Probability that a water seed point stamps a water body (0.0 to 1.0)
    pub water_body_chance: f64,
    /// Stamp radius of a water body, in tiles
    pub water_body_radius: u32,
    /// Mountain seed points per map cell (fraction of the map area)
    pub mountain_seed_density: f64,
    /// Probability that a mountain seed point stamps a range (0.0 to 1.0)
    pub mountain_range_chance: f64,
    /// Minimum mountain range radius, in tiles; must not exceed
    /// `max_range_size` or generation fails
    pub min_range_size: u32,
    /// Maximum mountain range radius, in tiles
    pub max_range_size: u32,
}

impl GenerationConfig {
    /// Creates a configuration for a `width` x `height` world.
    ///
    /// # Examples
    ///
    /// ```
    /// use overland::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42, 100, 100);
    /// assert_eq!(config.seed, 42);
    /// assert_eq!(config.water_body_radius, 2);
    /// ```
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        Self {
            seed,
            width,
            height,
            water_seed_density: 0.025,
            water_body_chance: 0.7,
            water_body_radius: 2,
            mountain_seed_density: 0.025,
            mountain_range_chance: 0.6,
            min_range_size: 2,
            max_range_size: 4,
        }
    }

    /// Creates a configuration for testing with a small world.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(seed, 24, 24)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(
            42,
            crate::config::DEFAULT_MAP_WIDTH,
            crate::config::DEFAULT_MAP_HEIGHT,
        )
    }
}

/// Trait for procedural generators.
///
/// All generation systems implement this trait, keeping the interface
/// consistent: content is produced from a config and an injected rng, and
/// can be validated against its own invariants after the fact.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> OverlandResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> OverlandResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Counts cells of each terrain kind, for logging and validation.
    pub fn terrain_histogram(grid: &Grid) -> [(crate::TerrainType, usize); 5] {
        let mut histogram = crate::TerrainType::ALL.map(|terrain| (terrain, 0));
        for (_, tile) in grid.iter() {
            for entry in histogram.iter_mut() {
                if entry.0 == tile.terrain {
                    entry.1 += 1;
                }
            }
        }
        histogram
    }
}
