//! # Terrain Generation
//!
//! Three-pass procedural terrain: irregular water bodies, a one-ring coastal
//! sand pass, and mountain ranges with hill skirts.
//!
//! Pass order is load-bearing. Sand is derived from a snapshot of the
//! post-water grid so it never cascades beyond one ring, and mountains run
//! last so their cores take precedence over anything placed earlier.

use crate::generation::{utils, GenerationConfig, Generator};
use crate::world::{Grid, Position, TerrainType};
use crate::{OverlandError, OverlandResult};
use log::debug;
use rand::{rngs::StdRng, Rng};

/// Procedural terrain generator for the world grid.
///
/// Stateless between calls; all randomness comes from the injected rng, so a
/// given seed and config always reproduce the same world.
///
/// # Examples
///
/// ```
/// use overland::{generation, GenerationConfig, Generator, TerrainGenerator};
///
/// let config = GenerationConfig::for_testing(7);
/// let mut rng = generation::utils::create_rng(&config);
/// let grid = TerrainGenerator::new().generate(&config, &mut rng).unwrap();
/// assert_eq!(grid.width(), config.width);
/// assert_eq!(grid.height(), config.height);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TerrainGenerator;

impl TerrainGenerator {
    /// Creates a new terrain generator.
    pub fn new() -> Self {
        Self
    }

    /// Stamps an irregular water body centered on `center`.
    ///
    /// A cell at offset `(dx, dy)` floods when its distance from the center
    /// is within the radius scaled by a per-cell jitter in [0.5, 0.8),
    /// giving ponds an organic, non-circular edge. Overlapping bodies union.
    fn create_water_body(&self, grid: &mut Grid, center: Position, radius: u32, rng: &mut StdRng) {
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                let pos = center + Position::new(dx, dy);
                if !grid.is_valid_position(pos) {
                    continue;
                }

                let distance = center.euclidean_distance(pos);
                if distance <= radius as f64 * (0.5 + rng.gen::<f64>() * 0.3) {
                    grid.set(pos, TerrainType::Water);
                }
            }
        }
    }

    /// Returns a copy of `grid` with every non-water 8-neighbor of a water
    /// cell turned to sand.
    ///
    /// Reads the pre-pass grid and writes to a separate copy: sand produced
    /// by this pass is never itself treated as a non-water neighbor, so the
    /// ring stays exactly one tile deep.
    fn add_sand_around_water(&self, grid: &Grid) -> Grid {
        let mut coasted = grid.clone();

        for (pos, tile) in grid.iter() {
            if tile.terrain != TerrainType::Water {
                continue;
            }

            for neighbor in pos.adjacent_positions() {
                if let Some(neighbor_tile) = grid.get(neighbor) {
                    if neighbor_tile.terrain != TerrainType::Water {
                        coasted.set(neighbor, TerrainType::Sand);
                    }
                }
            }
        }

        coasted
    }

    /// Stamps a mountain range of radius `size` centered on `center`.
    ///
    /// The inner half-radius becomes mountain unconditionally, overwriting
    /// even water or sand. The outer band becomes hill only where the cell
    /// is still plain, so hills never clobber water, sand, or an earlier
    /// range.
    fn create_mountain_range(&self, grid: &mut Grid, center: Position, size: u32) {
        let s = size as i32;
        for dy in -s..=s {
            for dx in -s..=s {
                let pos = center + Position::new(dx, dy);
                if !grid.is_valid_position(pos) {
                    continue;
                }

                let distance = center.euclidean_distance(pos);
                if distance > size as f64 {
                    continue;
                }

                if distance <= size as f64 * 0.5 {
                    grid.set(pos, TerrainType::Mountain);
                } else if grid.get(pos).map(|t| t.terrain) == Some(TerrainType::Plain) {
                    grid.set(pos, TerrainType::Hill);
                }
            }
        }
    }

    /// Draws a random in-bounds seed point for a stamp.
    fn random_point(&self, config: &GenerationConfig, rng: &mut StdRng) -> Position {
        Position::new(
            rng.gen_range(0..config.width) as i32,
            rng.gen_range(0..config.height) as i32,
        )
    }

    /// Number of seed points for a pass at the given density.
    fn seed_point_count(&self, config: &GenerationConfig, density: f64) -> u32 {
        (config.width as f64 * config.height as f64 * density).floor() as u32
    }
}

impl Generator<Grid> for TerrainGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> OverlandResult<Grid> {
        // Also rejects zero dimensions before any pass runs.
        let mut grid = Grid::filled(config.width, config.height, TerrainType::Plain)?;

        if config.min_range_size > config.max_range_size {
            return Err(OverlandError::GenerationFailed(format!(
                "mountain range size bounds are inverted: {}..={}",
                config.min_range_size, config.max_range_size
            )));
        }

        let water_points = self.seed_point_count(config, config.water_seed_density);
        for _ in 0..water_points {
            let center = self.random_point(config, rng);
            if rng.gen::<f64>() < config.water_body_chance {
                self.create_water_body(&mut grid, center, config.water_body_radius, rng);
            }
        }

        grid = self.add_sand_around_water(&grid);

        let mountain_points = self.seed_point_count(config, config.mountain_seed_density);
        for _ in 0..mountain_points {
            let center = self.random_point(config, rng);
            if rng.gen::<f64>() < config.mountain_range_chance {
                let size = rng.gen_range(config.min_range_size..=config.max_range_size);
                self.create_mountain_range(&mut grid, center, size);
            }
        }

        debug!(
            "generated {}x{} terrain (seed {}): {:?}",
            config.width,
            config.height,
            config.seed,
            utils::terrain_histogram(&grid)
        );

        Ok(grid)
    }

    fn validate(&self, content: &Grid, config: &GenerationConfig) -> OverlandResult<()> {
        if content.width() != config.width || content.height() != config.height {
            return Err(OverlandError::GenerationFailed(format!(
                "grid is {}x{}, config asked for {}x{}",
                content.width(),
                content.height(),
                config.width,
                config.height
            )));
        }

        for (pos, tile) in content.iter() {
            if tile.passable != tile.terrain.is_passable()
                || tile.speed_multiplier != tile.terrain.speed_multiplier()
            {
                return Err(OverlandError::GenerationFailed(format!(
                    "tile at ({}, {}) does not match the {:?} catalogue tuple",
                    pos.x, pos.y, tile.terrain
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "TerrainGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn plains(width: u32, height: u32) -> Grid {
        Grid::filled(width, height, TerrainType::Plain).unwrap()
    }

    fn terrain_at(grid: &Grid, x: i32, y: i32) -> TerrainType {
        grid.get(Position::new(x, y)).unwrap().terrain
    }

    #[test]
    fn test_water_body_floods_core_and_clips_rim() {
        let generator = TerrainGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = plains(11, 11);

        generator.create_water_body(&mut grid, Position::new(5, 5), 2, &mut rng);

        // Distance <= 0.5 * radius always floods: center plus cardinals.
        assert_eq!(terrain_at(&grid, 5, 5), TerrainType::Water);
        assert_eq!(terrain_at(&grid, 4, 5), TerrainType::Water);
        assert_eq!(terrain_at(&grid, 6, 5), TerrainType::Water);
        assert_eq!(terrain_at(&grid, 5, 4), TerrainType::Water);
        assert_eq!(terrain_at(&grid, 5, 6), TerrainType::Water);

        // Distance > 0.8 * radius never floods, whatever the jitter draws.
        assert_eq!(terrain_at(&grid, 7, 5), TerrainType::Plain);
        assert_eq!(terrain_at(&grid, 7, 7), TerrainType::Plain);
        assert_eq!(terrain_at(&grid, 3, 7), TerrainType::Plain);
    }

    #[test]
    fn test_water_body_clips_at_boundary() {
        let generator = TerrainGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = plains(4, 4);

        // Center on the corner; out-of-bounds cells are silently skipped.
        generator.create_water_body(&mut grid, Position::new(0, 0), 2, &mut rng);
        assert_eq!(terrain_at(&grid, 0, 0), TerrainType::Water);
    }

    #[test]
    fn test_sand_rings_water_exactly_once() {
        let generator = TerrainGenerator::new();
        let mut grid = plains(9, 9);
        grid.set(Position::new(4, 4), TerrainType::Water);

        let coasted = generator.add_sand_around_water(&grid);

        assert_eq!(terrain_at(&coasted, 4, 4), TerrainType::Water);
        for neighbor in Position::new(4, 4).adjacent_positions() {
            assert_eq!(coasted.get(neighbor).unwrap().terrain, TerrainType::Sand);
        }
        // One ring only: two tiles out is untouched.
        assert_eq!(terrain_at(&coasted, 4, 2), TerrainType::Plain);
        assert_eq!(terrain_at(&coasted, 6, 6), TerrainType::Plain);
    }

    #[test]
    fn test_sand_does_not_cascade_between_nearby_ponds() {
        let generator = TerrainGenerator::new();
        let mut grid = plains(9, 3);
        grid.set(Position::new(2, 1), TerrainType::Water);
        grid.set(Position::new(6, 1), TerrainType::Water);

        let coasted = generator.add_sand_around_water(&grid);

        // Midpoint between the ponds is outside both rings.
        assert_eq!(terrain_at(&coasted, 4, 1), TerrainType::Plain);
        assert_eq!(terrain_at(&coasted, 3, 1), TerrainType::Sand);
        assert_eq!(terrain_at(&coasted, 5, 1), TerrainType::Sand);
    }

    #[test]
    fn test_mountain_core_and_hill_skirt() {
        let generator = TerrainGenerator::new();
        let mut grid = plains(11, 11);

        generator.create_mountain_range(&mut grid, Position::new(5, 5), 4);

        // Inner half-radius (distance <= 2) is mountain.
        assert_eq!(terrain_at(&grid, 5, 5), TerrainType::Mountain);
        assert_eq!(terrain_at(&grid, 7, 5), TerrainType::Mountain);
        // Outer band (2 < distance <= 4) is hill on plain ground.
        assert_eq!(terrain_at(&grid, 8, 5), TerrainType::Hill);
        assert_eq!(terrain_at(&grid, 5, 9), TerrainType::Hill);
        // Beyond the radius is untouched.
        assert_eq!(terrain_at(&grid, 5, 10), TerrainType::Plain);
    }

    #[test]
    fn test_mountain_core_overwrites_water_but_skirt_does_not() {
        let generator = TerrainGenerator::new();
        let mut grid = plains(11, 11);
        // Water in the inner core and in the outer band.
        grid.set(Position::new(5, 5), TerrainType::Water);
        grid.set(Position::new(8, 5), TerrainType::Water);
        grid.set(Position::new(5, 8), TerrainType::Sand);

        generator.create_mountain_range(&mut grid, Position::new(5, 5), 4);

        assert_eq!(terrain_at(&grid, 5, 5), TerrainType::Mountain);
        // The hill rule only replaces plain ground.
        assert_eq!(terrain_at(&grid, 8, 5), TerrainType::Water);
        assert_eq!(terrain_at(&grid, 5, 8), TerrainType::Sand);
    }

    #[test]
    fn test_later_range_core_overwrites_earlier_hills() {
        let generator = TerrainGenerator::new();
        let mut grid = plains(15, 15);

        generator.create_mountain_range(&mut grid, Position::new(4, 7), 4);
        assert_eq!(terrain_at(&grid, 8, 7), TerrainType::Hill);

        // A second range centered on that hill turns it into mountain core.
        generator.create_mountain_range(&mut grid, Position::new(8, 7), 2);
        assert_eq!(terrain_at(&grid, 8, 7), TerrainType::Mountain);
    }

    #[test]
    fn test_generate_rejects_zero_dimensions() {
        let generator = TerrainGenerator::new();
        let mut config = GenerationConfig::for_testing(1);
        config.width = 0;
        let mut rng = utils::create_rng(&config);

        assert!(matches!(
            generator.generate(&config, &mut rng),
            Err(OverlandError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_generate_rejects_inverted_range_size_bounds() {
        let generator = TerrainGenerator::new();
        let mut config = GenerationConfig::for_testing(1);
        config.min_range_size = 5;
        config.max_range_size = 2;
        let mut rng = utils::create_rng(&config);

        assert!(matches!(
            generator.generate(&config, &mut rng),
            Err(OverlandError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_generated_grid_passes_validation() {
        let generator = TerrainGenerator::new();
        let config = GenerationConfig::for_testing(31);
        let mut rng = utils::create_rng(&config);

        let grid = generator.generate(&config, &mut rng).unwrap();
        generator.validate(&grid, &config).unwrap();
    }

    #[test]
    fn test_validation_catches_dimension_mismatch() {
        let generator = TerrainGenerator::new();
        let config = GenerationConfig::for_testing(31);
        let wrong = plains(3, 3);

        assert!(matches!(
            generator.validate(&wrong, &config),
            Err(OverlandError::GenerationFailed(_))
        ));
    }
}
