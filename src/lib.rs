//! # Overland
//!
//! The engine core of a tile-world mini-RPG: procedural terrain generation
//! and grid pathfinding, independent of rendering, input handling, or any
//! particular game loop.
//!
//! ## Architecture Overview
//!
//! The crate is built around two components used in sequence:
//!
//! - **Terrain generation**: [`TerrainGenerator`] produces a fixed-size
//!   [`Grid`] of typed tiles from procedural rules — irregular water bodies,
//!   a coastal sand ring, and mountain ranges with hill skirts.
//! - **Pathfinding**: [`find_path`] computes a shortest walkable route
//!   between two grid cells with A* over the 4-connected grid graph.
//!
//! The generator runs once at world setup from a seeded random source, so
//! worlds are reproducible. The resulting grid is shared read-only data:
//! consumers (renderer, movement, spawn placement) read tile passability and
//! speed but cannot mutate cells after generation completes.
//!
//! ## Example
//!
//! ```
//! use overland::{find_path, generation, GenerationConfig, Generator, Position, TerrainGenerator};
//!
//! let config = GenerationConfig::for_testing(42);
//! let mut rng = generation::utils::create_rng(&config);
//! let grid = TerrainGenerator::new().generate(&config, &mut rng).unwrap();
//!
//! // Route between two cells; `None` means the goal is unreachable.
//! let _route = find_path(&grid, Position::new(0, 0), Position::new(5, 5));
//! ```

pub mod generation;
pub mod pathfinding;
pub mod world;

pub use generation::{GenerationConfig, Generator, TerrainGenerator};
pub use pathfinding::find_path;
pub use world::{Grid, Position, TerrainType, Tile};

/// Core error type for the Overland engine.
#[derive(thiserror::Error, Debug)]
pub enum OverlandError {
    /// Grid dimensions must be positive in both axes
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Generation produced content violating its own invariants
    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Overland codebase.
pub type OverlandResult<T> = Result<T, OverlandError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default world width in tiles
    pub const DEFAULT_MAP_WIDTH: u32 = 100;

    /// Default world height in tiles
    pub const DEFAULT_MAP_HEIGHT: u32 = 100;
}
