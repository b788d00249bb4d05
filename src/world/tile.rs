//! # Terrain Tiles
//!
//! The fixed catalogue of terrain kinds and the per-cell tile value.
//!
//! [`TerrainType`] is the only vocabulary of tile kinds; no other kind can
//! appear in a generated grid. Each entry carries a fixed display color,
//! walkability flag, and movement speed factor. A [`Tile`] is a copy of one
//! catalogue tuple — cells are replaced wholesale by generation passes,
//! never field-mutated.

use serde::{Deserialize, Serialize};

/// The catalogue of terrain kinds a grid cell can hold.
///
/// # Examples
///
/// ```
/// use overland::TerrainType;
///
/// assert!(TerrainType::Plain.is_passable());
/// assert!(!TerrainType::Water.is_passable());
/// assert_eq!(TerrainType::Mountain.speed_multiplier(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    /// Open grassland, full movement speed
    Plain,
    /// Skirt terrain around mountain ranges, slightly slowed
    Hill,
    /// Range cores, walkable but very slow
    Mountain,
    /// Ponds and lakes, impassable
    Water,
    /// Coastal ring around water
    Sand,
}

impl TerrainType {
    /// All catalogue entries, in declaration order.
    pub const ALL: [TerrainType; 5] = [
        TerrainType::Plain,
        TerrainType::Hill,
        TerrainType::Mountain,
        TerrainType::Water,
        TerrainType::Sand,
    ];

    /// Display color for this terrain kind, as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            TerrainType::Plain => "#90EE90",    // Light green
            TerrainType::Hill => "#4C9A4C",     // Darker green
            TerrainType::Mountain => "#808080", // Gray
            TerrainType::Water => "#4169E1",    // Royal blue
            TerrainType::Sand => "#DEB887",     // Sandy brown
        }
    }

    /// Whether movement and pathfinding may enter tiles of this kind.
    pub fn is_passable(self) -> bool {
        !matches!(self, TerrainType::Water)
    }

    /// Factor applied to movement rate when traversing this kind.
    ///
    /// Zero implies impassable regardless of [`TerrainType::is_passable`].
    pub fn speed_multiplier(self) -> f32 {
        match self {
            TerrainType::Plain => 1.0,
            TerrainType::Hill => 0.8,
            TerrainType::Mountain => 0.2,
            TerrainType::Water => 0.0,
            TerrainType::Sand => 0.9,
        }
    }
}

/// One grid cell's terrain value.
///
/// Carries the catalogue tuple for its [`TerrainType`] so consumers can read
/// walkability and speed without a catalogue lookup. Serialized with
/// camelCase field names for external (JS-facing) consumers.
///
/// # Examples
///
/// ```
/// use overland::{TerrainType, Tile};
///
/// let tile = Tile::new(TerrainType::Sand);
/// assert!(tile.passable);
/// assert_eq!(tile.speed_multiplier, 0.9);
/// assert_eq!(tile.color(), "#DEB887");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// The catalogue entry this tile was stamped from
    pub terrain: TerrainType,
    /// Whether movement may enter this tile
    pub passable: bool,
    /// Factor applied to movement rate on this tile
    pub speed_multiplier: f32,
}

impl Tile {
    /// Creates a tile holding the catalogue tuple for `terrain`.
    pub fn new(terrain: TerrainType) -> Self {
        Self {
            terrain,
            passable: terrain.is_passable(),
            speed_multiplier: terrain.speed_multiplier(),
        }
    }

    /// Display color of this tile.
    pub fn color(&self) -> &'static str {
        self.terrain.color()
    }
}

impl From<TerrainType> for Tile {
    fn from(terrain: TerrainType) -> Self {
        Tile::new(terrain)
    }
}
