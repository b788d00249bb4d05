//! # World Module
//!
//! The shared data model consumed by every collaborator: grid coordinates,
//! the terrain tile catalogue, and the fixed-size world grid.
//!
//! A [`Grid`] is produced once per session by the terrain generator and is
//! read-only from then on — cell writes are crate-private, so renderers,
//! movement code, and spawn placement can hold a shared reference without
//! any locking discipline.

pub mod grid;
pub mod tile;

pub use grid::Grid;
pub use tile::{TerrainType, Tile};

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in the world grid.
///
/// `x` addresses the column and `y` the row; this order is preserved at
/// every call boundary.
///
/// # Examples
///
/// ```
/// use overland::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculates the Manhattan distance to another position.
    ///
    /// This is the pathfinder's heuristic: on a 4-directional unit-cost
    /// grid it never overestimates the remaining steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use overland::Position;
    ///
    /// let pos1 = Position::new(0, 0);
    /// let pos2 = Position::new(3, 4);
    /// assert_eq!(pos1.manhattan_distance(pos2), 7);
    /// ```
    pub fn manhattan_distance(self, other: Position) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Calculates the Euclidean distance to another position.
    ///
    /// Terrain stamps measure their radius with this, which is what keeps
    /// water bodies and mountain ranges round rather than square.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns all 8 adjacent positions (including diagonals).
    pub fn adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x - 1, self.y - 1), // NW
            Position::new(self.x, self.y - 1),     // N
            Position::new(self.x + 1, self.y - 1), // NE
            Position::new(self.x - 1, self.y),     // W
            Position::new(self.x + 1, self.y),     // E
            Position::new(self.x - 1, self.y + 1), // SW
            Position::new(self.x, self.y + 1),     // S
            Position::new(self.x + 1, self.y + 1), // SE
        ]
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x, self.y - 1), // N
            Position::new(self.x - 1, self.y), // W
            Position::new(self.x + 1, self.y), // E
            Position::new(self.x, self.y + 1), // S
        ]
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}
