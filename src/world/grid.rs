//! # World Grid
//!
//! A rectangular, fixed-size array of [`Tile`]s addressed by [`Position`].
//!
//! Grids are created by the terrain generator (or [`Grid::from_fn`] for
//! hand-built boards) and are read-only afterwards: the write path is
//! crate-private, so every consumer holding a `&Grid` sees immutable data
//! for the rest of the session.

use crate::world::{Position, TerrainType, Tile};
use crate::{OverlandError, OverlandResult};
use serde::{Deserialize, Serialize};

/// A fixed-size 2D array of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid with every cell set to `terrain`.
    ///
    /// Fails with [`OverlandError::InvalidDimensions`] when either dimension
    /// is zero.
    pub(crate) fn filled(width: u32, height: u32, terrain: TerrainType) -> OverlandResult<Self> {
        if width == 0 || height == 0 {
            return Err(OverlandError::InvalidDimensions { width, height });
        }

        // Widen before multiplying; the product can exceed u32 for
        // dimensions that are individually valid.
        Ok(Self {
            width,
            height,
            tiles: vec![Tile::new(terrain); width as usize * height as usize],
        })
    }

    /// Creates a grid by calling `f(x, y)` for every cell.
    ///
    /// This is the construction path for consumers and tests that need a
    /// specific board layout; once built, the grid is as immutable as a
    /// generated one.
    ///
    /// # Examples
    ///
    /// ```
    /// use overland::{Grid, Position, TerrainType};
    ///
    /// // A 5x3 board with a water column at x = 2.
    /// let grid = Grid::from_fn(5, 3, |x, _y| {
    ///     if x == 2 { TerrainType::Water } else { TerrainType::Plain }
    /// }).unwrap();
    ///
    /// assert!(!grid.get(Position::new(2, 1)).unwrap().passable);
    /// ```
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(i32, i32) -> TerrainType,
    ) -> OverlandResult<Self> {
        let mut grid = Self::filled(width, height, TerrainType::Plain)?;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.set(Position::new(x, y), f(x, y));
            }
        }
        Ok(grid)
    }

    /// Grid width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Checks whether a position lies within grid bounds.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Gets the tile at a position, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.index_of(pos).map(|idx| &self.tiles[idx])
    }

    /// Iterates over every cell as `(position, tile)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            let x = (idx % self.width as usize) as i32;
            let y = (idx / self.width as usize) as i32;
            (Position::new(x, y), tile)
        })
    }

    /// Replaces the tile at a position with `terrain`'s catalogue tuple.
    ///
    /// Out-of-bounds writes are ignored; generation stamps near the grid
    /// boundary rely on this clipping.
    pub(crate) fn set(&mut self, pos: Position, terrain: TerrainType) {
        if let Some(idx) = self.index_of(pos) {
            self.tiles[idx] = Tile::new(terrain);
        }
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }
}
