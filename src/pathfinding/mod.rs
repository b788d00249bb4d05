//! # Pathfinding Module
//!
//! Shortest-route search over the world grid.
//!
//! The search is stateless: each [`find_path`] call reads the grid and holds
//! no state beyond its own scope, so a single grid can serve any number of
//! concurrent path requests from the game loop.

pub mod astar;

pub use astar::find_path;
