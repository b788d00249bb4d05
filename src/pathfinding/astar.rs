//! # A* Grid Search
//!
//! A* over the 4-connected grid graph restricted to passable tiles, with
//! unit edge cost and the Manhattan-distance heuristic. The heuristic is
//! admissible and consistent on a 4-directional unit-cost grid, so returned
//! paths are optimal in length.

use crate::world::{Grid, Position};
use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Finds a shortest walkable route from `start` to `goal`.
///
/// The returned path excludes `start` and ends at `goal`; each step moves to
/// a cardinal neighbor. Returns `None` when the goal is unreachable or when
/// either endpoint lies outside the grid — absence of a path is a normal
/// outcome, not an error. `start == goal` yields an empty path.
///
/// Impassable tiles are never entered: terrain blocks the graph outright
/// rather than costing extra.
///
/// # Examples
///
/// ```
/// use overland::{find_path, Grid, Position, TerrainType};
///
/// let grid = Grid::from_fn(4, 1, |_, _| TerrainType::Plain).unwrap();
/// let path = find_path(&grid, Position::new(0, 0), Position::new(3, 0)).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), Some(&Position::new(3, 0)));
/// ```
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.is_valid_position(start) || !grid.is_valid_position(goal) {
        return None;
    }
    if start == goal {
        return Some(Vec::new());
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_score: HashMap<Position, u32> = HashMap::new();
    let mut closed_set: HashSet<Position> = HashSet::new();

    g_score.insert(start, 0);
    open_set.push(FrontierNode {
        f_score: start.manhattan_distance(goal),
        g_score: 0,
        position: start,
    });

    while let Some(node) = open_set.pop() {
        let current = node.position;

        if current == goal {
            return Some(reconstruct_path(&came_from, goal));
        }

        // A position can be pushed more than once; only the first (best)
        // entry expands, the rest are stale.
        if !closed_set.insert(current) {
            continue;
        }

        let current_g = g_score[&current];
        for neighbor in current.cardinal_adjacent_positions() {
            let Some(tile) = grid.get(neighbor) else {
                continue;
            };
            if !tile.passable || closed_set.contains(&neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            if tentative_g < *g_score.get(&neighbor).unwrap_or(&u32::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                open_set.push(FrontierNode {
                    f_score: tentative_g + neighbor.manhattan_distance(goal),
                    g_score: tentative_g,
                    position: neighbor,
                });
            }
        }
    }

    debug!(
        "no path from ({}, {}) to ({}, {})",
        start.x, start.y, goal.x, goal.y
    );
    None
}

/// Walks back-links from `goal` and returns the route in start-to-goal
/// order. The start cell has no back-link entry, so it is naturally
/// excluded.
fn reconstruct_path(came_from: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = goal;

    while let Some(&previous) = came_from.get(&current) {
        path.push(current);
        current = previous;
    }

    path.reverse();
    path
}

/// Frontier entry for the A* open set.
#[derive(Debug, Clone, Copy)]
struct FrontierNode {
    f_score: u32,
    g_score: u32,
    position: Position,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.g_score == other.g_score
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse on f for min-heap behavior in BinaryHeap. Equal-f ties
        // prefer the higher g (the deeper node); which optimal path wins is
        // deterministic but not part of the contract.
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| self.g_score.cmp(&other.g_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TerrainType;

    fn open_grid(width: u32, height: u32) -> Grid {
        Grid::from_fn(width, height, |_, _| TerrainType::Plain).unwrap()
    }

    #[test]
    fn test_straight_line_is_the_only_optimal_path() {
        let grid = open_grid(5, 5);
        let path = find_path(&grid, Position::new(0, 0), Position::new(3, 0)).unwrap();
        assert_eq!(
            path,
            vec![Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
        );
    }

    #[test]
    fn test_start_equals_goal_is_empty_not_none() {
        let grid = open_grid(3, 3);
        let path = find_path(&grid, Position::new(1, 1), Position::new(1, 1));
        assert_eq!(path, Some(Vec::new()));
    }

    #[test]
    fn test_out_of_bounds_endpoints_yield_none() {
        let grid = open_grid(3, 3);
        assert!(find_path(&grid, Position::new(-1, 0), Position::new(2, 2)).is_none());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(3, 0)).is_none());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(0, 99)).is_none());
    }

    #[test]
    fn test_solid_wall_yields_none() {
        // Water column with no gap separates start from goal.
        let grid = Grid::from_fn(5, 5, |x, _| {
            if x == 2 {
                TerrainType::Water
            } else {
                TerrainType::Plain
            }
        })
        .unwrap();

        assert!(find_path(&grid, Position::new(0, 2), Position::new(4, 2)).is_none());
    }

    #[test]
    fn test_detour_through_gap_is_optimal() {
        // Water column at x = 2 except a gap at y = 4.
        let grid = Grid::from_fn(5, 5, |x, y| {
            if x == 2 && y != 4 {
                TerrainType::Water
            } else {
                TerrainType::Plain
            }
        })
        .unwrap();

        let start = Position::new(0, 0);
        let goal = Position::new(4, 0);
        let path = find_path(&grid, start, goal).unwrap();

        // Down to the gap and back up: 6 steps each way.
        assert_eq!(path.len(), 12);
        assert!(path.contains(&Position::new(2, 4)));
        assert_eq!(*path.last().unwrap(), goal);

        let mut previous = start;
        for &step in &path {
            assert_eq!(previous.manhattan_distance(step), 1);
            assert!(grid.get(step).unwrap().passable);
            previous = step;
        }
    }

    #[test]
    fn test_impassable_goal_yields_none() {
        let grid = Grid::from_fn(3, 3, |x, y| {
            if x == 1 && y == 1 {
                TerrainType::Water
            } else {
                TerrainType::Plain
            }
        })
        .unwrap();

        assert!(find_path(&grid, Position::new(0, 0), Position::new(1, 1)).is_none());
    }

    #[test]
    fn test_path_never_revisits_a_cell() {
        let grid = open_grid(8, 8);
        let path = find_path(&grid, Position::new(0, 0), Position::new(7, 7)).unwrap();

        let mut seen = HashSet::new();
        for step in &path {
            assert!(seen.insert(*step));
        }
        assert!(!seen.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_adjacent_goal_is_single_step() {
        let grid = open_grid(3, 3);
        let path = find_path(&grid, Position::new(1, 1), Position::new(1, 2)).unwrap();
        assert_eq!(path, vec![Position::new(1, 2)]);
    }

    #[test]
    fn test_frontier_ordering_prefers_lower_f() {
        let near = FrontierNode {
            f_score: 3,
            g_score: 1,
            position: Position::new(0, 0),
        };
        let far = FrontierNode {
            f_score: 7,
            g_score: 1,
            position: Position::new(5, 5),
        };
        // Max-heap pops the "greatest" entry, which must be the lower f.
        assert!(near > far);

        let deep = FrontierNode {
            f_score: 3,
            g_score: 3,
            position: Position::new(1, 1),
        };
        assert!(deep > near);
    }
}
