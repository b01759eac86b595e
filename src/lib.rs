//! # ball_path
//!
//! Finds the shortest route of a ball across a board of occupied and empty cells, as in
//! ColorLines-like games. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on a 4-connected, uniform-cost grid
//! with the Manhattan distance as heuristic. Maintains
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use ball_path::{find_path, Grid};
//! use grid_util::point::Point;
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.set_wall(Point::new(1, 1), true);
//! let path = find_path(&mut grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.steps(), 4);
//! ```
pub mod cell;
pub mod error;
pub mod grid;
pub mod input;
pub mod output;
pub mod path;
pub mod search;
pub mod solver;

pub use cell::{Cell, Direction};
pub use error::{GridError, InputError, SearchError};
pub use grid::Grid;
pub use path::{Action, ActionKind, Path};

pub use grid_util::point::Point;

use solver::{astar::AstarSolver, GridSolver};

/// Cost of a single move between 4-adjacent cells.
pub const STEP_COST: i32 = 1;

/// Computes a shortest path from `start` to `finish` with a default [AstarSolver].
pub fn find_path(grid: &mut Grid, start: Point, finish: Point) -> Result<Path, SearchError> {
    AstarSolver::new().find_path(grid, start, finish)
}
