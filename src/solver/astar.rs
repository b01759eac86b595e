use grid_util::point::Point;

use crate::{solver::GridSolver, STEP_COST};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
    pub component_check: bool,
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            component_check: true,
            max_expansions: None,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// Manhattan distance scaled by the step cost, times the heuristic factor. Admissible only
    /// while the factor is at most 1.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        ((p1.manhattan_distance(p2) * STEP_COST) as f32 * self.heuristic_factor) as i32
    }

    fn component_check(&self) -> bool {
        self.component_check
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::grid::Grid;
    use crate::path::ActionKind;

    fn walled_grid(width: usize, height: usize, walls: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in walls {
            grid.set_wall(Point::new(x, y), true);
        }
        grid
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let mut grid = Grid::new(1, 1).unwrap();
        let solver = AstarSolver::new();
        let start = Point::new(0, 0);
        let path = solver.find_path(&mut grid, start, start).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.steps(), 0);
        assert_eq!(path.actions()[0].kind, ActionKind::Finish);
    }

    /// Asserts that the optimal 4 step solution is found around an obstacle.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  E|
        //  ___
        let mut grid = walled_grid(3, 3, &[(1, 1)]);
        let solver = AstarSolver::new();
        let path = solver
            .find_path(&mut grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.steps(), 4);
        assert!(path.is_contiguous());
        assert_eq!(solver.get_path_cost(&path), 4);
    }

    #[test]
    fn open_grid_is_manhattan_distance() {
        let mut grid = Grid::new(4, 3).unwrap();
        let solver = AstarSolver::new();
        let start = Point::new(0, 0);
        let finish = Point::new(3, 2);
        let path = solver.find_path(&mut grid, start, finish).unwrap();
        assert_eq!(path.steps(), 5);
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.finish(), Some(finish));
    }

    #[test]
    fn test_complex() {
        let mut grid = walled_grid(10, 10, &[(1, 1), (5, 0), (0, 5), (8, 8)]);
        let solver = AstarSolver::new();
        let path = solver
            .find_path(&mut grid, Point::new(0, 0), Point::new(7, 7))
            .unwrap();
        assert_eq!(path.steps(), 14);
    }

    #[test]
    fn detour_through_gap() {
        // |S....|
        // |####.|
        // |F....|
        let mut grid = walled_grid(5, 3, &[(0, 1), (1, 1), (2, 1), (3, 1)]);
        let solver = AstarSolver::new();
        let path = solver
            .find_path(&mut grid, Point::new(0, 0), Point::new(0, 2))
            .unwrap();
        assert_eq!(path.steps(), 10);
        assert!(path.points().all(|p| !grid.is_wall(p)));
    }

    #[test]
    fn wall_row_blocks_path() {
        for component_check in [true, false] {
            let mut grid = walled_grid(4, 3, &[(0, 1), (1, 1), (2, 1), (3, 1)]);
            let mut solver = AstarSolver::new();
            solver.component_check = component_check;
            let path = solver
                .find_path(&mut grid, Point::new(0, 0), Point::new(3, 2))
                .unwrap();
            assert!(!path.is_found());
            assert_eq!(path.steps(), 0);
        }
    }

    #[test]
    fn wall_finish_is_unreachable() {
        let mut grid = walled_grid(3, 1, &[(2, 0)]);
        let solver = AstarSolver::new();
        let path = solver
            .find_path(&mut grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert!(!path.is_found());
    }

    #[test]
    fn repeated_searches_agree() {
        let mut grid = walled_grid(6, 6, &[(1, 0), (1, 1), (1, 2), (3, 5), (3, 4), (3, 3)]);
        let solver = AstarSolver::new();
        let start = Point::new(0, 0);
        let finish = Point::new(5, 5);
        let first = solver.find_path(&mut grid, start, finish).unwrap();
        let second = solver.find_path(&mut grid, start, finish).unwrap();
        assert_eq!(first.steps(), second.steps());
        let back = solver.find_path(&mut grid, finish, start).unwrap();
        assert_eq!(back.steps(), first.steps());
    }

    #[test]
    fn updated_walls_are_respected() {
        let mut grid = Grid::new(3, 3).unwrap();
        let solver = AstarSolver::new();
        let start = Point::new(0, 1);
        let finish = Point::new(2, 1);
        assert_eq!(solver.find_path(&mut grid, start, finish).unwrap().steps(), 2);
        grid.set_wall(Point::new(1, 1), true);
        assert_eq!(solver.find_path(&mut grid, start, finish).unwrap().steps(), 4);
        grid.at_mut(Point::new(1, 0)).set_wall(true);
        grid.at_mut(Point::new(1, 2)).set_wall(true);
        assert!(!solver.find_path(&mut grid, start, finish).unwrap().is_found());
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut grid = Grid::new(3, 3).unwrap();
        let solver = AstarSolver::new();
        let result = solver.find_path(&mut grid, Point::new(0, 0), Point::new(0, 3));
        assert!(matches!(result, Err(SearchError::Grid(_))));
    }

    #[test]
    fn expansion_cap() {
        let mut grid = Grid::new(20, 20).unwrap();
        let mut solver = AstarSolver::new();
        solver.max_expansions = Some(5);
        let result = solver.find_path(&mut grid, Point::new(0, 0), Point::new(19, 19));
        assert_eq!(result.unwrap_err(), SearchError::ExpansionLimit { limit: 5 });
    }

    #[test]
    fn heuristic_is_scaled() {
        let mut solver = AstarSolver::new();
        let (a, b) = (Point::new(0, 0), Point::new(3, 4));
        assert_eq!(solver.heuristic(&a, &b), 7);
        solver.heuristic_factor = 2.0;
        assert_eq!(solver.heuristic(&a, &b), 14);
    }
}
