use grid_util::point::Point;

use crate::solver::GridSolver;

/// Uniform-cost search: the same engine as [AstarSolver](super::astar::AstarSolver) without any
/// heuristic guidance. Mostly useful as a reference.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub max_expansions: Option<usize>,
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::solver::astar::AstarSolver;

    #[test]
    fn agrees_with_astar() {
        let mut grid = Grid::new(7, 5).unwrap();
        for (x, y) in [(1, 0), (1, 1), (1, 2), (1, 3), (3, 4), (3, 3), (3, 2), (5, 1), (5, 0)] {
            grid.set_wall(Point::new(x, y), true);
        }
        let start = Point::new(0, 0);
        let finish = Point::new(6, 0);
        let dijkstra = DijkstraSolver::default()
            .find_path(&mut grid, start, finish)
            .unwrap();
        let astar = AstarSolver::new()
            .find_path(&mut grid, start, finish)
            .unwrap();
        assert!(dijkstra.is_contiguous());
        assert_eq!(dijkstra.steps(), astar.steps());
    }
}
