use crate::error::SearchError;
use crate::grid::Grid;
use crate::path::Path;
use crate::search::astar_grid;
use crate::STEP_COST;
use grid_util::point::Point;
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

pub trait GridSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Whether to consult the connected components of the grid before searching.
    fn component_check(&self) -> bool {
        true
    }

    /// Optional cap on the number of expanded cells.
    fn max_expansions(&self) -> Option<usize> {
        None
    }

    /// Computes a shortest path from `start` to `finish`. An unreachable finish is not an error:
    /// the returned [Path] is then empty. Start and finish must lie on the grid.
    fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Path, SearchError> {
        grid.checked_index(start)?;
        grid.checked_index(finish)?;
        let component_check = self.component_check();
        if component_check {
            grid.update();
            if grid.unreachable(start, finish) {
                info!("{} is not reachable from {}", finish, start);
                return Ok(Path::empty());
            }
            info!("{} is reachable from {}, computing path", finish, start);
        }
        let outcome = astar_grid(
            grid,
            start,
            finish,
            |point| self.heuristic(point, &finish),
            self.max_expansions(),
        )?;
        if component_check && !outcome.path.is_found() {
            warn!("Reachable goal could not be pathed to, is reachable graph correct?");
        }
        info!(
            "Search finished after {} expansions, {} steps",
            outcome.expansions,
            outcome.path.steps()
        );
        Ok(outcome.path)
    }

    /// Total cost of following `path`.
    fn get_path_cost(&self, path: &Path) -> i32 {
        path.steps() as i32 * STEP_COST
    }
}
