//! The A* loop over a [Grid]. Cost bookkeeping lives in the scratch fields of the cells, the
//! open set is a [BinaryHeap] that may hold stale duplicate entries after a cost improvement
//! (they are skipped once their cell is closed) and the closed set is a hash set of arena indices.
use crate::cell::Scratch;
use crate::error::SearchError;
use crate::grid::Grid;
use crate::path::Path;
use crate::STEP_COST;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder {
    estimated_cost: i32,
    cost: i32,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost
            && self.cost == other.cost
            && self.index == other.index
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the largest cost (the node closest to
        // the goal) and finally the lowest linear index, which makes the search deterministic.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.index.cmp(&self.index),
                s => s,
            },
            s => s,
        }
    }
}

/// Outcome of [astar_grid] together with the number of expanded cells.
#[derive(Debug)]
pub struct SearchOutcome {
    pub path: Path,
    pub expansions: usize,
}

/// Runs A* from `start` to `finish` with unit step cost. Walls are never entered, but the
/// occupancy of `start` and `finish` themselves is not inspected. An exhausted open set yields
/// an empty [Path].
pub fn astar_grid<FH>(
    grid: &mut Grid,
    start: Point,
    finish: Point,
    mut heuristic: FH,
    max_expansions: Option<usize>,
) -> Result<SearchOutcome, SearchError>
where
    FH: FnMut(&Point) -> i32,
{
    let start_ix = grid.checked_index(start)?;
    let finish_ix = grid.checked_index(finish)?;
    let generation = grid.begin_search();

    let h = heuristic(&start);
    grid.cell_mut(start_ix).scratch = Scratch {
        g: 0,
        h,
        f: h,
        parent: None,
        generation,
    };
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: h,
        cost: 0,
        index: start_ix,
    });
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut expansions = 0;

    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        if index == finish_ix {
            debug!("Reached {} after {} expansions", finish, expansions);
            let path = reconstruct_path(grid, start_ix, finish_ix, generation)?;
            return Ok(SearchOutcome { path, expansions });
        }
        // A cell may have been pushed several times if a cheaper route to it was found, only
        // the first (cheapest) extraction counts.
        if !closed.insert(index) {
            continue;
        }
        if let Some(limit) = max_expansions {
            if expansions >= limit {
                return Err(SearchError::ExpansionLimit { limit });
            }
        }
        expansions += 1;

        let cost = grid.cell(index).scratch.g;
        let neighbours = grid
            .cell(index)
            .neighbours()
            .map(|(_, n)| n)
            .collect::<SmallVec<[usize; 4]>>();
        for n in neighbours {
            if n == start_ix || closed.contains(&n) {
                continue;
            }
            let cell = grid.cell_mut(n);
            if cell.wall {
                continue;
            }
            let new_cost = cost + STEP_COST;
            let seen = cell.scratch.generation == generation && cell.scratch.parent.is_some();
            if seen && new_cost >= cell.scratch.g {
                continue;
            }
            let h = heuristic(&cell.position());
            cell.scratch = Scratch {
                g: new_cost,
                h,
                f: new_cost + h,
                parent: Some(index),
                generation,
            };
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Open set exhausted after {} expansions, {} is not reachable from {}",
        expansions, finish, start
    );
    Ok(SearchOutcome {
        path: Path::empty(),
        expansions,
    })
}

/// Walks the predecessors from the finish back to the start.
fn reconstruct_path(
    grid: &Grid,
    start_ix: usize,
    finish_ix: usize,
    generation: u32,
) -> Result<Path, SearchError> {
    let mut points = Vec::new();
    let mut current = finish_ix;
    loop {
        let cell = grid.cell(current);
        points.push(cell.position());
        if current == start_ix {
            break;
        }
        let parent = Some(cell.scratch)
            .filter(|s| s.generation == generation)
            .and_then(|s| s.parent);
        match parent {
            // A chain longer than the grid can only be a cycle.
            Some(p) if points.len() <= grid.len() => current = p,
            _ => {
                return Err(SearchError::BrokenChain {
                    at: cell.position(),
                })
            }
        }
    }
    points.reverse();
    Ok(Path::from_points(&points))
}
