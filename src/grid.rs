use crate::cell::{Cell, Direction};
use crate::error::GridError;
use core::fmt;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] stores its [Cell]s in one row-major arena and links every cell to its in-bounds
/// 4-neighbours by index. In addition it maintains connected components of the passable cells
/// in a [UnionFind] structure, which lets a search return early when no route can exist.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    generation: u32,
}

fn build_cells(width: usize, height: usize) -> Result<Vec<Cell>, GridError> {
    let max = i32::MAX as usize;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(GridError::InvalidDimensions { width, height });
    }
    let len = width
        .checked_mul(height)
        .ok_or(GridError::InvalidDimensions { width, height })?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| GridError::InvalidDimensions { width, height })?;
    for y in 0..height {
        for x in 0..width {
            cells.push(Cell::new(x as i32, y as i32));
        }
    }
    // Linking
    for y in 0..height {
        for x in 0..width {
            let ix = x + y * width;
            let cell = &mut cells[ix];
            if x > 0 {
                cell.neighbours[Direction::Left as usize] = Some(ix - 1);
            }
            if x + 1 < width {
                cell.neighbours[Direction::Right as usize] = Some(ix + 1);
            }
            if y > 0 {
                cell.neighbours[Direction::Up as usize] = Some(ix - width);
            }
            if y + 1 < height {
                cell.neighbours[Direction::Down as usize] = Some(ix + width);
            }
        }
    }
    Ok(cells)
}

impl Grid {
    /// Creates a `width`x`height` grid of empty cells with all neighbours linked.
    pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
        let cells = build_cells(width, height)?;
        let mut grid = Grid {
            width,
            height,
            cells,
            components: UnionFind::new(0),
            components_dirty: false,
            generation: 0,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Discards all cells and rebuilds the grid at the new size. On error the grid is left
    /// untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        self.cells = build_cells(width, height)?;
        self.width = width;
        self.height = height;
        self.generation = 0;
        self.generate_components();
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Linear row-major index of `point`, [None] when out of bounds.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if self.point_in_bounds(point) {
            Some(point.x as usize + point.y as usize * self.width)
        } else {
            None
        }
    }

    pub fn checked_index(&self, point: Point) -> Result<usize, GridError> {
        self.index_of(point).ok_or(GridError::OutOfBounds {
            point,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.index_of(point).map(|ix| &self.cells[ix])
    }

    /// Mutable access to a cell. Occupancy may change through the returned reference, so the
    /// components are flagged as dirty.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        let ix = self.index_of(point)?;
        self.components_dirty = true;
        Some(&mut self.cells[ix])
    }

    /// Returns the cell at `point`.
    ///
    /// # Panics
    /// If `point` lies outside the grid.
    pub fn at(&self, point: Point) -> &Cell {
        match self.get(point) {
            Some(cell) => cell,
            None => panic!(
                "{} is outside of the {}x{} grid",
                point, self.width, self.height
            ),
        }
    }

    /// Mutable counterpart of [at](Self::at).
    ///
    /// # Panics
    /// If `point` lies outside the grid.
    pub fn at_mut(&mut self, point: Point) -> &mut Cell {
        let (width, height) = (self.width, self.height);
        match self.get_mut(point) {
            Some(cell) => cell,
            None => panic!("{} is outside of the {}x{} grid", point, width, height),
        }
    }

    pub fn at_xy(&self, x: i32, y: i32) -> &Cell {
        self.at(Point::new(x, y))
    }

    pub fn cell(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }

    pub(crate) fn cell_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn is_wall(&self, point: Point) -> bool {
        self.at(point).wall
    }

    /// Updates the occupancy of a cell. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart by a new wall.
    ///
    /// # Panics
    /// If `point` lies outside the grid.
    pub fn set_wall(&mut self, point: Point, wall: bool) {
        let ix = match self.index_of(point) {
            Some(ix) => ix,
            None => panic!(
                "{} is outside of the {}x{} grid",
                point, self.width, self.height
            ),
        };
        let was_wall = self.cells[ix].wall;
        self.cells[ix].wall = wall;
        if wall {
            if !was_wall {
                self.components_dirty = true;
            }
        } else {
            for n in self.passable_neighbours(ix) {
                self.components.union(ix, n);
            }
        }
    }

    /// Arena indices of the non-wall neighbours of the cell at `ix`.
    pub fn passable_neighbours(&self, ix: usize) -> SmallVec<[usize; 4]> {
        self.cells[ix]
            .neighbours()
            .map(|(_, n)| n)
            .filter(|&n| !self.cells[n].wall)
            .collect()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for (ix, cell) in self.cells.iter().enumerate() {
            if cell.wall {
                continue;
            }
            for dir in [Direction::Right, Direction::Down] {
                if let Some(n) = cell.neighbour(dir) {
                    if !self.cells[n].wall {
                        components.union(ix, n);
                    }
                }
            }
        }
        self.components = components;
        self.components_dirty = false;
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: Point) -> Option<usize> {
        self.index_of(point).map(|ix| self.components.find(ix))
    }

    /// Checks whether a route from `start` to `finish` can exist. The start cell itself may be a
    /// wall (it holds the ball being moved), so it is connected through its passable
    /// neighbours. The finish must be passable. Relies on up-to-date components, see
    /// [update](Self::update).
    pub fn reachable(&self, start: Point, finish: Point) -> bool {
        let (start_ix, finish_ix) = match (self.index_of(start), self.index_of(finish)) {
            (Some(s), Some(f)) => (s, f),
            _ => return false,
        };
        if start_ix == finish_ix {
            return true;
        }
        if self.cells[finish_ix].wall {
            return false;
        }
        self.passable_neighbours(start_ix)
            .into_iter()
            .any(|n| self.components.equiv(n, finish_ix))
    }

    pub fn unreachable(&self, start: Point, finish: Point) -> bool {
        !self.reachable(start, finish)
    }

    /// Starts a new search generation, invalidating the scratch fields of every cell. A full
    /// reset pass only happens when the counter wraps around.
    pub(crate) fn begin_search(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.cells.iter_mut().for_each(Cell::reset_scratch);
            self.generation = 1;
        }
        self.generation
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.cells.chunks(self.width) {
            let values = row.iter().map(|c| c.wall as i32).collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
