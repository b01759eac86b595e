use grid_util::point::Point;

/// One of the four cardinal moves on the grid. Up decreases y, since row 0 is the top row of the
/// board as it is read and printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    /// Neighbour iteration order used by the search.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Coordinate offset of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The direction of a unit step from `from` to `to`, if the two points are 4-adjacent.
    pub fn between(from: &Point, to: &Point) -> Option<Direction> {
        let delta = (to.x - from.x, to.y - from.y);
        Direction::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    pub fn step(self, point: &Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
}

/// Per-search bookkeeping of a [Cell]. Only meaningful while `generation` matches the generation
/// of the search currently (or last) run on the owning grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Scratch {
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub parent: Option<usize>,
    pub generation: u32,
}

/// A single position on the [Grid](crate::grid::Grid). Neighbours are stored as indices into the
/// grid's cell arena rather than references, so the adjacency graph holds no ownership cycles.
#[derive(Clone, Debug)]
pub struct Cell {
    position: Point,
    pub(crate) wall: bool,
    pub(crate) neighbours: [Option<usize>; 4],
    pub(crate) scratch: Scratch,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Cell {
        Cell {
            position: Point::new(x, y),
            wall: false,
            neighbours: [None; 4],
            scratch: Scratch::default(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_wall(&self) -> bool {
        self.wall
    }

    pub fn set_wall(&mut self, wall: bool) {
        self.wall = wall;
    }

    /// Arena index of the neighbour in direction `dir`, [None] on the grid border.
    pub fn neighbour(&self, dir: Direction) -> Option<usize> {
        self.neighbours[dir as usize]
    }

    /// Iterates over the present neighbours in [Direction::ALL] order.
    pub fn neighbours(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbour(dir).map(|ix| (dir, ix)))
    }

    /// Accumulated cost from the start of the last search.
    pub fn g(&self) -> i32 {
        self.scratch.g
    }

    /// Heuristic estimate to the finish of the last search.
    pub fn h(&self) -> i32 {
        self.scratch.h
    }

    pub fn f(&self) -> i32 {
        self.scratch.f
    }

    /// Predecessor on the best known route of the last search.
    pub fn parent(&self) -> Option<usize> {
        self.scratch.parent
    }

    pub(crate) fn reset_scratch(&mut self) {
        self.scratch = Scratch::default();
    }
}
