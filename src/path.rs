use crate::cell::Direction;
use grid_util::point::Point;
use itertools::Itertools;

/// Kind of a path element: the move made when leaving the element's cell, or [ActionKind::Finish]
/// on the last element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ActionKind {
    #[default]
    Undefined,
    Left,
    Right,
    Up,
    Down,
    Finish,
}

impl ActionKind {
    /// Character used for this kind in path strings and solve maps.
    pub fn symbol(self) -> char {
        match self {
            ActionKind::Undefined => '?',
            ActionKind::Left => 'L',
            ActionKind::Right => 'R',
            ActionKind::Up => 'U',
            ActionKind::Down => 'D',
            ActionKind::Finish => 'F',
        }
    }

    /// Kind of the move from `from` to `to`; [ActionKind::Undefined] if they are not 4-adjacent.
    pub fn between(from: &Point, to: &Point) -> ActionKind {
        Direction::between(from, to).map_or(ActionKind::Undefined, ActionKind::from)
    }
}

impl From<Direction> for ActionKind {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => ActionKind::Left,
            Direction::Right => ActionKind::Right,
            Direction::Up => ActionKind::Up,
            Direction::Down => ActionKind::Down,
        }
    }
}

/// One element of a [Path].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub point: Point,
}

impl Action {
    pub fn new(kind: ActionKind, point: Point) -> Action {
        Action { kind, point }
    }
}

/// Ordered route from start to finish. The first element sits on the start cell and the last
/// one, tagged [ActionKind::Finish], on the finish cell. An empty path means no route exists.
#[derive(Clone, Debug, Default)]
pub struct Path {
    actions: Vec<Action>,
}

impl Path {
    /// The "no path" result.
    pub fn empty() -> Path {
        Path::default()
    }

    /// Builds a path from the visited points, start first, deriving every element's kind from the
    /// step to its successor.
    pub fn from_points(points: &[Point]) -> Path {
        let mut actions = points
            .iter()
            .tuple_windows()
            .map(|(cur, next)| Action::new(ActionKind::between(cur, next), *cur))
            .collect::<Vec<_>>();
        if let Some(last) = points.last() {
            actions.push(Action::new(ActionKind::Finish, *last));
        }
        Path { actions }
    }

    pub fn is_found(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of moves, i.e. elements minus the start element.
    pub fn steps(&self) -> usize {
        self.actions.len().saturating_sub(1)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.actions.iter().map(|a| a.point)
    }

    pub fn start(&self) -> Option<Point> {
        self.actions.first().map(|a| a.point)
    }

    pub fn finish(&self) -> Option<Point> {
        self.actions.last().map(|a| a.point)
    }

    /// Checks that consecutive elements are 4-adjacent and that each kind matches the step taken.
    pub fn is_contiguous(&self) -> bool {
        self.actions
            .iter()
            .tuple_windows()
            .all(|(cur, next)| {
                cur.kind != ActionKind::Undefined
                    && ActionKind::between(&cur.point, &next.point) == cur.kind
            })
            && self
                .actions
                .last()
                .map_or(true, |a| a.kind == ActionKind::Finish)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for Path {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
