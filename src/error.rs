use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("{point} is outside of the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The predecessor chain ended before reaching the start. Indicates a bug in the search
    /// loop, never an unreachable finish.
    #[error("predecessor chain broken at {at}")]
    BrokenChain { at: Point },
    #[error("search gave up after {limit} expansions")]
    ExpansionLimit { limit: usize },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("end of input reached when reading {what}")]
    UnexpectedEof { what: &'static str },
    #[error("expected an unsigned number when reading {what}")]
    InvalidNumber { what: &'static str },
    #[error("number too large when reading {what}")]
    NumberTooLarge { what: &'static str },
    #[error("invalid map dimensions")]
    InvalidDimensions(#[from] GridError),
    #[error("invalid {which} point {point} specified")]
    PointOutOfBounds { which: &'static str, point: Point },
    #[error("invalid map content; character '{ch}' found at row {row}, column {column}")]
    InvalidCell { ch: char, row: usize, column: usize },
}
