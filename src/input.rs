//! Reader for the board input format.
//!
//! ```text
//! 7        rows (height)
//! 4        columns (width)
//! (0,0)    start, the ball to move
//! (2,5)    finish
//! 1000     `height` rows of `width` cells, 0 is empty and 1 holds a ball
//! 0101
//! 0100
//! 0010
//! 0000
//! 0000
//! 1001
//! ```
//!
//! The dimensions may only be separated by whitespace. Any non-digit characters between the
//! remaining numbers and between map rows are skipped. Point coordinates
//! count rows from the bottom of the map, they are converted to the top-down row order of the
//! [Grid] after validation.
use crate::error::InputError;
use crate::grid::Grid;
use grid_util::point::Point;
use log::debug;
use std::fs;
use std::iter::Peekable;
use std::str::Chars;

/// A board together with the endpoints of the requested move, in grid coordinates.
#[derive(Clone, Debug)]
pub struct Problem {
    pub grid: Grid,
    pub start: Point,
    pub finish: Point,
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            chars: text.chars().peekable(),
        }
    }

    fn skip_non_digits(&mut self) {
        while self.chars.next_if(|c| !c.is_ascii_digit()).is_some() {}
    }

    fn number(&mut self, what: &'static str) -> Result<usize, InputError> {
        self.skip_non_digits();
        self.digits(what)
    }

    /// Reads a map dimension. Only whitespace may precede it, so signs are not silently dropped.
    fn dimension(&mut self) -> Result<usize, InputError> {
        const WHAT: &str = "game map dimensions";
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
        match self.chars.peek() {
            Some(c) if !c.is_ascii_digit() => Err(InputError::InvalidNumber { what: WHAT }),
            _ => self.digits(WHAT),
        }
    }

    fn digits(&mut self, what: &'static str) -> Result<usize, InputError> {
        let mut value: Option<usize> = None;
        while let Some(c) = self.chars.next_if(char::is_ascii_digit) {
            let digit = c as usize - '0' as usize;
            value = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .map(Some)
                .ok_or(InputError::NumberTooLarge { what })?;
        }
        value.ok_or(InputError::UnexpectedEof { what })
    }

    fn point(&mut self, what: &'static str) -> Result<Point, InputError> {
        let x = self.number(what)?;
        let y = self.number(what)?;
        let coord = |v: usize| i32::try_from(v).map_err(|_| InputError::NumberTooLarge { what });
        Ok(Point::new(coord(x)?, coord(y)?))
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Reads and parses the input file at `path`.
pub fn read_file<P: AsRef<std::path::Path>>(path: P) -> Result<Problem, InputError> {
    let path = path.as_ref();
    debug!("Reading input from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<Problem, InputError> {
    let mut scanner = Scanner::new(text);
    let height = scanner.dimension()?;
    let width = scanner.dimension()?;
    let mut grid = Grid::new(width, height)?;

    let start = scanner.point("start point")?;
    if !grid.point_in_bounds(start) {
        return Err(InputError::PointOutOfBounds {
            which: "start",
            point: start,
        });
    }
    let finish = scanner.point("finish point")?;
    if !grid.point_in_bounds(finish) {
        return Err(InputError::PointOutOfBounds {
            which: "finish",
            point: finish,
        });
    }

    scanner.skip_non_digits();
    for row in 0..height {
        for column in 0..width {
            let wall = match scanner.next_char() {
                Some('0') => false,
                Some('1') => true,
                Some(ch) => return Err(InputError::InvalidCell { ch, row, column }),
                None => {
                    return Err(InputError::UnexpectedEof {
                        what: "game map content",
                    })
                }
            };
            grid.set_wall(Point::new(column as i32, row as i32), wall);
        }
        scanner.skip_non_digits();
    }
    grid.update();

    // Transform to the top-down row order of the grid
    let flip = |p: Point| Point::new(p.x, height as i32 - 1 - p.y);
    Ok(Problem {
        grid,
        start: flip(start),
        finish: flip(finish),
    })
}
