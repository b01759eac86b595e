//! Console rendering of a search result.
//!
//! A found path prints as the sequence of moves (`L`, `R`, `U`, `D`), the number of steps and a
//! solve map: the board with `O` for balls, blanks for empty cells and every path cell replaced
//! by the move made from it, the finish marked `F`.
use crate::grid::Grid;
use crate::path::Path;
use grid_util::point::Point;
use itertools::Itertools;
use std::io::{self, Write};

pub const WALL_CHAR: char = 'O';
pub const EMPTY_CHAR: char = ' ';
pub const NO_PATH: &str = "There is no path";

/// Moves of the path separated by commas; the finish marker is left out.
pub fn path_string(path: &Path) -> String {
    let moves = path.len().saturating_sub(1);
    path.iter().take(moves).map(|a| a.kind.symbol()).join(", ")
}

/// Offset of `point` in the row-major text produced by [solve_map], where every row is followed
/// by a newline.
pub fn text_offset(grid: &Grid, point: Point) -> usize {
    point.x as usize + point.y as usize * (grid.width() + 1)
}

pub fn solve_map(grid: &Grid, path: &Path) -> String {
    let mut buffer = Vec::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            buffer.push(if grid.at_xy(x, y).is_wall() {
                WALL_CHAR
            } else {
                EMPTY_CHAR
            });
        }
        buffer.push('\n');
    }
    for action in path {
        buffer[text_offset(grid, action.point)] = action.kind.symbol();
    }
    buffer.into_iter().collect()
}

/// Writes the full report for `path`. Paths without a single move are reported as not found.
pub fn write_result<W: Write>(out: &mut W, grid: &Grid, path: &Path) -> io::Result<()> {
    if path.len() < 2 {
        writeln!(out, "{}", NO_PATH)?;
    } else {
        writeln!(out, "Shortest path: {}", path_string(path))?;
        writeln!(out, "Steps number in path: {}", path.steps())?;
        writeln!(out, "Solve map:")?;
        writeln!(out, "{}", solve_map(grid, path))?;
    }
    Ok(())
}
