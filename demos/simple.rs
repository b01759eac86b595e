use ball_path::output;
use ball_path::{find_path, Grid, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_wall(Point::new(1, 1), true);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = find_path(&mut grid, start, end).unwrap();
    println!("Path:");
    for action in &path {
        println!("{:?} {}", action.kind, action.point);
    }
    print!("{}", output::solve_map(&grid, &path));
}
