use ball_path::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
use ball_path::{Grid, Point};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(n, n).unwrap();
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            grid.set_wall(Point::new(x, y), rng.gen_bool(0.25));
        }
    }
    grid.update();
    grid
}

fn random_scenarios(n: usize, count: usize, rng: &mut StdRng) -> Vec<(Point, Point)> {
    (0..count)
        .map(|_| {
            let mut p = || Point::new(rng.gen_range(0..n) as i32, rng.gen_range(0..n) as i32);
            (p(), p())
        })
        .collect()
}

type Solve = fn(&mut Grid, Point, Point) -> usize;

fn astar(grid: &mut Grid, start: Point, end: Point) -> usize {
    AstarSolver::new().find_path(grid, start, end).unwrap().steps()
}

fn astar_without_components(grid: &mut Grid, start: Point, end: Point) -> usize {
    let mut solver = AstarSolver::new();
    solver.component_check = false;
    solver.find_path(grid, start, end).unwrap().steps()
}

fn dijkstra(grid: &mut Grid, start: Point, end: Point) -> usize {
    DijkstraSolver::default()
        .find_path(grid, start, end)
        .unwrap()
        .steps()
}

fn random_grid_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 128] {
        let mut grid = random_grid(n, &mut rng);
        let scenarios = random_scenarios(n, 100, &mut rng);
        let solvers: [(&str, Solve); 3] = [
            ("astar", astar),
            ("astar (no components)", astar_without_components),
            ("dijkstra", dijkstra),
        ];
        for (name, solve) in &solvers {
            c.bench_function(format!("{n}x{n}, {name}").as_str(), |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(solve(&mut grid, *start, *end));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, random_grid_bench);
criterion_main!(benches);
