/// Fuzzes both solvers on many random grids: a path is found exactly when the end is on the same
/// connected component as the start, both solvers agree on the path length, and every returned
/// path is a contiguous walk of grid neighbours.
use grid_search::{
    solver::{astar::AstarSolver, bfs::BfsSolver, GridSolver, Path},
    observer::Recorder,
    CellState, Grid, NoopObserver,
};
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Point, end: Point) -> Grid {
    let mut grid = Grid::new(n).unwrap();
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            let p = Point::new(x, y);
            if p != start && p != end && rng.gen_bool(0.35) {
                grid.classify(p, CellState::Barrier);
            }
        }
    }
    grid.classify(start, CellState::Start);
    grid.classify(end, CellState::End);
    grid.recompute_neighbors();
    grid
}

fn random_grid_point(n: usize, rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..n) as i32, rng.gen_range(0..n) as i32)
}

fn assert_contiguous(path: &Path, start: Point, end: Point, grid: &Grid) {
    let mut previous = start;
    for p in path.points() {
        let step = (p.x - previous.x).abs() + (p.y - previous.y).abs();
        assert_eq!(step, 1, "{previous:?} -> {p:?} is not a single step");
        assert!(!grid.is_barrier(*p));
        previous = *p;
    }
    assert_eq!(previous, end);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let start = random_grid_point(N, &mut rng);
        let mut end = random_grid_point(N, &mut rng);
        while end == start {
            end = random_grid_point(N, &mut rng);
        }
        let grid = random_grid(N, &mut rng, start, end);
        let reachable = grid.reachable(&start, &end);

        let mut astar_grid = grid.clone();
        let astar = AstarSolver::new().search(&mut astar_grid, start, end, &mut NoopObserver);
        let mut bfs_grid = grid.clone();
        let bfs = BfsSolver.search(&mut bfs_grid, start, end, &mut NoopObserver);
        if astar.found() != reachable {
            println!("{grid}");
        }
        assert_eq!(astar.found(), reachable);
        assert_eq!(bfs.found(), reachable);

        match (astar.path(), bfs.path()) {
            (Some(astar_path), Some(bfs_path)) => {
                assert_eq!(astar_path.len(), bfs_path.len());
                assert_contiguous(astar_path, start, end, &astar_grid);
                assert_contiguous(bfs_path, start, end, &bfs_grid);
            }
            _ => {
                assert!(!astar_grid.cells().any(|c| c.is_path()));
                assert!(!bfs_grid.cells().any(|c| c.is_path()));
            }
        }
    }
}

/// Without barriers the shortest path is as long as the Manhattan distance.
#[test]
fn fuzz_open_grid_distance() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::new(N).unwrap();
    grid.recompute_neighbors();
    for _ in 0..200 {
        let start = random_grid_point(N, &mut rng);
        let end = random_grid_point(N, &mut rng);
        if start == end {
            continue;
        }
        let distance = ((start.x - end.x).abs() + (start.y - end.y).abs()) as usize;
        for solver_is_astar in [true, false] {
            let mut run_grid = grid.clone();
            let outcome = if solver_is_astar {
                AstarSolver::new().search(&mut run_grid, start, end, &mut NoopObserver)
            } else {
                BfsSolver.search(&mut run_grid, start, end, &mut NoopObserver)
            };
            assert_eq!(outcome.path().map(Path::len), Some(distance));
        }
    }
}

/// After an exhaustive run every cell reachable from the start, apart from the start itself, is
/// closed.
#[test]
fn exhausted_run_closes_component() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let start = Point::new(0, 0);
        let end = Point::new(N as i32 - 1, N as i32 - 1);
        let mut grid = random_grid(N, &mut rng, start, end);
        // Wall the end in so the search has to exhaust the start's component
        for p in [Point::new(N as i32 - 2, N as i32 - 1), Point::new(N as i32 - 1, N as i32 - 2)] {
            grid.classify(p, CellState::Barrier);
        }
        grid.recompute_neighbors();
        let reference = grid.clone();
        for astar in [true, false] {
            let mut run_grid = reference.clone();
            let outcome = if astar {
                AstarSolver::new().search(&mut run_grid, start, end, &mut NoopObserver)
            } else {
                BfsSolver.search(&mut run_grid, start, end, &mut NoopObserver)
            };
            assert!(!outcome.found());
            for cell in run_grid.cells() {
                let pos = cell.pos();
                if pos == start {
                    assert!(cell.is_start());
                } else if reference.reachable(&start, &pos) {
                    assert!(cell.is_closed(), "{pos:?} should be closed");
                } else {
                    assert_eq!(cell.state(), reference.state(pos));
                }
            }
        }
    }
}

/// Counts, per cell, how often it turned open between two consecutive frames.
fn open_transitions(frames: &[String], initial: &str) -> Vec<usize> {
    let mut counts = vec![0; initial.lines().flat_map(str::chars).count()];
    let mut previous = initial;
    for frame in frames {
        let before = previous.lines().flat_map(str::chars);
        let after = frame.lines().flat_map(str::chars);
        for (ix, (b, a)) in before.zip(after).enumerate() {
            if b != 'o' && a == 'o' {
                counts[ix] += 1;
            }
        }
        previous = frame.as_str();
    }
    counts
}

/// A* never reopens a cell: with a consistent heuristic a cell's cost can only improve while it is
/// still pending, and then only its key is refreshed.
#[test]
fn fuzz_astar_opens_cells_once() {
    const N: usize = 10;
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let start = random_grid_point(N, &mut rng);
        let mut end = random_grid_point(N, &mut rng);
        while end == start {
            end = random_grid_point(N, &mut rng);
        }
        let mut grid = random_grid(N, &mut rng, start, end);
        let initial = grid.to_string();
        let mut recorder = Recorder::new();
        AstarSolver::new().search(&mut grid, start, end, &mut recorder);
        let counts = open_transitions(&recorder.frames, &initial);
        if let Some(ix) = counts.iter().position(|&n| n > 1) {
            println!("{initial}");
            panic!("cell {} of {start:?} -> {end:?} opened {} times", ix, counts[ix]);
        }
    }
}
