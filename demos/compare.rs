use grid_search::{
    solver::{astar::AstarSolver, bfs::BfsSolver, GridSolver},
    CellState, Grid,
};
use grid_util::point::Point;

// Runs both solvers on the same maze and counts how many frames each one draws, which shows how
// much less of the grid A* has to explore.
//  _____
// |S    |
// |#### |
// |     |
// | ####|
// |    E|
//  _____
fn main() {
    let mut grid = Grid::new(5).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    for col in 0..4 {
        grid.classify(Point::new(1, col), CellState::Barrier);
        grid.classify(Point::new(3, col + 1), CellState::Barrier);
    }
    grid.classify(start, CellState::Start);
    grid.classify(end, CellState::End);
    grid.recompute_neighbors();

    for (name, astar) in [("A*", true), ("BFS", false)] {
        let mut run_grid = grid.clone();
        let mut frames = 0;
        let mut count = |_: &Grid| frames += 1;
        let outcome = if astar {
            AstarSolver::new().search(&mut run_grid, start, end, &mut count)
        } else {
            BfsSolver.search(&mut run_grid, start, end, &mut count)
        };
        let steps = outcome.path().map(|p| p.len());
        println!("{name}: {steps:?} steps, {frames} frames");
        println!("{run_grid}");
    }
}
