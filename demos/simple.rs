use grid_search::{solver::astar::AstarSolver, CellState, Grid, GridSolver, NoopObserver};
use grid_util::point::Point;

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
    let mut grid = Grid::new(3).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    grid.classify(start, CellState::Start);
    grid.classify(end, CellState::End);
    grid.classify(Point::new(1, 1), CellState::Barrier);
    grid.recompute_neighbors();
    let outcome = AstarSolver::new().search(&mut grid, start, end, &mut NoopObserver);
    if let Some(path) = outcome.path() {
        println!("{}", path);
    }
    println!("{}", grid);
}
