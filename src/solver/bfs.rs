use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::collections::VecDeque;

use crate::{
    cell::CellState,
    grid::Grid,
    observer::Observer,
    solver::{check_preconditions, reconstruct_path, GridSolver, SearchOutcome},
    FxIndexMap,
};

/// Breadth-first search. On unit-cost edges the first time the end leaves the queue it has been
/// reached with the minimal number of steps, so no heuristic is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search<O>(&self, grid: &mut Grid, start: Point, end: Point, observer: &mut O) -> SearchOutcome
    where
        O: Observer + ?Sized,
    {
        check_preconditions(grid, start, end);
        info!("Running BFS from {:?} to {:?}", start, end);
        let mut queue = VecDeque::new();
        let mut visited: FxHashSet<Point> = FxHashSet::default();
        let mut came_from: FxIndexMap<Point, Point> = FxIndexMap::default();
        queue.push_back(start);
        visited.insert(start);
        let mut expanded = 0usize;

        loop {
            if observer.should_abort() {
                warn!("BFS aborted after {} expansions", expanded);
                return SearchOutcome::Aborted;
            }
            let Some(current) = queue.pop_front() else {
                break;
            };
            if current == end {
                let path = reconstruct_path(&came_from, end, grid, observer);
                grid.classify(end, CellState::End);
                info!("BFS reached {:?} after {} expansions", end, expanded);
                return SearchOutcome::Found(path);
            }
            expanded += 1;
            let neighbors = grid.neighbors(current).to_vec();
            for neighbor in neighbors {
                if !visited.contains(&neighbor) && !grid.is_barrier(neighbor) {
                    visited.insert(neighbor);
                    came_from.insert(neighbor, current);
                    queue.push_back(neighbor);
                    grid.classify(neighbor, CellState::Open);
                }
            }
            debug!("Expanded {:?}, {} cells queued", current, queue.len());
            observer.draw(grid);
            if current != start {
                grid.classify(current, CellState::Closed);
            }
        }
        info!(
            "No path from {:?} to {:?}, queue exhausted after {} expansions",
            start, end, expanded
        );
        SearchOutcome::NoPath
    }
}
