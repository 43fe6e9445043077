use fxhash::FxHashMap;
use grid_util::point::Point;
use log::{debug, info, warn};

use crate::{
    cell::CellState,
    frontier::OpenSet,
    grid::Grid,
    heuristic::manhattan,
    observer::Observer,
    solver::{check_preconditions, reconstruct_path, GridSolver, SearchOutcome},
    Cost, FxIndexMap, EDGE_COST,
};

/// A* with the Manhattan distance as heuristic. Ties on the estimated cost are broken by the order
/// in which cells entered the frontier.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Weight applied to the heuristic. Values above 1.0 give up the shortest-path guarantee in
    /// exchange for fewer expansions.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Just the Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> Cost {
        (manhattan(p1, p2) as f32 * self.heuristic_factor) as Cost
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn search<O>(&self, grid: &mut Grid, start: Point, end: Point, observer: &mut O) -> SearchOutcome
    where
        O: Observer + ?Sized,
    {
        check_preconditions(grid, start, end);
        info!("Running A* from {:?} to {:?}", start, end);
        let mut open_set: OpenSet<Cost> = OpenSet::new();
        let mut came_from: FxIndexMap<Point, Point> = FxIndexMap::default();
        let mut g_score: FxHashMap<Point, Cost> = FxHashMap::default();
        g_score.insert(start, 0);
        open_set.push(start, self.heuristic(&start, &end));
        let mut expanded = 0usize;

        loop {
            if observer.should_abort() {
                warn!("A* aborted after {} expansions", expanded);
                return SearchOutcome::Aborted;
            }
            let Some((current, _)) = open_set.pop() else {
                break;
            };
            if current == end {
                let path = reconstruct_path(&came_from, end, grid, observer);
                grid.classify(end, CellState::End);
                info!("A* reached {:?} after {} expansions", end, expanded);
                return SearchOutcome::Found(path);
            }
            expanded += 1;
            let current_g = g_score[&current];
            // Copied out so cells can be reclassified while iterating
            let neighbors = grid.neighbors(current).to_vec();
            for neighbor in neighbors {
                let candidate = current_g + EDGE_COST;
                if candidate < g_score.get(&neighbor).copied().unwrap_or(Cost::MAX) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, candidate);
                    let f_score = candidate + self.heuristic(&neighbor, &end);
                    // A pending neighbour only gets its key refreshed
                    if open_set.push(neighbor, f_score) {
                        grid.classify(neighbor, CellState::Open);
                    }
                }
            }
            debug!(
                "Expanded {:?}, {} cells pending",
                current,
                open_set.len()
            );
            observer.draw(grid);
            if current != start {
                grid.classify(current, CellState::Closed);
            }
        }
        info!(
            "No path from {:?} to {:?}, frontier exhausted after {} expansions",
            start, end, expanded
        );
        SearchOutcome::NoPath
    }
}
