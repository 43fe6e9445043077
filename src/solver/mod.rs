use crate::cell::CellState;
use crate::grid::Grid;
use crate::observer::Observer;
use crate::FxIndexMap;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::info;

pub mod astar;
pub mod bfs;

use astar::AstarSolver;
use bfs::BfsSolver;

/// A path found by a search, ordered from the first step after the start up to and including the
/// end. The start itself is not part of the path.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    /// Number of edges traversed, which equals the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// The points as `(row, col)` pairs.
    pub fn coords(&self) -> Vec<(usize, usize)> {
        self.points
            .iter()
            .map(|p| (p.x as usize, p.y as usize))
            .collect()
    }
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines = self
            .points
            .iter()
            .map(|p| format!("  ({}, {}),", p.x, p.y))
            .join("\n");
        writeln!(f, "Path")?;
        writeln!(f, "Start:")?;
        if !lines.is_empty() {
            writeln!(f, "{lines}")?;
        }
        writeln!(f, "Goal")?;
        write!(f, "Length: {} steps", self.len())
    }
}

/// Terminal result of a single search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// The frontier ran out before the end was reached.
    NoPath,
    /// The observer asked to stop. Cell states are left as they were at that moment.
    Aborted,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// A search strategy over a [Grid]. Implementors classify cells as they discover
/// ([CellState::Open]) and finish ([CellState::Closed]) them and call the observer after every
/// expansion.
///
/// Preconditions: `start` and `end` are distinct in-bounds cells and
/// [Grid::recompute_neighbors] has been called since the last edit.
pub trait GridSolver {
    fn search<O>(&self, grid: &mut Grid, start: Point, end: Point, observer: &mut O) -> SearchOutcome
    where
        O: Observer + ?Sized;

    /// Like [search](Self::search) but reports only whether a path was found.
    fn search_found<O>(&self, grid: &mut Grid, start: Point, end: Point, observer: &mut O) -> bool
    where
        O: Observer + ?Sized,
    {
        self.search(grid, start, end, observer).found()
    }
}

/// The available strategies as a tagged variant, for callers that pick one at runtime.
#[derive(Clone, Debug)]
pub enum Algorithm {
    Astar(AstarSolver),
    Bfs(BfsSolver),
}

impl Algorithm {
    pub fn astar() -> Algorithm {
        Algorithm::Astar(AstarSolver::new())
    }
    pub fn bfs() -> Algorithm {
        Algorithm::Bfs(BfsSolver)
    }
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Astar(_) => "A*",
            Algorithm::Bfs(_) => "BFS",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Algorithm {
        Algorithm::astar()
    }
}

impl GridSolver for Algorithm {
    fn search<O>(&self, grid: &mut Grid, start: Point, end: Point, observer: &mut O) -> SearchOutcome
    where
        O: Observer + ?Sized,
    {
        match self {
            Algorithm::Astar(solver) => solver.search(grid, start, end, observer),
            Algorithm::Bfs(solver) => solver.search(grid, start, end, observer),
        }
    }
}

pub(crate) fn check_preconditions(grid: &Grid, start: Point, end: Point) {
    debug_assert!(grid.in_bounds(start), "start {start:?} is outside the grid");
    debug_assert!(grid.in_bounds(end), "end {end:?} is outside the grid");
    debug_assert!(start != end, "start and end must differ");
}

/// Walks the parent map back from `end`, marking every cell between start and end as
/// [CellState::Path] and drawing after each one. Returns the path from the start's successor to
/// `end`.
pub(crate) fn reconstruct_path<O>(
    came_from: &FxIndexMap<Point, Point>,
    end: Point,
    grid: &mut Grid,
    observer: &mut O,
) -> Path
where
    O: Observer + ?Sized,
{
    let mut points = Vec::new();
    let mut current = end;
    while let Some(&previous) = came_from.get(&current) {
        points.push(current);
        current = previous;
        // The start is the only visited cell without a parent
        if came_from.contains_key(&current) {
            grid.classify(current, CellState::Path);
            observer.draw(grid);
        }
    }
    points.reverse();
    let path = Path { points };
    for line in path.to_string().lines() {
        info!("{}", line);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_marks_intermediate_cells() {
        let mut grid = Grid::new(3).unwrap();
        let start = Point::new(0, 0);
        let end = Point::new(2, 1);
        grid.classify(start, CellState::Start);
        grid.classify(end, CellState::End);
        let mut came_from: FxIndexMap<Point, Point> = FxIndexMap::default();
        came_from.insert(Point::new(1, 0), start);
        came_from.insert(Point::new(2, 0), Point::new(1, 0));
        came_from.insert(end, Point::new(2, 0));
        // Not on the path
        came_from.insert(Point::new(0, 1), start);

        let mut draws = 0;
        let path = reconstruct_path(&came_from, end, &mut grid, &mut |_: &Grid| draws += 1);
        assert_eq!(path.coords(), vec![(1, 0), (2, 0), (2, 1)]);
        assert_eq!(path.len(), 3);
        assert_eq!(draws, 2);
        assert_eq!(grid.to_string(), "S..\n*..\n*E.\n");
    }

    #[test]
    fn path_report_format() {
        let path = Path {
            points: vec![Point::new(0, 1), Point::new(0, 2)],
        };
        assert_eq!(
            path.to_string(),
            "Path\nStart:\n  (0, 1),\n  (0, 2),\nGoal\nLength: 2 steps"
        );
    }

    #[test]
    fn algorithm_dispatch() {
        assert_eq!(Algorithm::default().name(), "A*");
        assert_eq!(Algorithm::bfs().name(), "BFS");
        let mut grid = Grid::new(2).unwrap();
        grid.recompute_neighbors();
        for algorithm in [Algorithm::astar(), Algorithm::bfs()] {
            let found = algorithm.search_found(
                &mut grid,
                Point::new(0, 0),
                Point::new(1, 1),
                &mut crate::observer::NoopObserver,
            );
            assert!(found);
            grid.reset_search_marks();
        }
    }
}
