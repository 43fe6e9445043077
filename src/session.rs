use crate::cell::CellState;
use crate::grid::{Grid, GridError};
use crate::observer::Observer;
use crate::solver::{GridSolver, SearchOutcome};
use crate::IMPOSSIBLE_MESSAGE;
use core::fmt;
use grid_util::point::Point;
use log::{info, warn};

/// Reasons a [Session] refuses an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    Grid(GridError),
    OutOfBounds(Point),
    MissingStart,
    MissingEnd,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::Grid(e) => write!(f, "{e}"),
            SessionError::OutOfBounds(p) => write!(f, "({}, {}) is outside the grid", p.x, p.y),
            SessionError::MissingStart => write!(f, "no start cell has been placed"),
            SessionError::MissingEnd => write!(f, "no end cell has been placed"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> SessionError {
        SessionError::Grid(e)
    }
}

/// The editing layer around a [Grid]: places the start, end and barriers the way a user paints
/// them, keeps at most one start and one end, and runs searches on freshly recomputed neighbours.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    width: usize,
    start: Option<Point>,
    end: Option<Point>,
}

impl Session {
    pub fn new(size: usize, width: usize) -> Result<Session, SessionError> {
        Ok(Session {
            grid: Grid::with_width(size, width)?,
            width,
            start: None,
            end: None,
        })
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    fn check_bounds(&self, pos: Point) -> Result<(), SessionError> {
        if self.grid.in_bounds(pos) {
            Ok(())
        } else {
            Err(SessionError::OutOfBounds(pos))
        }
    }
    /// Primary action on a cell: the first paint places the start, the next one the end, and
    /// anything after that a barrier. The start and end themselves are never painted over.
    pub fn paint(&mut self, pos: Point) -> Result<CellState, SessionError> {
        self.check_bounds(pos)?;
        let is_start = self.start == Some(pos);
        let is_end = self.end == Some(pos);
        let state = if self.start.is_none() && !is_end {
            self.start = Some(pos);
            CellState::Start
        } else if self.end.is_none() && !is_start {
            self.end = Some(pos);
            CellState::End
        } else if !is_start && !is_end {
            CellState::Barrier
        } else {
            return Ok(self.grid.state(pos));
        };
        self.grid.classify(pos, state);
        Ok(state)
    }
    /// Secondary action on a cell: resets it to empty and forgets it as start or end.
    pub fn erase(&mut self, pos: Point) -> Result<(), SessionError> {
        self.check_bounds(pos)?;
        self.grid.classify(pos, CellState::Empty);
        if self.start == Some(pos) {
            self.start = None;
        } else if self.end == Some(pos) {
            self.end = None;
        }
        Ok(())
    }
    /// Replaces the grid with a fresh one of the same size.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.grid = Grid::with_width(self.grid.size(), self.width)?;
        self.start = None;
        self.end = None;
        Ok(())
    }
    /// Removes the marks of the previous run, keeping start, end and barriers.
    pub fn reset_search(&mut self) {
        self.grid.reset_search_marks();
        self.restore_markers();
    }
    /// Puts the start and end markers back. A run may leave the end classified as open when it
    /// stops before reaching it.
    fn restore_markers(&mut self) {
        if let Some(start) = self.start {
            self.grid.classify(start, CellState::Start);
        }
        if let Some(end) = self.end {
            self.grid.classify(end, CellState::End);
        }
    }
    /// Recomputes all neighbours and runs `solver` from the start to the end. When no path exists
    /// the observer receives [IMPOSSIBLE_MESSAGE].
    pub fn run<S, O>(&mut self, solver: &S, observer: &mut O) -> Result<SearchOutcome, SessionError>
    where
        S: GridSolver,
        O: Observer + ?Sized,
    {
        let start = self.start.ok_or(SessionError::MissingStart)?;
        let end = self.end.ok_or(SessionError::MissingEnd)?;
        self.grid.recompute_neighbors();
        let outcome = solver.search(&mut self.grid, start, end, observer);
        match &outcome {
            SearchOutcome::Found(path) => info!("Search finished, {} steps", path.len()),
            SearchOutcome::NoPath => observer.message(IMPOSSIBLE_MESSAGE),
            SearchOutcome::Aborted => {
                warn!("Search aborted");
                self.restore_markers();
            }
        }
        Ok(outcome)
    }
}
