use grid_util::point::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Classification of a single grid position. Exactly one state applies at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    Open,
    Closed,
    Path,
}

impl CellState {
    /// Character used by the text rendering of a [Grid](crate::grid::Grid).
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Barrier => '#',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    /// States written by a search run, as opposed to ones placed by the user.
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }
}

/// A node of the grid graph. The position is fixed at creation, the state only changes through
/// [classify](Cell::classify) and the neighbour list is derived by
/// [Grid::recompute_neighbors](crate::grid::Grid::recompute_neighbors).
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Point,
    state: CellState,
    pub(crate) neighbors: SmallVec<[Point; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Cell {
        Cell {
            pos: Point::new(row as i32, col as i32),
            state: CellState::Empty,
            neighbors: SmallVec::new(),
        }
    }
    /// Position of the cell, with `x` as the row and `y` as the column.
    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn row(&self) -> usize {
        self.pos.x as usize
    }
    pub fn col(&self) -> usize {
        self.pos.y as usize
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    /// Sets the state unconditionally. No check is made against other cells, so keeping a single
    /// start and end is up to the caller.
    pub fn classify(&mut self, state: CellState) {
        self.state = state;
    }
    /// Traversable neighbours as of the last recomputation, in down, up, right, left order.
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }
    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }
}
