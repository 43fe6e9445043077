use crate::cell::{Cell, CellState};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Errors raised when building a [Grid].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid dimension must be at least one.
    EmptyGrid,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "grid dimension must be positive"),
        }
    }
}

impl std::error::Error for GridError {}

/// A square matrix of [Cell]s stored row-major. Besides the cells it maintains the connected
/// components of the non-barrier cells in a [UnionFind] structure, which answers reachability
/// queries without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cell_size: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates a `size` x `size` grid of empty cells.
    pub fn new(size: usize) -> Result<Grid, GridError> {
        Grid::with_width(size, size)
    }
    /// Creates a `size` x `size` grid meant to be drawn on a `width` pixel wide surface. The
    /// resulting [cell_size](Self::cell_size) is only of interest to a renderer.
    pub fn with_width(size: usize, width: usize) -> Result<Grid, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
            .collect();
        Ok(Grid {
            size,
            cell_size: width / size,
            cells,
            components: UnionFind::new(size * size),
            components_dirty: true,
        })
    }
    /// Number of rows, which equals the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }
    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }
    fn get_ix_point(&self, pos: &Point) -> usize {
        debug_assert!(self.in_bounds(*pos), "{pos:?} is outside the grid");
        pos.x as usize * self.size + pos.y as usize
    }
    pub fn cell(&self, pos: Point) -> Option<&Cell> {
        if self.in_bounds(pos) {
            Some(&self.cells[self.get_ix_point(&pos)])
        } else {
            None
        }
    }
    /// Iterates over all cells row by row. Cells are only handed out shared; every write goes
    /// through [classify](Self::classify) so the components stay in step with the barriers.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    /// State of the cell at `pos`. Panics if `pos` is out of bounds.
    pub fn state(&self, pos: Point) -> CellState {
        self.cells[self.get_ix_point(&pos)].state()
    }
    /// Classifies the cell at `pos`. Panics if `pos` is out of bounds. Changing whether a cell is a
    /// barrier flags the components as dirty.
    pub fn classify(&mut self, pos: Point, state: CellState) {
        let ix = self.get_ix_point(&pos);
        let cell = &mut self.cells[ix];
        if cell.is_barrier() != (state == CellState::Barrier) {
            self.components_dirty = true;
        }
        cell.classify(state);
    }
    pub fn is_barrier(&self, pos: Point) -> bool {
        self.cell(pos).is_some_and(Cell::is_barrier)
    }
    /// The up to four axis-aligned positions around `pos`, in down, up, right, left order, that are
    /// inside the grid and not barriers.
    pub fn neighborhood_points(&self, pos: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(pos.x + 1, pos.y),
            Point::new(pos.x - 1, pos.y),
            Point::new(pos.x, pos.y + 1),
            Point::new(pos.x, pos.y - 1),
        ]
        .into_iter()
        .filter(|p| self.can_move_to(*p))
        .collect()
    }
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.cell(pos).is_some_and(|c| !c.is_barrier())
    }
    /// Neighbour list of the cell at `pos` as of the last [recompute_neighbors](Self::recompute_neighbors).
    pub fn neighbors(&self, pos: Point) -> &[Point] {
        self.cells[self.get_ix_point(&pos)].neighbors()
    }
    /// Rebuilds the neighbour list of every cell from the current barriers and regenerates the
    /// components if needed. Has to be called after editing and before every search, otherwise the
    /// search walks stale edges.
    pub fn recompute_neighbors(&mut self) {
        debug!("Recomputing neighbours of {} cells", self.cells.len());
        for ix in 0..self.cells.len() {
            let pos = self.cells[ix].pos();
            let neighbors = self.neighborhood_points(&pos);
            self.cells[ix].neighbors = neighbors;
        }
        self.update();
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component. Only meaningful after
    /// [update](Self::update) or [recompute_neighbors](Self::recompute_neighbors).
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let n = self.size as i32;
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for x in 0..n {
            for y in 0..n {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                // Linking forward is enough, the backward links are made from the other side.
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
    /// Returns every cell marked by a search run to [CellState::Empty], keeping the start, end and
    /// barriers in place.
    pub fn reset_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.state().is_search_mark() {
                cell.classify(CellState::Empty);
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|c| c.state().symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
