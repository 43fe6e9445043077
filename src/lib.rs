//! # grid_search
//!
//! The search engine behind an interactive path-search visualizer. A square [Grid](grid::Grid) of
//! [Cell](cell::Cell)s is painted with a start, an end and barriers, after which
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) or
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) explores it one cell
//! at a time. Every expansion reclassifies cells and hands control to an
//! [Observer](observer::Observer) so a renderer can animate the search, and the resulting path is
//! revealed cell by cell. Movement is 4-directional with unit cost, so both algorithms return
//! shortest paths.
//!
//! ```
//! use grid_search::{session::Session, solver::Algorithm};
//! use grid_util::point::Point;
//!
//! let mut session = Session::new(5, 100).unwrap();
//! session.paint(Point::new(0, 0)).unwrap();
//! session.paint(Point::new(0, 4)).unwrap();
//! let outcome = session
//!     .run(&Algorithm::astar(), &mut grid_search::observer::NoopObserver)
//!     .unwrap();
//! assert_eq!(outcome.path().unwrap().len(), 4);
//! ```
pub mod cell;
mod frontier;
pub mod grid;
pub mod heuristic;
pub mod observer;
pub mod session;
pub mod solver;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

pub use cell::{Cell, CellState};
pub use grid::{Grid, GridError};
pub use observer::{NoopObserver, Observer};
pub use session::{Session, SessionError};
pub use solver::{Algorithm, GridSolver, Path, SearchOutcome};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Path cost type; every edge costs [EDGE_COST].
pub type Cost = u32;

pub const EDGE_COST: Cost = 1;
/// Rows (and columns) of the grid in the reference setup.
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Width in pixels of the surface the reference setup draws on.
pub const DEFAULT_WIDTH: usize = 800;
/// Shown through [Observer::message] when a run ends without a path.
pub const IMPOSSIBLE_MESSAGE: &str = "Impossible";
const N_SMALLVEC_SIZE: usize = 4;
