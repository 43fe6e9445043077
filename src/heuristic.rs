use grid_util::point::Point;

use crate::Cost;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two grid
/// positions. Admissible and consistent for 4-directional movement with unit edge cost.
pub fn manhattan(a: &Point, b: &Point) -> Cost {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as Cost
}
