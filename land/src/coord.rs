pub type Coord = i32;

/// A position on a grid as `(x, y)`
pub type Point = (Coord, Coord);

/// The four 4-adjacent positions of `(x, y)` in the order west, north, east, south
///
/// Positions may lie outside of any grid and must be checked with
/// [Grid::contains](crate::grid::Grid::contains) before use.
pub fn neighbours(x: Coord, y: Coord) -> [Point; 4] {
    [(x - 1, y), (x, y + 1), (x + 1, y), (x, y - 1)]
}
