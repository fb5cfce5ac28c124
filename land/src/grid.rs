use std::fmt::Display;

use crate::{
    coord::{Coord, Point},
    error::GridError,
};

/// Dense, bounds-checked 2D grid
///
/// Cells are stored column by column (all `y` of `x = 0`, then all `y` of `x = 1`, ...), which
/// is also the order [Grid::find_next] scans in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + PartialEq> Grid<T> {
    /// Creates a `width` x `height` grid with every cell set to `value`
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if `(x, y)` lies on the grid
    #[inline]
    pub fn contains(&self, x: Coord, y: Coord) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: Coord, y: Coord) -> Option<usize> {
        if self.contains(x, y) {
            Some(x as usize * self.height + y as usize)
        } else {
            None
        }
    }

    fn point(&self, index: usize) -> Point {
        ((index / self.height) as Coord, (index % self.height) as Coord)
    }

    pub fn get(&self, x: Coord, y: Coord) -> Option<&T> {
        self.index(x, y).map(|index| &self.cells[index])
    }

    /// Overwrites a single cell. Returns false (and changes nothing) if `(x, y)` is off the grid.
    pub fn set(&mut self, x: Coord, y: Coord, value: T) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.cells[index] = value;
                true
            }
            None => false,
        }
    }

    /// Sets every cell of the inclusive box `(x1, y1)..=(x2, y2)` to `value`
    ///
    /// Fails without touching the grid if a corner is off the grid or the box is inverted.
    pub fn fill_rectangle(
        &mut self,
        value: T,
        x1: Coord,
        y1: Coord,
        x2: Coord,
        y2: Coord,
    ) -> Result<(), GridError> {
        if !self.contains(x1, y1) {
            return Err(GridError::OutOfBounds((x1, y1)));
        }
        if !self.contains(x2, y2) {
            return Err(GridError::OutOfBounds((x2, y2)));
        }
        if x1 > x2 || y1 > y2 {
            return Err(GridError::Inverted);
        }

        let (y1, y2) = (y1 as usize, y2 as usize);
        for x in x1 as usize..=x2 as usize {
            let column = x * self.height;
            self.cells[column + y1..=column + y2].fill(value.clone());
        }

        Ok(())
    }

    /// Finds the first cell equal to `value` at or after `start`
    ///
    /// Scans `x` in the outer and `y` in the inner loop. Only the first column starts at
    /// `start.1`, all further columns start at `y = 0`. Feeding a result back in as the next start
    /// therefore continues exactly where the last search stopped.
    ///
    /// Returns `None` if there is no such cell or `start` lies off the grid.
    pub fn find_next(&self, value: &T, start: Point) -> Option<Point> {
        let start = self.index(start.0, start.1)?;
        self.cells[start..]
            .iter()
            .position(|cell| cell == value)
            .map(|offset| self.point(start + offset))
    }

    /// Number of cells equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|cell| *cell == value).count()
    }

    /// Iterates all cells with their positions in scan order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.point(index), cell))
    }
}

impl<T> Display for Grid<T>
where
    T: Clone + PartialEq,
    for<'a> &'a T: Into<char>,
{
    /// Draws one row per `y`, largest `y` first
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cells.is_empty() {
            f.write_str("Empty grid")?;
            return Ok(());
        }

        for y in (0..self.height as Coord).rev() {
            for x in 0..self.width as Coord {
                let c: char = self.get(x, y).map(|cell| cell.into()).unwrap_or(' ');
                f.write_fmt(format_args!("{}", c))?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}
