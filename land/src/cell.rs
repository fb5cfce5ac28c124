use std::fmt::Display;

/// State of a single square of land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Covered by at least one input rectangle
    Barren,
    /// Not covered by any rectangle and not yet assigned to a region
    Fertile,
    /// Fertile land already assigned to the region with the given label
    Region(u32),
}

impl Cell {
    pub fn is_fertile(&self) -> bool {
        !matches!(self, Cell::Barren)
    }
}

impl From<&Cell> for char {
    fn from(cell: &Cell) -> char {
        match cell {
            Cell::Barren => '#',
            Cell::Fertile => '.',
            Cell::Region(label) => (b'a' + (label.wrapping_sub(1) % 26) as u8) as char,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Barren => f.write_str("barren"),
            Cell::Fertile => f.write_str("fertile"),
            Cell::Region(label) => write!(f, "region {}", label),
        }
    }
}
