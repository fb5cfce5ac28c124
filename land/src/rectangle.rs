use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Inclusive, axis aligned box of barren land from `(x1, y1)` to `(x2, y2)`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x1: Coord,
    pub y1: Coord,
    pub x2: Coord,
    pub y2: Coord,
}

impl Rectangle {
    pub fn new(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Rectangle { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> u64 {
        (self.x2 as i64 - self.x1 as i64 + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (self.y2 as i64 - self.y1 as i64 + 1) as u64
    }

    /// Number of cells covered
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }
}

/// Renders the quoted input token, e.g. `"0 292 399 307"`
impl Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{} {} {} {}\"", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Renders a complete input line that [parse_rectangles](crate::input::parse_rectangles) accepts
pub fn format_rectangles(rectangles: &[Rectangle]) -> String {
    let tokens = rectangles
        .iter()
        .map(Rectangle::to_string)
        .collect::<Vec<String>>();
    format!("{{{}}}", tokens.join(", "))
}
