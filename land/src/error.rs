use thiserror::Error;

use crate::coord::{Coord, Point};

/// Reasons an input line is rejected, in the order the checks run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the land mass must be at least 1x1, got {width}x{height}")]
    EmptyParcel { width: usize, height: usize },
    #[error("the entered string was empty")]
    EmptyInput,
    #[error("the input string must start with '{{'")]
    MissingOpenBrace,
    #[error("the input string must end with '}}'")]
    MissingCloseBrace,
    #[error("the input string contains unexpected characters before the closing '}}'")]
    TrailingGarbage,
    #[error("there were invalid delimiters in the rectangle {0}")]
    BadRectangleDelimiters(String),
    #[error("there were {0} sides of the rectangle specified instead of 4")]
    WrongCoordinateCount(usize),
    #[error("'{0}' could not be parsed as an integer")]
    NotAnInteger(String),
    #[error("{value} is not a valid {name} coordinate (allowed: 0 to {max})")]
    CoordinateOutOfRange {
        name: &'static str,
        value: Coord,
        max: i64,
    },
    #[error("{name} is {value} but must not be less than {min}")]
    InvertedRectangle {
        name: &'static str,
        value: Coord,
        min: Coord,
    },
}

/// Reasons [Grid::fill_rectangle](crate::grid::Grid::fill_rectangle) refuses a rectangle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("corner {0:?} lies outside of the grid")]
    OutOfBounds(Point),
    #[error("lower corner lies above or right of upper corner")]
    Inverted,
}
