//! Parcel model: the land grid, its cell states and the parser turning rectangle lists into grids

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod input;
pub mod rectangle;
pub mod report;
