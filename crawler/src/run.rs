//! Higher level runner: parse one input line and crawl the resulting grid

use std::time::Instant;

use common::debug;
use land::{cell::Cell, error::ParseError, grid::Grid, input::parse_input, report::Report};

use crate::find_regions;

#[cfg(not(feature = "stats"))]
#[derive(Debug)]
pub struct RunnerResult {
    /// Region areas, smallest first
    pub areas: Vec<u64>,
    /// The grid with every fertile cell stamped with its region label
    pub grid: Grid<Cell>,
}

#[cfg(feature = "stats")]
#[derive(Debug)]
pub struct RunnerResult {
    pub areas: Vec<u64>,
    pub grid: Grid<Cell>,
    pub cells_per_second: u128,
}

/// Parses `input` for a `width` x `height` parcel and finds its fertile regions
pub fn run(input: &str, width: usize, height: usize) -> Result<RunnerResult, ParseError> {
    let time_start = Instant::now();
    let mut grid = parse_input(input, width, height)?;
    debug!("Built {}x{} grid in {:?}", width, height, time_start.elapsed());

    let time_crawl = Instant::now();
    let areas = find_regions(&mut grid);
    debug!("Crawled grid in {:?}", time_crawl.elapsed());

    #[cfg(feature = "stats")]
    {
        let micros = time_crawl.elapsed().as_micros().max(1);
        let cells_per_second = 1_000_000 * grid.len() as u128 / micros;
        Ok(RunnerResult {
            areas,
            grid,
            cells_per_second,
        })
    }
    #[cfg(not(feature = "stats"))]
    {
        Ok(RunnerResult { areas, grid })
    }
}

/// Like [run], but condensed to the serializable [Report]
pub fn run_report(input: &str, width: usize, height: usize) -> Report {
    Report::from(run(input, width, height).map(|result| result.areas))
}
