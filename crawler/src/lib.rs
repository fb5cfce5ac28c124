//! Finds the contiguous regions of fertile land on a parsed grid

pub mod run;

use std::collections::VecDeque;

use common::debug;
use land::{
    cell::Cell,
    coord::{neighbours, Point},
    grid::Grid,
};

/// A maximal set of 4-adjacent fertile cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Label the region's cells were stamped with
    pub label: u32,
    /// First cell of the region in scan order
    pub seed: Point,
    /// Number of cells
    pub area: u64,
}

/// Iterator over the fertile regions of a grid, in the order their seeds appear in the scan
///
/// Each region is flood filled breadth first with an explicit queue, and its cells are stamped
/// with [Cell::Region] so no cell is visited twice. Labels start at 1.
pub struct RegionCrawler<'a> {
    grid: &'a mut Grid<Cell>,
    queue: VecDeque<Point>,
    next_label: u32,
    resume_at: Option<Point>,
}

impl<'a> RegionCrawler<'a> {
    pub fn new(grid: &'a mut Grid<Cell>) -> Self {
        RegionCrawler {
            grid,
            queue: VecDeque::new(),
            next_label: 1,
            resume_at: Some((0, 0)),
        }
    }

    /// Stamps every fertile cell connected to `seed` with `label` and returns their count
    fn flood(&mut self, seed: Point, label: u32) -> u64 {
        self.grid.set(seed.0, seed.1, Cell::Region(label));
        self.queue.push_back(seed);
        let mut area = 1;

        while let Some((x, y)) = self.queue.pop_front() {
            for (nx, ny) in neighbours(x, y) {
                if self.grid.get(nx, ny) == Some(&Cell::Fertile) {
                    self.grid.set(nx, ny, Cell::Region(label));
                    self.queue.push_back((nx, ny));
                    area += 1;
                }
            }
        }

        area
    }
}

impl<'a> Iterator for RegionCrawler<'a> {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        let Some(seed) = self.grid.find_next(&Cell::Fertile, self.resume_at?) else {
            self.resume_at = None;
            return None;
        };

        let label = self.next_label;
        let area = self.flood(seed, label);
        self.next_label += 1;
        self.resume_at = Some(seed);

        Some(Region { label, seed, area })
    }
}

/// Finds the areas of all fertile regions of `grid`, sorted from smallest to largest
///
/// Visited cells are relabelled in place, see [RegionCrawler].
pub fn find_regions(grid: &mut Grid<Cell>) -> Vec<u64> {
    let mut areas = RegionCrawler::new(grid)
        .map(|region| region.area)
        .collect::<Vec<u64>>();
    areas.sort_unstable();

    debug!("Found {} fertile region(s)", areas.len());
    areas
}
