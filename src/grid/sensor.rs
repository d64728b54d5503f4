//! Bounded circular range sensor.
//!
//! Copies ground truth into the belief grid for every cell inside a disk
//! around the robot center. Cells outside the grid are skipped; they are
//! not an error.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{CellType, GridCoord};

use super::OccupancyGrid;

/// Statistics from one sensor sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleResult {
    /// Cells inside the disk whose ground truth is known
    pub cells_sampled: usize,
    /// Belief cells whose value changed
    pub cells_updated: usize,
    /// Wall cells seen
    pub cells_wall: usize,
}

impl SampleResult {
    /// Merge another result into this one
    pub fn merge(&mut self, other: &SampleResult) {
        self.cells_sampled += other.cells_sampled;
        self.cells_updated += other.cells_updated;
        self.cells_wall += other.cells_wall;
    }
}

/// Range sensor with a fixed radius in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSensor {
    range: i32,
}

impl RangeSensor {
    /// Create a sensor reaching `range` cells from the robot center.
    pub fn new(range: i32) -> Self {
        Self {
            range: range.max(0),
        }
    }

    /// Sensor range in cells
    #[inline]
    pub fn range(&self) -> i32 {
        self.range
    }

    /// Sample ground truth into the belief grid.
    ///
    /// Writes every cell `(i, j)` with `(i-cx)² + (j-cy)² <= range²` whose
    /// ground truth is known. A center outside the grid samples nothing.
    pub fn sample(
        &self,
        ground_truth: &OccupancyGrid,
        belief: &mut OccupancyGrid,
        center: GridCoord,
    ) -> SampleResult {
        let mut result = SampleResult::default();

        if !ground_truth.contains(center) {
            return result;
        }

        let r = self.range;
        let r_sq = i64::from(r) * i64::from(r);
        let last = ground_truth.side() as i32 - 1;

        // Only offsets that land inside the grid
        for dy in (-r).max(-center.y)..=r.min(last - center.y) {
            for dx in (-r).max(-center.x)..=r.min(last - center.x) {
                if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) > r_sq {
                    continue;
                }

                let coord = GridCoord::new(center.x + dx, center.y + dy);
                let Some(truth) = ground_truth.try_get(coord) else {
                    continue;
                };
                if truth == CellType::Unknown {
                    continue;
                }

                result.cells_sampled += 1;
                if truth.is_wall() {
                    result.cells_wall += 1;
                }
                if belief.set(coord, truth) {
                    result.cells_updated += 1;
                }
            }
        }

        trace!(
            "[Sensor] center=({}, {}) sampled={} updated={} walls={}",
            center.x,
            center.y,
            result.cells_sampled,
            result.cells_updated,
            result.cells_wall
        );

        result
    }
}
