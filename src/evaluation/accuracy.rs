//! Mapping accuracy against ground truth.
//!
//! ## Metrics
//!
//! - **Wall ratio**: fraction of ground-truth wall cells that the belief
//!   also marks as wall.
//! - **Full ratio**: fraction of enclosed cells whose belief matches ground
//!   truth exactly. A cell is enclosed when no 4-connected path of non-wall
//!   cells links it to the grid border, so the wall ring itself counts.
//!
//! An empty denominator scores 1.0.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::grid::OccupancyGrid;

/// Belief-vs-ground-truth comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingAccuracy {
    /// Matched walls / ground-truth walls
    pub wall_ratio: f32,

    /// Matched enclosed cells / enclosed cells
    pub full_ratio: f32,

    /// Ground-truth wall cells
    pub walls_total: usize,

    /// Cells that are wall in both grids
    pub walls_matched: usize,

    /// Enclosed cells
    pub enclosed_total: usize,

    /// Enclosed cells where belief equals ground truth
    pub enclosed_matched: usize,
}

impl MappingAccuracy {
    /// Score a belief grid against ground truth.
    ///
    /// Belief cells are looked up by coordinate, so a smaller belief grid
    /// reads Unknown where it has no cells.
    pub fn score(belief: &OccupancyGrid, ground_truth: &OccupancyGrid) -> Self {
        let enclosed = enclosed_mask(ground_truth);

        let mut walls_total = 0;
        let mut walls_matched = 0;
        let mut enclosed_total = 0;
        let mut enclosed_matched = 0;

        for (i, (coord, truth)) in ground_truth.iter().enumerate() {
            let seen = belief.get(coord);

            if truth.is_wall() {
                walls_total += 1;
                if seen.is_wall() {
                    walls_matched += 1;
                }
            }

            if enclosed[i] {
                enclosed_total += 1;
                if seen == truth {
                    enclosed_matched += 1;
                }
            }
        }

        Self {
            wall_ratio: ratio(walls_matched, walls_total),
            full_ratio: ratio(enclosed_matched, enclosed_total),
            walls_total,
            walls_matched,
            enclosed_total,
            enclosed_matched,
        }
    }

    /// Format as a single-line summary.
    pub fn summary(&self) -> String {
        format!(
            "walls {:.2}% ({}/{}), environment {:.2}% ({}/{})",
            self.wall_ratio * 100.0,
            self.walls_matched,
            self.walls_total,
            self.full_ratio * 100.0,
            self.enclosed_matched,
            self.enclosed_total
        )
    }
}

fn ratio(matched: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        matched as f32 / total as f32
    }
}

/// Mark cells not reachable from the border through non-wall cells.
fn enclosed_mask(grid: &OccupancyGrid) -> Vec<bool> {
    let side = grid.side() as i32;
    let mut outside = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();

    let border = (0..side).flat_map(|i| {
        [
            GridCoord::new(i, 0),
            GridCoord::new(i, side - 1),
            GridCoord::new(0, i),
            GridCoord::new(side - 1, i),
        ]
    });

    for coord in border {
        if let Some(idx) = grid.index(coord)
            && !outside[idx]
            && !grid.get(coord).is_wall()
        {
            outside[idx] = true;
            queue.push_back(coord);
        }
    }

    while let Some(coord) = queue.pop_front() {
        for next in coord.neighbors_4() {
            if let Some(idx) = grid.index(next)
                && !outside[idx]
                && !grid.get(next).is_wall()
            {
                outside[idx] = true;
                queue.push_back(next);
            }
        }
    }

    outside.into_iter().map(|o| !o).collect()
}
