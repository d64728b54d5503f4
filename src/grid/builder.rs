//! Deterministic ground-truth environment builder.
//!
//! Builds rooms out of simple shapes. Every call writes cells in order, so
//! later shapes overwrite earlier ones.
//!
//! ```rust,ignore
//! use parikrama::core::{CellRect, GridCoord};
//! use parikrama::grid::EnvironmentBuilder;
//!
//! let truth = EnvironmentBuilder::new(200)
//!     .room(CellRect::new(0, 0, 199, 199), 40)
//!     .block(CellRect::new(80, 80, 110, 110))
//!     .segment(GridCoord::new(10, 60), GridCoord::new(60, 10), 3)
//!     .build();
//! ```
//!
//! Walls should be thicker than the detector reach. A check that lands
//! past a thin wall reads Unknown or floor, and the follower walks through.

use log::debug;

use crate::core::{CellRect, CellType, GridCoord};

use super::OccupancyGrid;
use super::raster::thick_line;

/// Builder for ground-truth grids.
#[derive(Clone, Debug)]
pub struct EnvironmentBuilder {
    grid: OccupancyGrid,
}

impl EnvironmentBuilder {
    /// Start from a grid of `side × side` Free cells.
    pub fn new(side: usize) -> Self {
        Self {
            grid: OccupancyGrid::filled(side, CellType::Free),
        }
    }

    /// Draw a wall band `thickness` cells wide along the inside of `rect`
    /// and mark everything outside it Unknown.
    pub fn room(mut self, rect: CellRect, thickness: i32) -> Self {
        let thickness = thickness.max(1);
        for i in 0..self.grid.cell_count() {
            let coord = self.grid.coord_of(i);
            if !rect.contains(coord) {
                self.grid.set(coord, CellType::Unknown);
            } else if rect.border_distance(coord) < thickness {
                self.grid.set(coord, CellType::Wall);
            }
        }
        debug!(
            "[Builder] room ({}, {})-({}, {}), walls {}",
            rect.x0, rect.y0, rect.x1, rect.y1, thickness
        );
        self
    }

    /// Fill a rectangle with Wall.
    pub fn wall_rect(mut self, rect: CellRect) -> Self {
        self.grid.fill_rect(rect, CellType::Wall);
        self
    }

    /// Fill a rectangle with Object.
    pub fn block(mut self, rect: CellRect) -> Self {
        self.grid.fill_rect(rect, CellType::Object);
        self
    }

    /// Fill a rectangle with Goal.
    pub fn goal(mut self, rect: CellRect) -> Self {
        self.grid.fill_rect(rect, CellType::Goal);
        self
    }

    /// Rasterize a straight wall of the given thickness (angled walls).
    pub fn segment(mut self, from: GridCoord, to: GridCoord, thickness: i32) -> Self {
        for coord in thick_line(from, to, thickness) {
            self.grid.set(coord, CellType::Wall);
        }
        self
    }

    /// Finish and return the ground-truth grid.
    pub fn build(self) -> OccupancyGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_border_and_outside() {
        let grid = EnvironmentBuilder::new(20)
            .room(CellRect::new(2, 2, 17, 17), 1)
            .build();

        assert_eq!(grid.get(GridCoord::new(0, 0)), CellType::Unknown);
        assert_eq!(grid.get(GridCoord::new(2, 2)), CellType::Wall);
        assert_eq!(grid.get(GridCoord::new(17, 10)), CellType::Wall);
        assert_eq!(grid.get(GridCoord::new(10, 10)), CellType::Free);

        let counts = grid.count_by_type();
        // Border of a 16x16 square
        assert_eq!(counts.wall, 4 * 16 - 4);
        assert_eq!(counts.free, 14 * 14);
    }

    #[test]
    fn test_thick_room_walls() {
        let grid = EnvironmentBuilder::new(100)
            .room(CellRect::new(0, 0, 99, 99), 40)
            .build();

        assert!(grid.is_wall(GridCoord::new(39, 50)));
        assert!(grid.is_wall(GridCoord::new(60, 60)));
        assert_eq!(grid.get(GridCoord::new(40, 40)), CellType::Free);
        assert_eq!(grid.get(GridCoord::new(59, 59)), CellType::Free);

        let counts = grid.count_by_type();
        assert_eq!(counts.free, 20 * 20);
        assert_eq!(counts.unknown, 0);
    }

    #[test]
    fn test_shapes_overwrite_in_order() {
        let grid = EnvironmentBuilder::new(30)
            .block(CellRect::new(5, 5, 10, 10))
            .goal(CellRect::new(8, 8, 12, 12))
            .build();

        assert_eq!(grid.get(GridCoord::new(6, 6)), CellType::Object);
        assert_eq!(grid.get(GridCoord::new(9, 9)), CellType::Goal);
        assert_eq!(grid.get(GridCoord::new(12, 12)), CellType::Goal);
    }

    #[test]
    fn test_angled_segment() {
        let grid = EnvironmentBuilder::new(30)
            .segment(GridCoord::new(0, 0), GridCoord::new(20, 20), 1)
            .build();

        for i in 0..=20 {
            assert!(grid.is_wall(GridCoord::new(i, i)));
        }
        assert_eq!(grid.count_by_type().wall, 21);
    }

    #[test]
    fn test_wall_rect_clipped() {
        let grid = EnvironmentBuilder::new(10)
            .wall_rect(CellRect::new(-5, 0, 0, 9))
            .build();
        assert_eq!(grid.count_by_type().wall, 10);
    }
}
