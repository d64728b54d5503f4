//! Integer grid coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Grid coordinates (integer cell indices)
///
/// `x` grows to the right, `y` grows downwards, matching the row-major
/// layout of exported grid tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Origin coordinate
    pub const ZERO: GridCoord = GridCoord { x: 0, y: 0 };

    /// Squared Euclidean distance (exact in integers)
    #[inline]
    pub fn distance_squared(&self, other: &GridCoord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Get the 4 cardinal neighbors (up, right, down, left)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1),
            GridCoord::new(self.x + 1, self.y),
            GridCoord::new(self.x, self.y + 1),
            GridCoord::new(self.x - 1, self.y),
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for GridCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i32) -> Self {
        GridCoord::new(self.x * k, self.y * k)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord::new(x, y)
    }
}

/// Axis-aligned cell rectangle, inclusive on both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    /// Left column
    pub x0: i32,
    /// Top row
    pub y0: i32,
    /// Right column (inclusive)
    pub x1: i32,
    /// Bottom row (inclusive)
    pub y1: i32,
}

impl CellRect {
    /// Create a rectangle from two corners in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Does the rectangle contain this coordinate?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.x0 && coord.x <= self.x1 && coord.y >= self.y0 && coord.y <= self.y1
    }

    /// Cells between `coord` and the nearest edge, 0 on the border.
    ///
    /// Negative outside the rectangle.
    #[inline]
    pub fn border_distance(&self, coord: GridCoord) -> i32 {
        (coord.x - self.x0)
            .min(self.x1 - coord.x)
            .min(coord.y - self.y0)
            .min(self.y1 - coord.y)
    }

    /// Iterate every cell of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (self.y0..=self.y1).flat_map(move |y| (self.x0..=self.x1).map(move |x| GridCoord::new(x, y)))
    }
}
