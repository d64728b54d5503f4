//! Robot pose on the integer grid.

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// Square robot body addressed by its top-left corner.
///
/// The derived center is `corner + radius` with `radius = width / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPose {
    /// Top-left corner x
    pub x: i32,
    /// Top-left corner y
    pub y: i32,
    /// Body width in cells
    pub width: i32,
    /// Body height in cells
    pub height: i32,
}

impl RobotPose {
    /// Create a pose from a corner and body size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Body radius (half the width).
    #[inline]
    pub fn radius(&self) -> i32 {
        self.width / 2
    }

    /// Top-left corner.
    #[inline]
    pub fn corner(&self) -> GridCoord {
        GridCoord::new(self.x, self.y)
    }

    /// Body center.
    #[inline]
    pub fn center(&self) -> GridCoord {
        let r = self.radius();
        GridCoord::new(self.x + r, self.y + r)
    }

    /// Move the corner to a new position.
    #[inline]
    pub fn set_corner(&mut self, corner: GridCoord) {
        self.x = corner.x;
        self.y = corner.y;
    }

    /// Is the center inside `[0, side)` on both axes?
    #[inline]
    pub fn center_within(&self, side: usize) -> bool {
        let c = self.center();
        let side = side as i32;
        c.x >= 0 && c.x < side && c.y >= 0 && c.y < side
    }
}
