//! Four-axis wall detection on the belief grid.
//!
//! Each axis is checked at `±tolerance` cells from the robot center. The
//! diagonal axes use `trunc(tolerance · sin 45°)` per coordinate so that
//! all checks sit at roughly the same distance.
//!
//! ```text
//!            anti_diagonal (+)
//!      diag (-)    vertical (-)    ·
//!              ·       ·       ·
//!  horizontal (-) ·    C    · horizontal (+)
//!              ·       ·       ·
//!  anti_diagonal (-)  vertical (+)  diag (+)
//! ```
//!
//! Every check is widened by a jitter window applied perpendicular to the
//! axis, so a one-cell gap in the belief does not hide a wall.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::core::{ContactVector, GridCoord, Sign};
use crate::grid::OccupancyGrid;

/// Default jitter offsets across each detection axis.
pub const DEFAULT_JITTER: [i32; 3] = [-3, 0, 3];

/// One detection axis: unit direction and the perpendicular jitter step.
#[derive(Clone, Copy, Debug)]
struct DetectionAxis {
    direction: GridCoord,
    perpendicular: GridCoord,
    diagonal: bool,
}

const HORIZONTAL: DetectionAxis = DetectionAxis {
    direction: GridCoord { x: 1, y: 0 },
    perpendicular: GridCoord { x: 0, y: 1 },
    diagonal: false,
};

const VERTICAL: DetectionAxis = DetectionAxis {
    direction: GridCoord { x: 0, y: 1 },
    perpendicular: GridCoord { x: 1, y: 0 },
    diagonal: false,
};

const DIAGONAL: DetectionAxis = DetectionAxis {
    direction: GridCoord { x: 1, y: 1 },
    perpendicular: GridCoord { x: 1, y: -1 },
    diagonal: true,
};

const ANTI_DIAGONAL: DetectionAxis = DetectionAxis {
    direction: GridCoord { x: 1, y: -1 },
    perpendicular: GridCoord { x: 1, y: 1 },
    diagonal: true,
};

/// Wall detector with a fixed reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallDetector {
    tolerance: i32,
    tolerance_45: i32,
    jitter: Vec<i32>,
}

impl WallDetector {
    /// Create a detector with the default jitter window.
    pub fn new(tolerance: i32) -> Self {
        Self::with_jitter(tolerance, DEFAULT_JITTER.to_vec())
    }

    /// Create a detector with a custom jitter window.
    ///
    /// An empty window is treated as `{0}`.
    pub fn with_jitter(tolerance: i32, mut jitter: Vec<i32>) -> Self {
        if jitter.is_empty() {
            jitter.push(0);
        }
        Self {
            tolerance,
            tolerance_45: (tolerance as f64 * FRAC_1_SQRT_2) as i32,
            jitter,
        }
    }

    /// Reach in cells
    #[inline]
    pub fn tolerance(&self) -> i32 {
        self.tolerance
    }

    /// Jitter offsets
    #[inline]
    pub fn jitter(&self) -> &[i32] {
        &self.jitter
    }

    /// Detect walls around `center` in the belief grid.
    pub fn detect(&self, belief: &OccupancyGrid, center: GridCoord) -> ContactVector {
        ContactVector::new(
            self.detect_axis(belief, center, HORIZONTAL),
            self.detect_axis(belief, center, VERTICAL),
            self.detect_axis(belief, center, DIAGONAL),
            self.detect_axis(belief, center, ANTI_DIAGONAL),
        )
    }

    /// True when no axis reports a wall.
    pub fn is_clear(&self, belief: &OccupancyGrid, center: GridCoord) -> bool {
        self.detect(belief, center).is_clear()
    }

    fn detect_axis(&self, belief: &OccupancyGrid, center: GridCoord, axis: DetectionAxis) -> Sign {
        let reach = if axis.diagonal {
            self.tolerance_45
        } else {
            self.tolerance
        };
        let offset = axis.direction * reach;

        // Positive side is checked first and wins ties
        if self.wall_near(belief, center + offset, axis.perpendicular) {
            Sign::Positive
        } else if self.wall_near(belief, center - offset, axis.perpendicular) {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn wall_near(&self, belief: &OccupancyGrid, at: GridCoord, perpendicular: GridCoord) -> bool {
        self.jitter
            .iter()
            .any(|&j| belief.is_wall(at + perpendicular * j))
    }
}
