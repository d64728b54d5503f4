//! Perimeter lap detection and vertical extent tracking.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{ContactVector, GridCoord};

/// Loop-closure thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapThresholds {
    /// Steps after the first wall contact before a lap may close
    pub min_steps: u32,
    /// Squared distance from the start below which the lap closes
    pub max_distance_sq: i64,
}

impl LapThresholds {
    /// Rooms with orthogonal walls
    pub const ORTHOGONAL: LapThresholds = LapThresholds {
        min_steps: 800,
        max_distance_sq: 100,
    };

    /// Rooms with angled walls; diagonal stepping drifts further
    pub const ANGLED: LapThresholds = LapThresholds {
        min_steps: 600,
        max_distance_sq: 2500,
    };
}

/// Lap detector phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LapPhase {
    /// Waiting for the first wall contact
    Armed,
    /// Counting steps since the start position
    Tracking {
        /// Corner position at first contact
        start: GridCoord,
        /// Steps since the start was recorded
        steps: u32,
    },
    /// Lap closed; never fires again
    Closed,
}

/// One-shot perimeter completion detector.
#[derive(Clone, Debug)]
pub struct LapDetector {
    thresholds: LapThresholds,
    phase: LapPhase,
}

impl LapDetector {
    /// Create an armed detector.
    pub fn new(thresholds: LapThresholds) -> Self {
        Self {
            thresholds,
            phase: LapPhase::Armed,
        }
    }

    /// Feed the corner position and the contact sensed there.
    ///
    /// Returns true exactly once, on the step that closes the lap.
    pub fn update(&mut self, corner: GridCoord, contact: ContactVector) -> bool {
        match &mut self.phase {
            LapPhase::Armed => {
                if !contact.is_clear() {
                    self.phase = LapPhase::Tracking {
                        start: corner,
                        steps: 0,
                    };
                    info!("[Lap] start recorded at ({}, {})", corner.x, corner.y);
                }
                false
            }
            LapPhase::Tracking { start, steps } => {
                *steps += 1;
                let (start, steps) = (*start, *steps);
                let dist_sq = corner.distance_squared(&start);
                if steps > self.thresholds.min_steps && dist_sq < self.thresholds.max_distance_sq {
                    info!("[Lap] closed after {} steps (dist² = {})", steps, dist_sq);
                    self.phase = LapPhase::Closed;
                    return true;
                }
                false
            }
            LapPhase::Closed => false,
        }
    }

    /// Current phase
    pub fn phase(&self) -> LapPhase {
        self.phase
    }

    /// Position recorded at the first wall contact, if any.
    pub fn start(&self) -> Option<GridCoord> {
        match self.phase {
            LapPhase::Tracking { start, .. } => Some(start),
            _ => None,
        }
    }

    /// Has the lap closed?
    pub fn is_closed(&self) -> bool {
        self.phase == LapPhase::Closed
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> LapThresholds {
        self.thresholds
    }
}

/// Running min/max of the robot center's y coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalExtent {
    /// Smallest center y seen (starts at the grid side)
    pub min: i32,
    /// Largest center y seen (starts at 0)
    pub max: i32,
}

impl VerticalExtent {
    /// Empty extent for a grid of `side` cells.
    pub fn new(side: usize) -> Self {
        Self {
            min: side as i32,
            max: 0,
        }
    }

    /// Include a center y.
    #[inline]
    pub fn update(&mut self, center_y: i32) {
        self.min = self.min.min(center_y);
        self.max = self.max.max(center_y);
    }

    /// Has any sample been recorded?
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Height of the extent (0 when empty)
    pub fn span(&self) -> i32 {
        (self.max - self.min).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIT: ContactVector = ContactVector {
        horizontal: crate::core::Sign::Positive,
        ..ContactVector::CLEAR
    };

    fn small() -> LapThresholds {
        LapThresholds {
            min_steps: 5,
            max_distance_sq: 4,
        }
    }

    #[test]
    fn test_armed_until_first_contact() {
        let mut lap = LapDetector::new(small());

        for _ in 0..20 {
            assert!(!lap.update(GridCoord::new(3, 3), ContactVector::CLEAR));
        }
        assert_eq!(lap.phase(), LapPhase::Armed);

        assert!(!lap.update(GridCoord::new(3, 3), HIT));
        assert_eq!(lap.start(), Some(GridCoord::new(3, 3)));
    }

    #[test]
    fn test_closes_after_min_steps() {
        let mut lap = LapDetector::new(small());
        lap.update(GridCoord::new(0, 0), HIT);

        // Near the start but too early
        for _ in 0..5 {
            assert!(!lap.update(GridCoord::new(1, 0), HIT));
        }
        assert!(lap.update(GridCoord::new(1, 0), HIT));
        assert!(lap.is_closed());
    }

    #[test]
    fn test_one_shot() {
        let mut lap = LapDetector::new(small());
        lap.update(GridCoord::new(0, 0), HIT);

        let fired = (0..100)
            .filter(|_| lap.update(GridCoord::new(0, 1), ContactVector::CLEAR))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_far_from_start_never_closes() {
        let mut lap = LapDetector::new(small());
        lap.update(GridCoord::new(0, 0), HIT);

        for _ in 0..100 {
            assert!(!lap.update(GridCoord::new(2, 0), HIT));
        }
        assert_eq!(lap.start(), Some(GridCoord::new(0, 0)));
    }

    #[test]
    fn test_vertical_extent() {
        let mut extent = VerticalExtent::new(800);
        assert!(extent.is_empty());
        assert_eq!(extent.span(), 0);

        for y in [300, 120, 560, 400] {
            extent.update(y);
        }
        assert_eq!(extent.min, 120);
        assert_eq!(extent.max, 560);
        assert_eq!(extent.span(), 440);
    }
}
