//! Single-step motion with rotational sense and boundary clamping.
//!
//! A heading points from the robot towards the wall. The controller turns
//! it into a unit step along the wall tangent:
//!
//! | sense | dx | dy |
//! |-------|----|----|
//! | clockwise | `-sign(y)` | `+sign(x)` |
//! | counter-clockwise | `+sign(y)` | `-sign(x)` |
//!
//! A degenerate `(0, 0)` step is replaced by an escape step along x.
//!
//! Steps are staged in a short FIFO queue and clamped so the robot center
//! stays at least `radius + margin` away from every grid edge.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::core::{ContactVector, DirectionVector, GridCoord, RobotPose, RotationalSense};

/// Clamp region for the robot center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionBounds {
    /// Grid side length in cells
    pub side: i32,
    /// Extra clearance from the grid edge in cells
    pub margin: i32,
}

impl MotionBounds {
    /// Create bounds for a grid of `side` cells.
    pub fn new(side: usize, margin: i32) -> Self {
        Self {
            side: side as i32,
            margin,
        }
    }

    /// Allowed center range `[radius + margin, side - radius - margin]`.
    #[inline]
    pub fn center_range(&self, radius: i32) -> (i32, i32) {
        let lo = radius + self.margin;
        let hi = (self.side - radius - self.margin).max(lo);
        (lo, hi)
    }

    /// Clamp a corner position so its center lies inside the bounds.
    pub fn clamp_corner(&self, corner: GridCoord, radius: i32) -> GridCoord {
        let (lo, hi) = self.center_range(radius);
        GridCoord::new(
            (corner.x + radius).clamp(lo, hi) - radius,
            (corner.y + radius).clamp(lo, hi) - radius,
        )
    }

    /// Is a center coordinate inside `[0, side)` on both axes?
    #[inline]
    pub fn within_grid(&self, center: GridCoord) -> bool {
        center.x >= 0 && center.x < self.side && center.y >= 0 && center.y < self.side
    }
}

/// Turns headings into committed single-cell moves.
#[derive(Clone, Debug)]
pub struct MotionController {
    sense: RotationalSense,
    bounds: MotionBounds,
    queue_depth: usize,
    queue: VecDeque<GridCoord>,
}

impl MotionController {
    /// Create a controller.
    ///
    /// A queue depth of zero is treated as one.
    pub fn new(bounds: MotionBounds, queue_depth: usize, sense: RotationalSense) -> Self {
        let queue_depth = queue_depth.max(1);
        Self {
            sense,
            bounds,
            queue_depth,
            queue: VecDeque::with_capacity(queue_depth),
        }
    }

    /// Current rotational sense
    #[inline]
    pub fn sense(&self) -> RotationalSense {
        self.sense
    }

    /// Clamp region
    #[inline]
    pub fn bounds(&self) -> MotionBounds {
        self.bounds
    }

    /// Number of staged moves
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Unit displacement for a heading under the current sense.
    pub fn displacement(&self, direction: DirectionVector) -> GridCoord {
        let x = direction.x.value();
        let y = direction.y.value();
        let step = match self.sense {
            RotationalSense::Clockwise => GridCoord::new(-y, x),
            RotationalSense::CounterClockwise => GridCoord::new(y, -x),
        };
        if step == GridCoord::ZERO {
            GridCoord::new(self.sense.lateral_step(), 0)
        } else {
            step
        }
    }

    /// Move one step along `direction`.
    ///
    /// Refills the queue when it is empty, then commits the front entry if
    /// its center is inside the grid. Returns true when the pose changed.
    pub fn step(&mut self, pose: &mut RobotPose, direction: DirectionVector) -> bool {
        if self.queue.is_empty() {
            let delta = self.displacement(direction);
            let origin = pose.corner();
            let radius = pose.radius();
            for i in 1..=self.queue_depth as i32 {
                self.queue
                    .push_back(self.bounds.clamp_corner(origin + delta * i, radius));
            }
        }

        let Some(next) = self.queue.pop_front() else {
            return false;
        };
        self.commit(pose, next)
    }

    /// Apply a raw displacement through the clamp, bypassing the queue.
    ///
    /// Returns true when the pose changed.
    pub fn nudge(&self, pose: &mut RobotPose, dx: i32, dy: i32) -> bool {
        let target = self
            .bounds
            .clamp_corner(pose.corner() + GridCoord::new(dx, dy), pose.radius());
        self.commit(pose, target)
    }

    /// Drop all staged moves.
    pub fn flush(&mut self) {
        self.queue.clear();
    }

    /// Flip the rotational sense and drop staged moves.
    pub fn toggle_sense(&mut self) {
        self.sense = self.sense.toggled();
        self.flush();
        debug!("[Motion] sense toggled to {:?}", self.sense);
    }

    /// Toggle the sense when a step went from open space into contact.
    ///
    /// Returns true when the sense was toggled.
    pub fn observe_transition(&mut self, before: ContactVector, after: ContactVector) -> bool {
        if before.is_clear() && !after.is_clear() {
            self.toggle_sense();
            true
        } else {
            false
        }
    }

    fn commit(&self, pose: &mut RobotPose, corner: GridCoord) -> bool {
        let radius = pose.radius();
        let center = GridCoord::new(corner.x + radius, corner.y + radius);
        if !self.bounds.within_grid(center) {
            trace!("[Motion] rejected move to ({}, {})", corner.x, corner.y);
            return false;
        }
        let moved = pose.corner() != corner;
        pose.set_corner(corner);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sign;

    fn controller(sense: RotationalSense) -> MotionController {
        MotionController::new(MotionBounds::new(800, 10), 1, sense)
    }

    #[test]
    fn test_displacement_table() {
        let cw = controller(RotationalSense::Clockwise);
        let ccw = controller(RotationalSense::CounterClockwise);
        let right = DirectionVector::from_weights(1, 0);
        let below = DirectionVector::from_weights(0, 1);

        // Wall to the right: clockwise goes down, counter-clockwise up
        assert_eq!(cw.displacement(right), GridCoord::new(0, 1));
        assert_eq!(ccw.displacement(right), GridCoord::new(0, -1));
        // Wall below: clockwise goes left, counter-clockwise right
        assert_eq!(cw.displacement(below), GridCoord::new(-1, 0));
        assert_eq!(ccw.displacement(below), GridCoord::new(1, 0));
    }

    #[test]
    fn test_escape_on_zero_direction() {
        let cw = controller(RotationalSense::Clockwise);
        let ccw = controller(RotationalSense::CounterClockwise);
        assert_eq!(cw.displacement(DirectionVector::ZERO), GridCoord::new(-1, 0));
        assert_eq!(ccw.displacement(DirectionVector::ZERO), GridCoord::new(1, 0));
    }

    #[test]
    fn test_clamp_from_origin() {
        let mut motion = controller(RotationalSense::CounterClockwise);
        let mut pose = RobotPose::new(0, 0, 20, 20);

        motion.step(&mut pose, DirectionVector::new(Sign::Positive, Sign::Zero));
        assert_eq!(pose.corner(), GridCoord::new(10, 10));
        assert_eq!(pose.center(), GridCoord::new(20, 20));

        // Already at the minimum bound: unchanged
        let moved = motion.step(&mut pose, DirectionVector::new(Sign::Positive, Sign::Zero));
        assert!(!moved);
        assert_eq!(pose.corner(), GridCoord::new(10, 10));
    }

    #[test]
    fn test_clamp_max_bound() {
        let mut motion = controller(RotationalSense::Clockwise);
        let mut pose = RobotPose::new(770, 770, 20, 20);

        // Wall to the right, clockwise goes down
        motion.step(&mut pose, DirectionVector::from_weights(1, 0));
        let (_, hi) = motion.bounds().center_range(pose.radius());
        assert_eq!(hi, 780);
        assert_eq!(pose.center().y, 780);
    }

    #[test]
    fn test_queue_depth_stages_moves() {
        let mut motion =
            MotionController::new(MotionBounds::new(800, 10), 3, RotationalSense::Clockwise);
        let mut pose = RobotPose::new(100, 100, 20, 20);
        let below = DirectionVector::from_weights(0, 1);

        motion.step(&mut pose, below);
        assert_eq!(motion.pending(), 2);
        assert_eq!(pose.corner(), GridCoord::new(99, 100));

        // Staged moves are replayed even if the heading changes
        motion.step(&mut pose, DirectionVector::from_weights(1, 0));
        assert_eq!(pose.corner(), GridCoord::new(98, 100));

        motion.flush();
        assert_eq!(motion.pending(), 0);
    }

    #[test]
    fn test_toggle_flushes_queue() {
        let mut motion =
            MotionController::new(MotionBounds::new(800, 10), 2, RotationalSense::Clockwise);
        let mut pose = RobotPose::new(100, 100, 20, 20);
        motion.step(&mut pose, DirectionVector::GLIDE);
        assert_eq!(motion.pending(), 1);

        motion.toggle_sense();
        assert_eq!(motion.sense(), RotationalSense::CounterClockwise);
        assert_eq!(motion.pending(), 0);
    }

    #[test]
    fn test_observe_transition() {
        let mut motion = controller(RotationalSense::Clockwise);
        let hit = ContactVector::from_values([0, 1, 0, 0]);

        assert!(!motion.observe_transition(hit, hit));
        assert!(!motion.observe_transition(hit, ContactVector::CLEAR));
        assert!(!motion.observe_transition(ContactVector::CLEAR, ContactVector::CLEAR));
        assert!(motion.observe_transition(ContactVector::CLEAR, hit));
        assert_eq!(motion.sense(), RotationalSense::CounterClockwise);
    }

    #[test]
    fn test_nudge_is_clamped() {
        let motion = controller(RotationalSense::Clockwise);
        let mut pose = RobotPose::new(10, 300, 20, 20);

        assert!(!motion.nudge(&mut pose, -1, 0));
        assert!(motion.nudge(&mut pose, 1, 2));
        assert_eq!(pose.corner(), GridCoord::new(11, 302));
    }

    #[test]
    fn test_center_stays_in_bounds_for_any_sequence() {
        let mut motion = controller(RotationalSense::Clockwise);
        let mut pose = RobotPose::new(0, 790, 20, 20);
        let (lo, hi) = motion.bounds().center_range(pose.radius());

        for (i, direction) in [
            DirectionVector::from_weights(1, 1),
            DirectionVector::from_weights(-1, 0),
            DirectionVector::from_weights(0, -1),
            DirectionVector::ZERO,
        ]
        .into_iter()
        .cycle()
        .take(2000)
        .enumerate()
        {
            if i % 97 == 0 {
                motion.toggle_sense();
            }
            motion.step(&mut pose, direction);
            let c = pose.center();
            assert!(c.x >= lo && c.x <= hi && c.y >= lo && c.y <= hi);
        }
    }
}
