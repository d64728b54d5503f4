//! Two-axis wall follower.
//!
//! Looks only at the horizontal and vertical contacts and picks a unit
//! move from a fixed table. It has no memory and no lap detection, so a
//! run using it ends at the iteration ceiling.
//!
//! | horizontal \ vertical | top | none | bottom |
//! |-----------------------|-----|------|--------|
//! | right | down | down | left |
//! | none | right | left | left |
//! | left | right | up | up |

use crate::core::{ContactVector, GridCoord, RobotPose, Sign};

use super::MotionController;

const UP: GridCoord = GridCoord { x: 0, y: -1 };
const DOWN: GridCoord = GridCoord { x: 0, y: 1 };
const LEFT: GridCoord = GridCoord { x: -1, y: 0 };
const RIGHT: GridCoord = GridCoord { x: 1, y: 0 };

/// Table-driven follower using two contact axes.
#[derive(Clone, Debug)]
pub struct AxisFollower {
    motion: MotionController,
}

impl AxisFollower {
    /// Create a follower. Only the clamp of `motion` is used.
    pub fn new(motion: MotionController) -> Self {
        Self { motion }
    }

    /// Unit move for a contact vector.
    pub fn displacement(contact: ContactVector) -> GridCoord {
        use Sign::{Negative, Positive, Zero};

        match (contact.horizontal, contact.vertical) {
            (Positive, Negative) | (Positive, Zero) => DOWN,
            (Positive, Positive) => LEFT,
            (Zero, Negative) => RIGHT,
            (Zero, Zero) | (Zero, Positive) => LEFT,
            (Negative, Negative) => RIGHT,
            (Negative, Zero) | (Negative, Positive) => UP,
        }
    }

    /// Take one step. Returns true when the pose changed.
    pub fn step(&mut self, pose: &mut RobotPose, contact: ContactVector) -> bool {
        let delta = Self::displacement(contact);
        self.motion.nudge(pose, delta.x, delta.y)
    }

    /// Motion controller
    pub fn motion(&self) -> &MotionController {
        &self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RotationalSense;
    use crate::navigation::MotionBounds;

    #[test]
    fn test_table() {
        let d = |h, v| AxisFollower::displacement(ContactVector::from_values([h, v, 0, 0]));

        assert_eq!(d(1, -1), DOWN);
        assert_eq!(d(1, 0), DOWN);
        assert_eq!(d(1, 1), LEFT);
        assert_eq!(d(0, -1), RIGHT);
        assert_eq!(d(0, 0), LEFT);
        assert_eq!(d(0, 1), LEFT);
        assert_eq!(d(-1, -1), RIGHT);
        assert_eq!(d(-1, 0), UP);
        assert_eq!(d(-1, 1), UP);
    }

    #[test]
    fn test_diagonals_ignored() {
        let contact = ContactVector::from_values([0, 0, 1, -1]);
        assert_eq!(AxisFollower::displacement(contact), LEFT);
    }

    #[test]
    fn test_step_is_clamped() {
        let motion = MotionController::new(MotionBounds::new(100, 10), 1, RotationalSense::Clockwise);
        let mut follower = AxisFollower::new(motion);
        let mut pose = RobotPose::new(10, 50, 20, 20);

        assert!(!follower.step(&mut pose, ContactVector::CLEAR));
        assert_eq!(pose.corner(), GridCoord::new(10, 50));

        assert!(follower.step(&mut pose, ContactVector::from_values([-1, 0, 0, 0])));
        assert_eq!(pose.corner(), GridCoord::new(10, 49));
    }
}
