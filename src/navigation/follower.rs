//! Wall following: direction resolution wired to the motion controller.

use log::trace;

use crate::core::{ContactVector, DirectionVector, RobotPose};

use super::{DirectionResolver, MotionController};

/// Outcome of one wall-following step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowStep {
    /// Heading used for the step
    pub direction: DirectionVector,
    /// Contact differed from the previous step (queue flushed)
    pub contact_changed: bool,
    /// Pose changed
    pub moved: bool,
}

/// Follows walls one cell per step.
///
/// The heading is resolved every step. The move queue is flushed only when
/// the contact vector changes, otherwise staged moves keep going.
#[derive(Clone, Debug)]
pub struct WallFollower {
    resolver: DirectionResolver,
    motion: MotionController,
}

impl WallFollower {
    /// Create a follower around a motion controller.
    pub fn new(motion: MotionController) -> Self {
        Self {
            resolver: DirectionResolver::new(),
            motion,
        }
    }

    /// Take one step given the contact sensed at the current pose.
    pub fn step(&mut self, pose: &mut RobotPose, contact: ContactVector) -> FollowStep {
        let resolution = self.resolver.update(contact);
        if resolution.changed {
            self.motion.flush();
            trace!(
                "[Follower] contact {} -> heading {}",
                contact, resolution.direction
            );
        }

        let moved = self.motion.step(pose, resolution.direction);

        FollowStep {
            direction: resolution.direction,
            contact_changed: resolution.changed,
            moved,
        }
    }

    /// Direction resolver
    pub fn resolver(&self) -> &DirectionResolver {
        &self.resolver
    }

    /// Motion controller
    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    /// Mutable motion controller (sense toggles, nudges)
    pub fn motion_mut(&mut self) -> &mut MotionController {
        &mut self.motion
    }
}
