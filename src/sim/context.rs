//! Simulation context: everything a tick reads or writes.

use serde::{Deserialize, Serialize};

use crate::core::{ContactVector, GridCoord, RobotPose};
use crate::grid::{OccupancyGrid, RangeSensor, SampleResult};
use crate::navigation::WallDetector;

/// The simulated robot: its pose and what it has mapped so far.
#[derive(Clone, Debug)]
pub struct Robot {
    /// Current pose
    pub pose: RobotPose,
    /// Belief grid, written only by the range sensor
    pub belief: OccupancyGrid,
}

/// Append-only list of corner positions, one per tick plus the start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<GridCoord>,
}

impl Trajectory {
    /// Trajectory starting at `start`.
    pub fn starting_at(start: GridCoord) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Append a position.
    pub fn push(&mut self, corner: GridCoord) {
        self.points.push(corner);
    }

    /// All recorded positions
    pub fn points(&self) -> &[GridCoord] {
        &self.points
    }

    /// Number of recorded positions
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// No positions recorded?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First recorded position
    pub fn first(&self) -> Option<GridCoord> {
        self.points.first().copied()
    }

    /// Last recorded position
    pub fn last(&self) -> Option<GridCoord> {
        self.points.last().copied()
    }
}

/// State shared by the navigation components during a run.
///
/// Passed explicitly to every component call; nothing is global.
#[derive(Clone, Debug)]
pub struct SimulationContext {
    /// Static ground truth
    pub ground_truth: OccupancyGrid,
    /// Robot pose and belief
    pub robot: Robot,
    /// Range sensor
    pub sensor: RangeSensor,
    /// Wall detector
    pub detector: WallDetector,
    /// Corner positions visited
    pub trajectory: Trajectory,
    /// Accumulated sensor statistics
    pub sampling: SampleResult,
}

impl SimulationContext {
    /// Create a context with an empty belief the size of the ground truth.
    pub fn new(
        ground_truth: OccupancyGrid,
        pose: RobotPose,
        sensor: RangeSensor,
        detector: WallDetector,
    ) -> Self {
        let belief = OccupancyGrid::new(ground_truth.side());
        Self {
            ground_truth,
            robot: Robot { pose, belief },
            sensor,
            detector,
            trajectory: Trajectory::starting_at(pose.corner()),
            sampling: SampleResult::default(),
        }
    }

    /// Grid side length
    #[inline]
    pub fn side(&self) -> usize {
        self.ground_truth.side()
    }

    /// Robot center
    #[inline]
    pub fn center(&self) -> GridCoord {
        self.robot.pose.center()
    }

    /// Sample ground truth around the robot into the belief grid.
    pub fn sense(&mut self) -> SampleResult {
        let result = self.sensor.sample(
            &self.ground_truth,
            &mut self.robot.belief,
            self.robot.pose.center(),
        );
        self.sampling.merge(&result);
        result
    }

    /// Detect walls around the robot in the current belief.
    pub fn detect(&self) -> ContactVector {
        self.detector.detect(&self.robot.belief, self.center())
    }

    /// Sample, then detect.
    pub fn sense_and_detect(&mut self) -> ContactVector {
        self.sense();
        self.detect()
    }

    /// Push the current corner onto the trajectory.
    pub fn record(&mut self) {
        self.trajectory.push(self.robot.pose.corner());
    }

    /// Is the robot center inside the grid?
    pub fn in_bounds(&self) -> bool {
        self.robot.pose.center_within(self.side())
    }
}
