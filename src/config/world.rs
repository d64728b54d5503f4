//! Grid, robot and environment sections.

use serde::{Deserialize, Serialize};

use crate::core::RobotPose;
use crate::navigation::LapThresholds;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Side length of the square grid (cells)
    #[serde(default = "defaults::grid_side")]
    pub side: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self { side: 800 }
    }
}

/// Robot geometry and start pose
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotSection {
    /// Body width (cells)
    #[serde(default = "defaults::robot_size")]
    pub width: i32,

    /// Body height (cells)
    #[serde(default = "defaults::robot_size")]
    pub height: i32,

    /// Start corner x
    #[serde(default = "defaults::start_x")]
    pub start_x: i32,

    /// Start corner y
    #[serde(default = "defaults::start_y")]
    pub start_y: i32,
}

impl Default for RobotSection {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            start_x: 400,
            start_y: 400,
        }
    }
}

impl RobotSection {
    /// Start pose
    pub fn start_pose(&self) -> RobotPose {
        RobotPose::new(self.start_x, self.start_y, self.width, self.height)
    }

    /// Body radius
    pub fn radius(&self) -> i32 {
        self.width / 2
    }
}

/// Wall layout of the environment.
///
/// Layouts differ in how far the detector reaches, in the loop-closure
/// thresholds and in the corrections the sweep needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentKind {
    /// Axis-aligned walls
    #[default]
    Orthogonal,
    /// Axis-aligned walls with offset corners
    OrthogonalWithOffset,
    /// Angled walls
    Angled,
}

impl EnvironmentKind {
    /// Name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EnvironmentKind::Orthogonal => "orthogonal",
            EnvironmentKind::OrthogonalWithOffset => "orthogonal_with_offset",
            EnvironmentKind::Angled => "angled",
        }
    }

    /// Detector reach beyond the robot radius
    pub fn detection_margin(&self) -> i32 {
        match self {
            EnvironmentKind::Orthogonal => 7,
            EnvironmentKind::OrthogonalWithOffset => 12,
            EnvironmentKind::Angled => 14,
        }
    }

    /// Default loop-closure thresholds
    pub fn lap_thresholds(&self) -> LapThresholds {
        match self {
            EnvironmentKind::Orthogonal | EnvironmentKind::OrthogonalWithOffset => {
                LapThresholds::ORTHOGONAL
            }
            EnvironmentKind::Angled => LapThresholds::ANGLED,
        }
    }

    /// Does the sweep push the robot off the top of the extent?
    pub fn has_top_barrier(&self) -> bool {
        matches!(
            self,
            EnvironmentKind::OrthogonalWithOffset | EnvironmentKind::Angled
        )
    }

    /// Early stop margin above the extent bottom.
    ///
    /// `None` means the sweep runs to the bottom and descends the rest of
    /// the way.
    pub fn stop_margin(&self, angled_margin: i32) -> Option<i32> {
        match self {
            EnvironmentKind::Angled => Some(angled_margin),
            _ => None,
        }
    }
}

/// Environment section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSection {
    /// Wall layout
    #[serde(default)]
    pub kind: EnvironmentKind,
}
