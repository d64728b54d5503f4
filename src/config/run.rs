//! Run section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which navigation variant drives the robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerKind {
    /// Wall-following lap followed by the band sweep
    #[default]
    PerimeterSweep,
    /// Two-axis table follower, runs until the tick ceiling
    AxisFollow,
}

impl ControllerKind {
    /// Name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ControllerKind::PerimeterSweep => "perimeter_sweep",
            ControllerKind::AxisFollow => "axis_follow",
        }
    }
}

/// Run settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSection {
    /// Navigation variant
    #[serde(default)]
    pub controller: ControllerKind,

    /// Hard tick ceiling
    #[serde(default = "defaults::max_ticks")]
    pub max_ticks: u32,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            controller: ControllerKind::PerimeterSweep,
            max_ticks: 7200,
        }
    }
}
