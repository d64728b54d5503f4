//! Sensor configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Range sensor and wall detector settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorSection {
    /// Sensor range from the robot center (cells)
    #[serde(default = "defaults::sensor_range")]
    pub range: i32,

    /// Detector jitter offsets, applied perpendicular to each axis
    #[serde(default = "defaults::jitter")]
    pub jitter: Vec<i32>,

    /// Detector reach. Derived from the robot radius and the
    /// environment kind when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<i32>,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            range: 50,
            jitter: defaults::jitter(),
            tolerance: None,
        }
    }
}
