//! Motion, lap and sweep sections.

use serde::{Deserialize, Serialize};

use crate::core::RotationalSense;
use crate::navigation::LapThresholds;

use super::defaults;

/// Motion controller settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSection {
    /// Clearance kept between the robot body and the grid edge (cells)
    #[serde(default = "defaults::motion_margin")]
    pub margin: i32,

    /// Moves staged per queue refill
    #[serde(default = "defaults::queue_depth")]
    pub queue_depth: usize,

    /// Starting rotational sense
    #[serde(default)]
    pub initial_sense: RotationalSense,

    /// Toggle the sense on open-to-contact transitions during the lap
    #[serde(default)]
    pub perimeter_contact_toggle: bool,
}

impl Default for MotionSection {
    fn default() -> Self {
        Self {
            margin: 10,
            queue_depth: 1,
            initial_sense: RotationalSense::Clockwise,
            perimeter_contact_toggle: false,
        }
    }
}

/// Loop-closure overrides. Unset values come from the environment kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LapSection {
    /// Minimum steps after first contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_steps: Option<u32>,

    /// Squared closing distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance_sq: Option<i64>,
}

impl LapSection {
    /// Apply overrides on top of `base`.
    pub fn resolve(&self, base: LapThresholds) -> LapThresholds {
        LapThresholds {
            min_steps: self.min_steps.unwrap_or(base.min_steps),
            max_distance_sq: self.max_distance_sq.unwrap_or(base.max_distance_sq),
        }
    }
}

/// Band sweep settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSection {
    /// Rows per band
    #[serde(default = "defaults::band_height")]
    pub band_height: i32,

    /// Distance below the extent top that triggers the barrier push
    #[serde(default = "defaults::top_barrier_margin")]
    pub top_barrier_margin: f32,

    /// Rows pushed down by the top barrier
    #[serde(default = "defaults::top_barrier_push")]
    pub top_barrier_push: i32,

    /// Stop margin above the extent bottom for angled rooms
    #[serde(default = "defaults::angled_stop_margin")]
    pub angled_stop_margin: i32,

    /// Cap on lateral steps per clearance maneuver
    #[serde(default = "defaults::max_clearance_steps")]
    pub max_clearance_steps: u32,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            band_height: 50,
            top_barrier_margin: 0.5,
            top_barrier_push: 2,
            angled_stop_margin: 5,
            max_clearance_steps: 800,
        }
    }
}
