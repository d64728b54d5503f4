//! Wall following and coverage navigation.
//!
//! ## Pipeline
//!
//! ```text
//! belief grid ─► WallDetector ─► ContactVector
//!                                   │
//!            ┌──────────────────────┴──────────────────────┐
//!            ▼                                             ▼
//!   DirectionResolver ─► MotionController ─► pose    AxisFollower ─► pose
//!   (WallFollower)            │
//!            ├─► LapDetector + VerticalExtent (perimeter phase)
//!            └─► SweepController (after the lap closes)
//! ```
//!
//! All components are plain values driven once per tick by the simulation.
//! None of them touch the grid except through the context they are given.

mod axis_follower;
mod detector;
mod follower;
mod lap;
mod motion;
mod resolver;
mod sweep;

pub use axis_follower::AxisFollower;
pub use detector::{DEFAULT_JITTER, WallDetector};
pub use follower::{FollowStep, WallFollower};
pub use lap::{LapDetector, LapPhase, LapThresholds, VerticalExtent};
pub use motion::{MotionBounds, MotionController};
pub use resolver::{DirectionResolver, Resolution};
pub use sweep::{BandStart, SweepController, SweepPhase, SweepStats};
