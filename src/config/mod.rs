//! Unified configuration loading for Parikrama.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parikrama::config::ParikramaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = ParikramaConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = ParikramaConfig::default();
//!
//! let detector = config.wall_detector();
//! let thresholds = config.lap_thresholds();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Grid side length |
//! | [`RobotSection`] | Robot size and start corner |
//! | [`SensorSection`] | Sensor range, detector jitter and reach |
//! | [`EnvironmentSection`] | Wall layout ([`EnvironmentKind`]) |
//! | [`MotionSection`] | Clamp margin, move queue, sense toggling |
//! | [`LapSection`] | Loop-closure overrides |
//! | [`SweepSection`] | Band height, top barrier, clearance cap |
//! | [`RunSection`] | Controller variant and tick ceiling |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   side: 800
//! robot:
//!   width: 20
//!   height: 20
//!   start_x: 400
//!   start_y: 400
//! sensor:
//!   range: 50          # cells from the robot center
//!   jitter: [-3, 0, 3]
//! environment:
//!   kind: orthogonal   # orthogonal | orthogonal_with_offset | angled
//! lap:
//!   min_steps: 800     # optional, defaults per environment kind
//! run:
//!   controller: perimeter_sweep
//!   max_ticks: 7200
//! ```

mod defaults;
mod error;
mod navigation;
mod parikrama;
mod run;
mod sensor;
mod world;

// Re-export main types
pub use error::ConfigLoadError;
pub use parikrama::ParikramaConfig;

// Re-export section types
pub use navigation::{LapSection, MotionSection, SweepSection};
pub use run::{ControllerKind, RunSection};
pub use sensor::SensorSection;
pub use world::{EnvironmentKind, EnvironmentSection, GridSection, RobotSection};
