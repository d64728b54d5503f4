//! # Parikrama
//!
//! Wall-following occupancy mapper with band-sweep coverage for a simulated
//! square robot on an integer grid.
//!
//! ## Overview
//!
//! A robot with a bounded circular range sensor starts somewhere inside an
//! unknown environment. Each tick it samples the ground truth into its
//! belief grid, checks the belief grid for walls along four axes, and moves
//! one cell:
//!
//! 1. **Perimeter** - follow walls with a fixed rotational sense until the
//!    lap closes at the first wall contact
//! 2. **Sweep** - cover the interior in horizontal bands between the
//!    vertical extent recorded during the lap
//!
//! At the end the belief grid is scored against the ground truth.
//!
//! Cell codes:
//!
//! - **Unknown** (-1) - Never sampled
//! - **Free** (0) - Open floor
//! - **Wall** (1) - Wall, the only type the detector reacts to
//! - **Goal** (2) - Goal patch
//! - **Object** (3) - Free-standing obstacle
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parikrama::{CellRect, EnvironmentBuilder, ParikramaConfig, Simulation};
//!
//! let truth = EnvironmentBuilder::new(800)
//!     .room(CellRect::new(0, 0, 799, 799), 40)
//!     .build();
//!
//! let config = ParikramaConfig::default();
//! let report = Simulation::new(&config, truth).run();
//! println!("{}: {}", report.outcome, report.accuracy.summary());
//! ```
//!
//! ## Coordinate System
//!
//! - X: column, grows to the right
//! - Y: row, grows downward
//! - The robot is addressed by its top-left corner; center = corner + radius

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid storage, sensor and environment builder
pub mod grid;

// Detection, direction, motion, lap and sweep
pub mod navigation;

// Tick-driven simulation
pub mod sim;

// Mapping accuracy
pub mod evaluation;

// Grid tables, SVG and scenarios
pub mod io;

// Unified configuration
pub mod config;

// Re-export commonly used types
pub use core::{
    CellRect, CellType, ContactVector, DirectionVector, GridCoord, RobotPose, RotationalSense,
    Sign,
};

pub use grid::{EnvironmentBuilder, OccupancyGrid, RangeSensor};

pub use navigation::{
    DirectionResolver, LapDetector, MotionController, SweepController, WallDetector,
};

pub use sim::{RunOutcome, RunReport, Simulation, SimulationContext};

pub use evaluation::MappingAccuracy;

pub use config::{ConfigLoadError, EnvironmentKind, ParikramaConfig};

pub use io::{GridIoError, Scenario, ScenarioError, SvgRenderer};
