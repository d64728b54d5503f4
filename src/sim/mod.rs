//! Simulation driver.
//!
//! ## Overview
//!
//! [`SimulationContext`] owns everything a tick touches: the ground truth,
//! the robot record (pose + belief grid), the sensor, the detector and the
//! trajectory. [`Simulation`] drives one [`NavigationController`] over that
//! context until it reaches its terminal state, leaves the grid, or hits the
//! tick ceiling, then scores the belief grid.
//!
//! ```rust,ignore
//! use parikrama::config::ParikramaConfig;
//! use parikrama::sim::Simulation;
//!
//! let config = ParikramaConfig::load_default()?;
//! let mut sim = Simulation::new(&config, ground_truth);
//! let report = sim.run();
//! println!("{} {}", report.outcome, report.accuracy.summary());
//! ```

mod context;
mod controller;
mod outcome;
mod runner;

pub use context::{Robot, SimulationContext, Trajectory};
pub use controller::{NavigationController, PerimeterSweep};
pub use outcome::{RunOutcome, RunReport};
pub use runner::Simulation;
