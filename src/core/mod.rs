//! Core types shared by the mapper and the navigation controllers.
//!
//! All coordinates are integer grid cells with `x` growing to the right
//! and `y` growing downwards.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices
//! - [`CellRect`]: Inclusive cell rectangle used by the environment builder
//!
//! ### Grid Cells
//! - [`CellType`]: Unknown / Free / Wall / Goal / Object
//!
//! ### Robot State
//! - [`RobotPose`]: Corner-addressed square body
//! - [`RotationalSense`]: Clockwise or counter-clockwise wall following
//!
//! ### Wall Contact
//! - [`Sign`]: Tri-state axis value
//! - [`ContactVector`]: Four-axis wall contact
//! - [`DirectionVector`]: Wall-relative heading

mod cell;
mod contact;
mod point;
mod pose;

pub use cell::CellType;
pub use contact::{ContactVector, DirectionVector, RotationalSense, Sign};
pub use point::{CellRect, GridCoord};
pub use pose::RobotPose;
