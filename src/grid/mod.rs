//! Occupancy grids and the range sensor that fills them.
//!
//! ## Components
//!
//! | Type | Role |
//! |------|------|
//! | [`OccupancyGrid`] | Square row-major grid of [`CellType`](crate::core::CellType) |
//! | [`RangeSensor`] | Copies ground truth into the belief grid inside a disk |
//! | [`EnvironmentBuilder`] | Builds ground-truth rooms from shapes |
//! | [`BresenhamLine`] | Line rasterizer used for angled walls |
//!
//! The same grid type serves as ground truth and as belief. Belief starts
//! all Unknown and only the sensor writes to it.

mod builder;
mod raster;
mod sensor;
mod storage;

pub use builder::EnvironmentBuilder;
pub use raster::{BresenhamLine, thick_line};
pub use sensor::{RangeSensor, SampleResult};
pub use storage::{CellCounts, OccupancyGrid};
