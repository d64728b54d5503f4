//! I/O: grid tables, SVG audit output and scenario files.
//!
//! | Module | Format | Direction |
//! |--------|--------|-----------|
//! | `csv` | comma separated cell codes, one row per line | read + write |
//! | `svg` | belief grid + trajectory + start pose | write |
//! | `scenario` | YAML environment + start + config overrides | read |

mod csv;
mod scenario;
mod svg;

pub use csv::{GridIoError, load_grid_csv, read_grid_csv, save_grid_csv, write_grid_csv};
pub use scenario::{EnvironmentSpec, Scenario, ScenarioError, Shape, StartCorner};
pub use svg::{SvgColorScheme, SvgConfig, SvgRenderer};
