//! Scenario YAML parsing.
//!
//! A scenario describes one run:
//! - The environment (grid side, layout kind, list of shapes)
//! - The start corner of the robot
//! - Config overrides (any subset of [`ParikramaConfig`] sections)
//! - Whether to write the SVG audit file

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{EnvironmentKind, ParikramaConfig};
use crate::core::{CellRect, GridCoord};
use crate::grid::{EnvironmentBuilder, OccupancyGrid};

/// A run scenario loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Ground-truth layout
    pub environment: EnvironmentSpec,

    /// Start corner (None = configured start)
    #[serde(default)]
    pub start: Option<StartCorner>,

    /// Config overrides
    #[serde(default)]
    pub config: ParikramaConfig,

    /// Write the SVG audit file after the run
    #[serde(default)]
    pub visualize: bool,
}

/// Ground-truth layout of a scenario
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    /// Grid side length
    pub side: usize,

    /// Layout kind (tunes detector, lap and sweep)
    #[serde(default)]
    pub kind: EnvironmentKind,

    /// Shapes, applied in order
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// Start corner of the robot body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartCorner {
    /// Corner x
    pub x: i32,
    /// Corner y
    pub y: i32,
}

/// A ground-truth shape. Rectangles are `[x0, y0, x1, y1]`, inclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Wall band along the inside of `rect`, everything outside becomes
    /// Unknown
    Room {
        /// Outer rectangle
        rect: [i32; 4],
        /// Wall thickness in cells
        #[serde(default = "default_thickness")]
        thickness: i32,
    },
    /// Solid wall rectangle
    Wall {
        /// Filled rectangle
        rect: [i32; 4],
    },
    /// Obstacle object
    Block {
        /// Filled rectangle
        rect: [i32; 4],
    },
    /// Goal patch
    Goal {
        /// Filled rectangle
        rect: [i32; 4],
    },
    /// Thick straight wall
    Segment {
        /// Start cell `[x, y]`
        from: [i32; 2],
        /// End cell `[x, y]`
        to: [i32; 2],
        /// Brush width in cells
        #[serde(default = "default_thickness")]
        thickness: i32,
    },
}

impl Shape {
    /// Name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Room { .. } => "room",
            Shape::Wall { .. } => "wall",
            Shape::Block { .. } => "block",
            Shape::Goal { .. } => "goal",
            Shape::Segment { .. } => "segment",
        }
    }

    fn apply(&self, builder: EnvironmentBuilder) -> EnvironmentBuilder {
        match *self {
            Shape::Room { rect, thickness } => builder.room(to_rect(rect), thickness),
            Shape::Wall { rect } => builder.wall_rect(to_rect(rect)),
            Shape::Block { rect } => builder.block(to_rect(rect)),
            Shape::Goal { rect } => builder.goal(to_rect(rect)),
            Shape::Segment {
                from,
                to,
                thickness,
            } => builder.segment(
                GridCoord::new(from[0], from[1]),
                GridCoord::new(to[0], to[1]),
                thickness,
            ),
        }
    }

    fn validate(&self, side: i32) -> Result<(), String> {
        let inside = |x: i32, y: i32| x >= 0 && y >= 0 && x < side && y < side;
        let thick_enough = |thickness: i32| {
            if thickness < 1 {
                Err(format!("{} thickness must be >= 1, got {}", self.name(), thickness))
            } else {
                Ok(())
            }
        };
        match *self {
            Shape::Room { rect, thickness } => {
                if !inside(rect[0], rect[1]) || !inside(rect[2], rect[3]) {
                    return Err(format!("room {:?} is outside the grid", rect));
                }
                thick_enough(thickness)?;
            }
            Shape::Wall { rect } | Shape::Block { rect } | Shape::Goal { rect } => {
                if !inside(rect[0], rect[1]) || !inside(rect[2], rect[3]) {
                    return Err(format!("{} {:?} is outside the grid", self.name(), rect));
                }
            }
            Shape::Segment {
                from,
                to,
                thickness,
            } => {
                if !inside(from[0], from[1]) || !inside(to[0], to[1]) {
                    return Err(format!("segment {:?}-{:?} is outside the grid", from, to));
                }
                thick_enough(thickness)?;
            }
        }
        Ok(())
    }
}

fn to_rect(r: [i32; 4]) -> CellRect {
    CellRect::new(r[0], r[1], r[2], r[3])
}

fn default_thickness() -> i32 {
    1
}

/// Errors from scenario loading
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// I/O error reading file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Scenario does not describe a runnable setup
    #[error("Invalid scenario: {0}")]
    Invalid(String),
}

impl Scenario {
    /// Load scenario from YAML file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check the environment and the merged config.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let side = self.environment.side;
        if side == 0 {
            return Err(ScenarioError::Invalid("environment.side must be positive".into()));
        }
        for shape in &self.environment.shapes {
            shape.validate(side as i32).map_err(ScenarioError::Invalid)?;
        }
        self.to_config().map(|_| ())
    }

    /// Rasterize the shapes into a ground-truth grid.
    pub fn build_ground_truth(&self) -> OccupancyGrid {
        self.environment
            .shapes
            .iter()
            .fold(EnvironmentBuilder::new(self.environment.side), |b, s| {
                s.apply(b)
            })
            .build()
    }

    /// Config with the scenario's environment and start applied.
    pub fn to_config(&self) -> Result<ParikramaConfig, ScenarioError> {
        let mut config = self.config.clone();
        config.grid.side = self.environment.side;
        config.environment.kind = self.environment.kind;
        if let Some(start) = self.start {
            config.robot.start_x = start.x;
            config.robot.start_y = start.y;
        }

        config
            .validate()
            .map_err(|e| ScenarioError::Invalid(e.to_string()))?;

        let pose = config.robot.start_pose();
        if !pose.center_within(config.grid.side) {
            return Err(ScenarioError::Invalid(format!(
                "start ({}, {}) puts the robot center outside the grid",
                pose.x, pose.y
            )));
        }
        Ok(config)
    }

    /// File stem derived from the scenario name
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }
}
