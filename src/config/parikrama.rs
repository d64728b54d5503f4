//! Main ParikramaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::RangeSensor;
use crate::navigation::{LapThresholds, WallDetector};

use super::error::ConfigLoadError;
use super::navigation::{LapSection, MotionSection, SweepSection};
use super::run::RunSection;
use super::sensor::SensorSection;
use super::world::{EnvironmentSection, GridSection, RobotSection};

/// Full simulation configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParikramaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Robot geometry and start pose
    #[serde(default)]
    pub robot: RobotSection,

    /// Range sensor and detector
    #[serde(default)]
    pub sensor: SensorSection,

    /// Environment layout
    #[serde(default)]
    pub environment: EnvironmentSection,

    /// Motion controller
    #[serde(default)]
    pub motion: MotionSection,

    /// Loop-closure overrides
    #[serde(default)]
    pub lap: LapSection,

    /// Band sweep
    #[serde(default)]
    pub sweep: SweepSection,

    /// Run settings
    #[serde(default)]
    pub run: RunSection,
}

impl ParikramaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that the values describe a runnable simulation.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let invalid = |msg: String| Err(ConfigLoadError::Invalid(msg));
        let side = self.grid.side as i32;

        if self.grid.side == 0 {
            return invalid("grid.side must be positive".into());
        }
        if self.robot.width <= 0 || self.robot.height <= 0 {
            return invalid(format!(
                "robot size must be positive, got {}x{}",
                self.robot.width, self.robot.height
            ));
        }
        if self.robot.width + 2 * self.motion.margin > side {
            return invalid(format!(
                "robot width {} with margin {} does not fit a grid of side {}",
                self.robot.width, self.motion.margin, side
            ));
        }
        if self.sensor.range < 0 || self.sensor.range > side {
            return invalid(format!(
                "sensor.range must be in 0..={}, got {}",
                side, self.sensor.range
            ));
        }
        if self.sensor.jitter.is_empty() {
            return invalid("sensor.jitter must not be empty".into());
        }
        if self.motion.queue_depth == 0 {
            return invalid("motion.queue_depth must be at least 1".into());
        }
        if self.sweep.band_height <= 0 {
            return invalid(format!(
                "sweep.band_height must be positive, got {}",
                self.sweep.band_height
            ));
        }
        if self.run.max_ticks == 0 {
            return invalid("run.max_ticks must be positive".into());
        }
        Ok(())
    }

    /// Detector reach
    pub fn detection_tolerance(&self) -> i32 {
        self.sensor
            .tolerance
            .unwrap_or_else(|| self.robot.radius() + self.environment.kind.detection_margin())
    }

    /// Loop-closure thresholds after overrides
    pub fn lap_thresholds(&self) -> LapThresholds {
        self.lap.resolve(self.environment.kind.lap_thresholds())
    }

    /// Build the range sensor
    pub fn range_sensor(&self) -> RangeSensor {
        RangeSensor::new(self.sensor.range)
    }

    /// Build the wall detector
    pub fn wall_detector(&self) -> WallDetector {
        WallDetector::with_jitter(self.detection_tolerance(), self.sensor.jitter.clone())
    }
}
