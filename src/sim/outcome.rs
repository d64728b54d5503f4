//! Run outcomes and the end-of-run report.

use serde::{Deserialize, Serialize};

use crate::evaluation::MappingAccuracy;
use crate::grid::SampleResult;
use crate::navigation::SweepStats;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Sweep reached its terminal phase
    Completed,
    /// Robot center left the grid
    OutOfBounds {
        /// Corner x at termination
        x: i32,
        /// Corner y at termination
        y: i32,
    },
    /// Tick ceiling hit before a terminal state
    IterationCeiling {
        /// Ticks executed
        ticks: u32,
    },
}

impl RunOutcome {
    /// Did the run reach its terminal state?
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }

    /// Name for logging
    pub fn name(&self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::OutOfBounds { .. } => "out_of_bounds",
            RunOutcome::IterationCeiling { .. } => "iteration_ceiling",
        }
    }

    /// Numeric status code (0 on success)
    pub fn code(&self) -> i32 {
        match self {
            RunOutcome::Completed => 0,
            RunOutcome::OutOfBounds { .. } => 1,
            RunOutcome::IterationCeiling { .. } => 2,
        }
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Completed => write!(f, "completed"),
            RunOutcome::OutOfBounds { x, y } => write!(f, "out of bounds at ({}, {})", x, y),
            RunOutcome::IterationCeiling { ticks } => {
                write!(f, "no solution after {} ticks", ticks)
            }
        }
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// How the run ended
    pub outcome: RunOutcome,
    /// Ticks executed
    pub ticks: u32,
    /// Trajectory length (start included)
    pub trajectory_len: usize,
    /// Did the perimeter lap close?
    pub lap_closed: bool,
    /// Sweep counters, when the sweep started
    pub sweep: Option<SweepStats>,
    /// Accumulated sensor statistics
    pub sampling: SampleResult,
    /// Mapping accuracy at termination
    pub accuracy: MappingAccuracy,
}
