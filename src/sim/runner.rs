//! Tick-driven simulation loop.
//!
//! ## Tick order
//!
//! 1. Sample ground truth into the belief grid
//! 2. Detect walls
//! 3. Run the navigation variant (lap or sweep logic)
//! 4. Record the pose on the trajectory
//! 5. Terminal state, bounds and tick ceiling checks

use log::{debug, info, warn};

use crate::config::ParikramaConfig;
use crate::core::RobotPose;
use crate::evaluation::MappingAccuracy;
use crate::grid::OccupancyGrid;

use super::{NavigationController, RunOutcome, RunReport, SimulationContext};

/// A single robot run over a ground-truth grid.
#[derive(Clone, Debug)]
pub struct Simulation {
    ctx: SimulationContext,
    controller: NavigationController,
    max_ticks: u32,
    ticks: u32,
    outcome: Option<RunOutcome>,
}

impl Simulation {
    /// Build a run from a config, starting at the configured pose.
    pub fn new(config: &ParikramaConfig, ground_truth: OccupancyGrid) -> Self {
        let start = config.robot.start_pose();
        Self::with_start(config, ground_truth, start)
    }

    /// Build a run from a config with an explicit start pose.
    pub fn with_start(
        config: &ParikramaConfig,
        ground_truth: OccupancyGrid,
        start: RobotPose,
    ) -> Self {
        let side = ground_truth.side();
        if side != config.grid.side {
            warn!(
                "[Sim] ground truth side {} overrides configured side {}",
                side, config.grid.side
            );
        }

        let ctx = SimulationContext::new(
            ground_truth,
            start,
            config.range_sensor(),
            config.wall_detector(),
        );

        info!(
            "[Sim] start ({}, {}) on {}x{} grid, {} / {}, tolerance {}",
            start.x,
            start.y,
            side,
            side,
            config.run.controller.name(),
            config.environment.kind.name(),
            ctx.detector.tolerance()
        );

        Self {
            ctx,
            controller: NavigationController::from_config(config, side),
            max_ticks: config.run.max_ticks,
            ticks: 0,
            outcome: None,
        }
    }

    /// Run one tick. Returns the outcome once the run has ended.
    pub fn step(&mut self) -> Option<RunOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        self.ticks += 1;

        let contact = self.ctx.sense_and_detect();
        let done = self.controller.tick(&mut self.ctx, contact);
        self.ctx.record();

        let pose = self.ctx.robot.pose;
        let outcome = if done {
            Some(RunOutcome::Completed)
        } else if !self.ctx.in_bounds() {
            Some(RunOutcome::OutOfBounds {
                x: pose.x,
                y: pose.y,
            })
        } else if self.ticks >= self.max_ticks {
            Some(RunOutcome::IterationCeiling { ticks: self.ticks })
        } else {
            None
        };

        if self.ticks.is_multiple_of(500) {
            debug!(
                "[Sim] tick {} phase {} pose ({}, {})",
                self.ticks,
                self.controller.phase_name(),
                pose.x,
                pose.y
            );
        }

        if let Some(outcome) = outcome {
            info!("[Sim] run ended after {} ticks: {}", self.ticks, outcome);
        }
        self.outcome = outcome;
        outcome
    }

    /// Run until the outcome is decided, then score the map.
    pub fn run(&mut self) -> RunReport {
        let outcome = loop {
            if let Some(outcome) = self.step() {
                break outcome;
            }
        };

        let accuracy = MappingAccuracy::score(&self.ctx.robot.belief, &self.ctx.ground_truth);
        info!("[Sim] accuracy: {}", accuracy.summary());

        RunReport {
            outcome,
            ticks: self.ticks,
            trajectory_len: self.ctx.trajectory.len(),
            lap_closed: self.controller.lap_closed(),
            sweep: self.controller.sweep_stats(),
            sampling: self.ctx.sampling,
            accuracy,
        }
    }

    /// Simulation context
    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    /// Navigation variant
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Ticks executed so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Outcome, once decided
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    /// Consume the run and keep the context (belief, trajectory).
    pub fn into_context(self) -> SimulationContext {
        self.ctx
    }
}
