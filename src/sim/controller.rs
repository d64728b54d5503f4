//! Navigation variants.
//!
//! A variant is just a choice of which components get wired together:
//!
//! | Variant | Components |
//! |---------|------------|
//! | [`PerimeterSweep`] | WallFollower, LapDetector, VerticalExtent, SweepController |
//! | [`AxisFollow`](NavigationController::AxisFollow) | AxisFollower |

use log::{debug, info};

use crate::config::{ControllerKind, EnvironmentKind, ParikramaConfig, SweepSection};
use crate::core::ContactVector;
use crate::navigation::{
    AxisFollower, LapDetector, MotionBounds, MotionController, SweepController, SweepPhase,
    SweepStats, VerticalExtent, WallFollower,
};

use super::SimulationContext;

/// Wall-following lap followed by the band sweep.
#[derive(Clone, Debug)]
pub struct PerimeterSweep {
    follower: WallFollower,
    lap: LapDetector,
    extent: VerticalExtent,
    sweep: Option<SweepController>,
    kind: EnvironmentKind,
    sweep_config: SweepSection,
    contact_toggle: bool,
}

impl PerimeterSweep {
    /// Wire the perimeter-sweep components from a config.
    pub fn new(config: &ParikramaConfig, motion: MotionController, side: usize) -> Self {
        Self {
            follower: WallFollower::new(motion),
            lap: LapDetector::new(config.lap_thresholds()),
            extent: VerticalExtent::new(side),
            sweep: None,
            kind: config.environment.kind,
            sweep_config: config.sweep.clone(),
            contact_toggle: config.motion.perimeter_contact_toggle,
        }
    }

    /// Advance one tick. Returns true when the sweep is done.
    pub fn tick(&mut self, ctx: &mut SimulationContext, contact: ContactVector) -> bool {
        if let Some(sweep) = self.sweep.as_mut() {
            return sweep.tick(ctx, &mut self.follower, contact).is_terminal();
        }

        self.follower.step(&mut ctx.robot.pose, contact);
        self.extent.update(ctx.center().y);

        // Contact at the new pose, against the belief as it was before the move
        let after = ctx.detect();
        if self.contact_toggle {
            self.follower.motion_mut().observe_transition(contact, after);
        }

        if self.lap.update(ctx.robot.pose.corner(), after) {
            info!(
                "[Perimeter] lap closed, extent y {}..{}",
                self.extent.min, self.extent.max
            );
            self.sweep = Some(SweepController::new(
                self.extent,
                self.kind,
                self.sweep_config.clone(),
            ));
        }
        false
    }

    /// Wall follower
    pub fn follower(&self) -> &WallFollower {
        &self.follower
    }

    /// Lap detector
    pub fn lap(&self) -> &LapDetector {
        &self.lap
    }

    /// Vertical extent recorded during the lap
    pub fn extent(&self) -> VerticalExtent {
        self.extent
    }

    /// Sweep phase, once the sweep has started
    pub fn sweep_phase(&self) -> Option<SweepPhase> {
        self.sweep.as_ref().map(|s| s.phase())
    }

    /// Sweep counters, once the sweep has started
    pub fn sweep_stats(&self) -> Option<SweepStats> {
        self.sweep.as_ref().map(|s| s.stats())
    }

    /// The sweep itself, once the lap has closed
    pub fn sweep(&self) -> Option<&SweepController> {
        self.sweep.as_ref()
    }
}

/// Navigation variant driving a run.
#[derive(Clone, Debug)]
pub enum NavigationController {
    /// Lap then band sweep
    PerimeterSweep(PerimeterSweep),
    /// Two-axis follower without termination
    AxisFollow(AxisFollower),
}

impl NavigationController {
    /// Build the variant selected in the config.
    pub fn from_config(config: &ParikramaConfig, side: usize) -> Self {
        let motion = MotionController::new(
            MotionBounds::new(side, config.motion.margin),
            config.motion.queue_depth,
            config.motion.initial_sense,
        );
        debug!("[Controller] using {}", config.run.controller.name());
        match config.run.controller {
            ControllerKind::PerimeterSweep => {
                NavigationController::PerimeterSweep(PerimeterSweep::new(config, motion, side))
            }
            ControllerKind::AxisFollow => NavigationController::AxisFollow(AxisFollower::new(motion)),
        }
    }

    /// Advance one tick. Returns true when the variant reached its terminal state.
    pub fn tick(&mut self, ctx: &mut SimulationContext, contact: ContactVector) -> bool {
        match self {
            NavigationController::PerimeterSweep(p) => p.tick(ctx, contact),
            NavigationController::AxisFollow(a) => {
                a.step(&mut ctx.robot.pose, contact);
                false
            }
        }
    }

    /// Has the perimeter lap closed?
    pub fn lap_closed(&self) -> bool {
        match self {
            NavigationController::PerimeterSweep(p) => p.lap().is_closed(),
            NavigationController::AxisFollow(_) => false,
        }
    }

    /// Lap and sweep state of the perimeter variant
    pub fn perimeter(&self) -> Option<&PerimeterSweep> {
        match self {
            NavigationController::PerimeterSweep(p) => Some(p),
            NavigationController::AxisFollow(_) => None,
        }
    }

    /// Sweep counters, if a sweep ran
    pub fn sweep_stats(&self) -> Option<SweepStats> {
        match self {
            NavigationController::PerimeterSweep(p) => p.sweep_stats(),
            NavigationController::AxisFollow(_) => None,
        }
    }

    /// Phase name for logging
    pub fn phase_name(&self) -> &'static str {
        match self {
            NavigationController::PerimeterSweep(p) => match p.sweep_phase() {
                Some(phase) => phase.name(),
                None => "Perimeter",
            },
            NavigationController::AxisFollow(_) => "AxisFollow",
        }
    }
}
