//! Band-sweep coverage after the perimeter lap.
//!
//! ## State machine
//!
//! ```text
//! ┌─────────────┐ center_y <= extent.min ┌───────────┐ center_y reaches max ┌──────┐
//! │ ReturnToTop │───────────────────────►│ BandSweep │─────────────────────►│ Done │
//! └─────────────┘                        └───────────┘                      └──────┘
//! ```
//!
//! - **ReturnToTop**: follow walls until the center reaches the top of the
//!   extent recorded during the lap.
//! - **BandSweep**: follow walls with sense toggling. Every `band_height`
//!   rows the robot first slides sideways until it is clear of all walls,
//!   so each band starts in open space. Ends at the bottom of the extent, or
//!   earlier once the robot rests on a floor in the last band.
//! - **Done**: terminal.
//!
//! On layouts with a top barrier, a step that climbs into the barrier is
//! pushed back down and reverses the sense, so the follower heads down the
//! wall it was climbing instead of bouncing against the top.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{EnvironmentKind, SweepSection};
use crate::core::{ContactVector, RotationalSense, Sign};
use crate::sim::SimulationContext;

use super::{VerticalExtent, WallFollower};

/// Sweep phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepPhase {
    /// Following walls back to the top of the extent
    ReturnToTop,
    /// Sweeping downwards in bands
    BandSweep {
        /// Center y where the current band started
        y_reference: i32,
    },
    /// Sweep finished
    Done,
}

impl SweepPhase {
    /// Is this a terminal phase?
    pub fn is_terminal(&self) -> bool {
        matches!(self, SweepPhase::Done)
    }

    /// Phase name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SweepPhase::ReturnToTop => "ReturnToTop",
            SweepPhase::BandSweep { .. } => "BandSweep",
            SweepPhase::Done => "Done",
        }
    }
}

/// Counters kept across the sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepStats {
    /// Bands started
    pub bands: u32,
    /// Lateral clearance steps taken
    pub clearance_steps: u32,
    /// Clearance maneuvers stopped by the step cap
    pub clearance_capped: u32,
    /// Top barrier pushes applied
    pub barrier_pushes: u32,
    /// Barrier pushes that also reversed the sense
    pub barrier_turns: u32,
    /// Sense toggles triggered by entering contact
    pub sense_toggles: u32,
    /// Cells stepped during the final descent
    pub descent_steps: u32,
}

/// Where and how a band started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStart {
    /// Center y at the start of the band
    pub y_reference: i32,
    /// Rotational sense the band started with
    pub sense: RotationalSense,
}

/// Coverage sweep controller.
#[derive(Clone, Debug)]
pub struct SweepController {
    phase: SweepPhase,
    extent: VerticalExtent,
    kind: EnvironmentKind,
    config: SweepSection,
    stats: SweepStats,
    bands: Vec<BandStart>,
}

impl SweepController {
    /// Start a sweep over the extent recorded during the lap.
    pub fn new(extent: VerticalExtent, kind: EnvironmentKind, config: SweepSection) -> Self {
        info!(
            "[Sweep] starting: extent y {}..{} ({})",
            extent.min,
            extent.max,
            kind.name()
        );
        Self {
            phase: SweepPhase::ReturnToTop,
            extent,
            kind,
            config,
            stats: SweepStats::default(),
            bands: Vec::new(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    /// Extent being swept
    pub fn extent(&self) -> VerticalExtent {
        self.extent
    }

    /// Sweep counters
    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    /// Bands started so far, in order
    pub fn bands(&self) -> &[BandStart] {
        &self.bands
    }

    fn start_band(&mut self, y_reference: i32, sense: RotationalSense) {
        self.stats.bands += 1;
        self.bands.push(BandStart { y_reference, sense });
        debug!(
            "[Sweep] band {} at y {} ({:?})",
            self.stats.bands, y_reference, sense
        );
    }

    /// Advance one tick.
    ///
    /// `contact` is the contact sensed at the start of the tick.
    pub fn tick(
        &mut self,
        ctx: &mut SimulationContext,
        follower: &mut WallFollower,
        contact: ContactVector,
    ) -> SweepPhase {
        let next = match self.phase {
            SweepPhase::ReturnToTop => self.return_to_top(ctx, follower, contact),
            SweepPhase::BandSweep { y_reference } => {
                self.band_sweep(ctx, follower, contact, y_reference)
            }
            SweepPhase::Done => SweepPhase::Done,
        };

        if next.name() != self.phase.name() {
            debug!("[Sweep] {} -> {}", self.phase.name(), next.name());
        }
        self.phase = next;
        next
    }

    fn return_to_top(
        &mut self,
        ctx: &mut SimulationContext,
        follower: &mut WallFollower,
        contact: ContactVector,
    ) -> SweepPhase {
        let center_y = ctx.center().y;
        if center_y <= self.extent.min {
            self.start_band(center_y, follower.motion().sense());
            return SweepPhase::BandSweep {
                y_reference: center_y,
            };
        }
        follower.step(&mut ctx.robot.pose, contact);
        SweepPhase::ReturnToTop
    }

    fn band_sweep(
        &mut self,
        ctx: &mut SimulationContext,
        follower: &mut WallFollower,
        mut contact: ContactVector,
        mut y_reference: i32,
    ) -> SweepPhase {
        // New band: slide off any wall first
        let center_y = ctx.center().y;
        if center_y >= y_reference + self.config.band_height {
            y_reference = center_y;
            self.start_band(center_y, follower.motion().sense());
            self.clear_walls(ctx, follower);
            contact = ctx.detect();
        }

        let before = contact;
        let y_before = ctx.center().y;
        follower.step(&mut ctx.robot.pose, before);

        if self.kind.has_top_barrier() {
            self.top_barrier(ctx, follower, y_before);
        }

        let after = ctx.sense_and_detect();
        if follower.motion_mut().observe_transition(before, after) {
            self.stats.sense_toggles += 1;
        }

        let center_y = ctx.center().y;
        let on_floor = after.vertical == Sign::Positive
            && center_y >= self.extent.max - self.config.band_height;
        match self.kind.stop_margin(self.config.angled_stop_margin) {
            Some(margin) => {
                if center_y >= self.extent.max - margin || on_floor {
                    return SweepPhase::Done;
                }
            }
            None => {
                if center_y >= self.extent.max || on_floor {
                    self.descend(ctx, follower);
                    return SweepPhase::Done;
                }
            }
        }

        SweepPhase::BandSweep { y_reference }
    }

    /// Push the robot down when it reaches the top of the extent.
    ///
    /// A step that climbed into the barrier also reverses the sense.
    fn top_barrier(
        &mut self,
        ctx: &mut SimulationContext,
        follower: &mut WallFollower,
        y_before: i32,
    ) {
        let center_y = ctx.center().y;
        if center_y as f32 > self.extent.min as f32 + self.config.top_barrier_margin {
            return;
        }

        follower
            .motion()
            .nudge(&mut ctx.robot.pose, 0, self.config.top_barrier_push);
        ctx.sense();
        self.stats.barrier_pushes += 1;

        if center_y < y_before {
            follower.motion_mut().toggle_sense();
            self.stats.barrier_turns += 1;
        }
    }

    /// Step sideways until the detector reports no walls.
    fn clear_walls(&mut self, ctx: &mut SimulationContext, follower: &WallFollower) {
        let lateral = follower.motion().sense().lateral_step();
        let mut steps = 0;
        while !ctx.detect().is_clear() {
            if steps >= self.config.max_clearance_steps {
                warn!(
                    "[Sweep] clearance stopped after {} steps at ({}, {})",
                    steps, ctx.robot.pose.x, ctx.robot.pose.y
                );
                self.stats.clearance_capped += 1;
                break;
            }
            follower.motion().nudge(&mut ctx.robot.pose, lateral, 0);
            ctx.sense();
            steps += 1;
        }
        self.stats.clearance_steps += steps;
    }

    /// Step straight down until the center reaches the bottom of the extent.
    fn descend(&mut self, ctx: &mut SimulationContext, follower: &WallFollower) {
        while ctx.center().y < self.extent.max {
            if !follower.motion().nudge(&mut ctx.robot.pose, 0, 1) {
                break;
            }
            ctx.sense();
            ctx.record();
            self.stats.descent_steps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellRect, RobotPose, RotationalSense};
    use crate::grid::{EnvironmentBuilder, RangeSensor};
    use crate::navigation::{MotionBounds, MotionController, WallDetector};

    fn context(start: (i32, i32)) -> SimulationContext {
        context_with(
            start,
            EnvironmentBuilder::new(200).room(CellRect::new(5, 5, 194, 194), 1),
        )
    }

    /// Room with a thick wall filling x = 180..194.
    fn thick_wall_context(start: (i32, i32)) -> SimulationContext {
        context_with(
            start,
            EnvironmentBuilder::new(200)
                .room(CellRect::new(5, 5, 194, 194), 1)
                .wall_rect(CellRect::new(180, 5, 194, 194)),
        )
    }

    fn context_with(start: (i32, i32), builder: EnvironmentBuilder) -> SimulationContext {
        let truth = builder.build();
        SimulationContext::new(
            truth,
            RobotPose::new(start.0, start.1, 20, 20),
            RangeSensor::new(50),
            WallDetector::new(17),
        )
    }

    fn follower() -> WallFollower {
        follower_with(RotationalSense::Clockwise)
    }

    fn follower_with(sense: RotationalSense) -> WallFollower {
        WallFollower::new(MotionController::new(MotionBounds::new(200, 10), 1, sense))
    }

    fn run_ticks(
        sweep: &mut SweepController,
        ctx: &mut SimulationContext,
        follower: &mut WallFollower,
        ticks: usize,
    ) {
        for _ in 0..ticks {
            let contact = ctx.sense_and_detect();
            if sweep.tick(ctx, follower, contact).is_terminal() {
                break;
            }
        }
    }

    fn extent(min: i32, max: i32) -> VerticalExtent {
        VerticalExtent { min, max }
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(SweepPhase::ReturnToTop.name(), "ReturnToTop");
        assert!(!SweepPhase::BandSweep { y_reference: 0 }.is_terminal());
        assert!(SweepPhase::Done.is_terminal());
    }

    #[test]
    fn test_reaching_top_starts_band_without_moving() {
        let mut ctx = context((80, 40));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(50, 170),
            EnvironmentKind::Orthogonal,
            SweepSection::default(),
        );

        let contact = ctx.sense_and_detect();
        let phase = sweep.tick(&mut ctx, &mut follower, contact);

        assert_eq!(phase, SweepPhase::BandSweep { y_reference: 50 });
        assert_eq!(ctx.robot.pose.corner().y, 40);
    }

    #[test]
    fn test_return_to_top_follows_walls() {
        let mut ctx = context((80, 100));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(20, 170),
            EnvironmentKind::Orthogonal,
            SweepSection::default(),
        );

        let before = ctx.robot.pose;
        let contact = ctx.sense_and_detect();
        let phase = sweep.tick(&mut ctx, &mut follower, contact);

        assert_eq!(phase, SweepPhase::ReturnToTop);
        assert_ne!(ctx.robot.pose, before);
    }

    #[test]
    fn test_angled_stops_near_bottom() {
        let mut ctx = context((80, 150));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(20, 163),
            EnvironmentKind::Angled,
            SweepSection::default(),
        );
        sweep.phase = SweepPhase::BandSweep { y_reference: 150 };

        let contact = ctx.sense_and_detect();
        let phase = sweep.tick(&mut ctx, &mut follower, contact);

        assert!(phase.is_terminal());
        assert_eq!(sweep.stats().descent_steps, 0);
    }

    #[test]
    fn test_orthogonal_descends_to_max() {
        let mut ctx = context((80, 160));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(20, 160),
            EnvironmentKind::Orthogonal,
            SweepSection::default(),
        );
        sweep.phase = SweepPhase::BandSweep { y_reference: 160 };

        let contact = ctx.sense_and_detect();
        let phase = sweep.tick(&mut ctx, &mut follower, contact);

        assert!(phase.is_terminal());
        assert!(ctx.center().y >= 160);
    }

    #[test]
    fn test_clearance_slides_off_walls() {
        // Start against the thick wall, one band below the reference
        let mut ctx = thick_wall_context((160, 100));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(20, 180),
            EnvironmentKind::Orthogonal,
            SweepSection::default(),
        );
        sweep.phase = SweepPhase::BandSweep { y_reference: 50 };

        let contact = ctx.sense_and_detect();
        assert!(!contact.is_clear());
        sweep.tick(&mut ctx, &mut follower, contact);

        // Center x 170 -> 162, where the right check leaves the wall
        assert_eq!(sweep.stats().clearance_steps, 8);
        assert_eq!(sweep.stats().clearance_capped, 0);
        assert!(ctx.robot.pose.x < 160);
    }

    #[test]
    fn test_clearance_cap() {
        let mut ctx = thick_wall_context((160, 100));
        let mut follower = follower();
        let config = SweepSection {
            max_clearance_steps: 2,
            ..SweepSection::default()
        };
        let mut sweep = SweepController::new(extent(20, 180), EnvironmentKind::Orthogonal, config);
        sweep.phase = SweepPhase::BandSweep { y_reference: 50 };

        let contact = ctx.sense_and_detect();
        sweep.tick(&mut ctx, &mut follower, contact);

        assert_eq!(sweep.stats().clearance_steps, 2);
        assert_eq!(sweep.stats().clearance_capped, 1);
    }

    #[test]
    fn test_climbing_into_top_barrier_turns_back() {
        // Counter-clockwise against the thick wall heads up, into the top
        let mut ctx = thick_wall_context((155, 51));
        let mut follower = follower_with(RotationalSense::CounterClockwise);
        let mut sweep = SweepController::new(
            extent(60, 180),
            EnvironmentKind::OrthogonalWithOffset,
            SweepSection::default(),
        );
        sweep.phase = SweepPhase::BandSweep { y_reference: 60 };

        run_ticks(&mut sweep, &mut ctx, &mut follower, 60);

        let stats = sweep.stats();
        assert_eq!(stats.barrier_pushes, 1);
        assert_eq!(stats.barrier_turns, 1);
        assert_eq!(stats.bands, 1);
        assert_eq!(sweep.bands()[0].y_reference, 110);
        assert_eq!(sweep.bands()[0].sense, RotationalSense::Clockwise);
    }

    #[test]
    fn test_running_along_top_is_pushed_without_turning() {
        let mut ctx = context((80, 50));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(60, 180),
            EnvironmentKind::Angled,
            SweepSection::default(),
        );
        sweep.phase = SweepPhase::BandSweep { y_reference: 60 };

        // Open floor: the glide step is sideways, so the push does not turn
        run_ticks(&mut sweep, &mut ctx, &mut follower, 1);

        assert_eq!(sweep.stats().barrier_pushes, 1);
        assert_eq!(sweep.stats().barrier_turns, 0);
        assert_eq!(ctx.center().y, 62);
        assert_eq!(follower.motion().sense(), RotationalSense::Clockwise);
    }

    #[test]
    fn test_sweep_ends_on_floor_above_extent_bottom() {
        // Bottom wall at y = 194 holds the center at 177, the lap got lower
        let mut ctx = context((90, 167));
        let mut follower = follower();
        let mut sweep = SweepController::new(
            extent(20, 180),
            EnvironmentKind::Orthogonal,
            SweepSection::default(),
        );
        sweep.phase = SweepPhase::BandSweep { y_reference: 150 };

        let contact = ctx.sense_and_detect();
        assert_eq!(contact, ContactVector::from_values([0, 1, 0, 0]));
        let phase = sweep.tick(&mut ctx, &mut follower, contact);

        assert!(phase.is_terminal());
        assert_eq!(sweep.stats().descent_steps, 3);
        assert_eq!(ctx.center().y, 180);
    }
}
