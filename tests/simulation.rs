//! End-to-end simulation tests.
//!
//! These check properties that hold for any run, whatever the layout:
//! belief soundness, clamped motion, trajectory bookkeeping and
//! reproducibility.

mod common;

use parikrama::config::{ControllerKind, EnvironmentKind};
use parikrama::io::Scenario;
use parikrama::navigation::MotionBounds;
use parikrama::sim::{RunOutcome, Simulation};

const SIDE: usize = 200;

#[test]
fn test_runs_are_reproducible() {
    let config = common::config(SIDE, (60, 120), 2500);

    let (report_a, ctx_a) = common::run(&config, common::room_with_block(SIDE, 10));
    let (report_b, ctx_b) = common::run(&config, common::room_with_block(SIDE, 10));

    assert_eq!(report_a.outcome, report_b.outcome);
    assert_eq!(report_a.ticks, report_b.ticks);
    assert_eq!(report_a.accuracy, report_b.accuracy);
    assert_eq!(ctx_a.trajectory, ctx_b.trajectory);
    assert_eq!(ctx_a.robot.belief, ctx_b.robot.belief);
}

#[test]
fn test_belief_is_sound_for_every_variant() {
    for controller in [ControllerKind::PerimeterSweep, ControllerKind::AxisFollow] {
        let config =
            common::config_with(SIDE, (80, 80), 1500, controller, EnvironmentKind::Orthogonal);
        let (_, ctx) = common::run(&config, common::room_with_block(SIDE, 10));

        for (coord, seen) in ctx.robot.belief.iter() {
            if seen.is_known() {
                assert_eq!(
                    seen,
                    ctx.ground_truth.get(coord),
                    "{} wrote a wrong cell at {:?}",
                    controller.name(),
                    coord
                );
            }
        }
    }
}

#[test]
fn test_sampling_counts_match_belief() {
    let config = common::config(SIDE, (80, 80), 800);
    let (report, ctx) = common::run(&config, common::room(SIDE, 10));

    assert_eq!(
        report.sampling.cells_updated,
        ctx.robot.belief.count_by_type().known()
    );
    assert!(report.sampling.cells_wall > 0);
}

#[test]
fn test_trajectory_bookkeeping() {
    for kind in [
        EnvironmentKind::Orthogonal,
        EnvironmentKind::OrthogonalWithOffset,
        EnvironmentKind::Angled,
    ] {
        let config = common::config_with(
            SIDE,
            (60, 60),
            3000,
            ControllerKind::PerimeterSweep,
            kind,
        );
        let (report, ctx) = common::run(&config, common::room(SIDE, 10));

        let descent = report.sweep.map_or(0, |s| s.descent_steps as usize);
        assert_eq!(report.trajectory_len, report.ticks as usize + 1 + descent);
        assert_eq!(ctx.trajectory.len(), report.trajectory_len);
        assert_eq!(
            ctx.trajectory.first(),
            Some(config.robot.start_pose().corner())
        );
    }
}

#[test]
fn test_motion_never_leaves_clamp() {
    let config = common::config(SIDE, (60, 60), 3000);
    let (report, ctx) = common::run(&config, common::room_with_block(SIDE, 10));

    assert!(!matches!(report.outcome, RunOutcome::OutOfBounds { .. }));

    let radius = config.robot.radius();
    let (lo, hi) = MotionBounds::new(SIDE, config.motion.margin).center_range(radius);
    for corner in ctx.trajectory.points().iter().skip(1) {
        let (cx, cy) = (corner.x + radius, corner.y + radius);
        assert!(cx >= lo && cx <= hi && cy >= lo && cy <= hi);
    }
}

#[test]
fn test_axis_follow_ends_at_ceiling() {
    let config = common::config_with(
        SIDE,
        (90, 90),
        600,
        ControllerKind::AxisFollow,
        EnvironmentKind::Orthogonal,
    );
    let mut sim = Simulation::new(&config, common::room(SIDE, 10));
    let report = sim.run();

    assert_eq!(report.outcome, RunOutcome::IterationCeiling { ticks: 600 });
    assert_eq!(report.outcome.code(), 2);
    assert!(!report.lap_closed);
    assert!(report.sweep.is_none());
    assert_eq!(sim.controller().phase_name(), "AxisFollow");
}

#[test]
fn test_shipped_scenarios_are_valid() {
    for name in [
        "orthogonal_room",
        "offset_room",
        "angled_room",
        "axis_follow",
    ] {
        let path = common::manifest_path(&format!("scenarios/{}.yaml", name));
        let scenario = Scenario::load(&path)
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        let config = scenario.to_config().unwrap();
        let truth = scenario.build_ground_truth();

        assert_eq!(truth.side(), config.grid.side);
        assert!(truth.count_by_type().wall > 0);

        // A few ticks are enough to prove the scenario starts cleanly
        let mut sim = Simulation::new(&config, truth);
        for _ in 0..10 {
            assert!(sim.step().is_none());
        }
    }
}

/// Load a shipped scenario and run it to the end.
fn run_scenario(name: &str) -> (parikrama::sim::RunReport, Simulation) {
    let path = common::manifest_path(&format!("scenarios/{}.yaml", name));
    let scenario = Scenario::load(&path).unwrap();
    let mut sim = Simulation::new(&scenario.to_config().unwrap(), scenario.build_ground_truth());
    let report = sim.run();
    (report, sim)
}

#[test]
fn test_shipped_perimeter_scenarios_complete() {
    for name in ["orthogonal_room", "offset_room", "angled_room"] {
        let (report, _) = run_scenario(name);

        assert_eq!(report.outcome, RunOutcome::Completed, "{}", name);
        assert!(report.lap_closed, "{}", name);
        let bands = report.sweep.map_or(0, |s| s.bands);
        assert!(bands > 1, "{} swept {} bands", name, bands);
    }
}

#[test]
fn test_orthogonal_room_descends_to_extent_bottom() {
    let (report, sim) = run_scenario("orthogonal_room");
    let sweep = sim.controller().perimeter().and_then(|p| p.sweep()).unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(sim.context().center().y, sweep.extent().max);
}

#[test]
fn test_default_config_file_parses() {
    let path = common::manifest_path("configs/config.yaml");
    let config = parikrama::config::ParikramaConfig::load(&path).unwrap();
    assert_eq!(config, parikrama::config::ParikramaConfig::default());
}
