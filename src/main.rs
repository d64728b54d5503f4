//! Parikrama command-line runner.
//!
//! Runs one simulation and writes the belief grid (CSV) and the audit SVG.
//!
//! # Usage
//!
//! ```bash
//! parikrama --scenario scenarios/orthogonal_room.yaml
//! parikrama --config configs/config.yaml --ground-truth truth.csv
//! RUST_LOG=debug parikrama --scenario scenarios/angled_room.yaml --svg
//! ```
//!
//! Without a scenario or ground-truth table the run uses a plain room that
//! fills the configured grid. The exit status is the run outcome code, or 1
//! when the setup cannot be loaded.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};
use thiserror::Error;

use parikrama::config::{ConfigLoadError, ParikramaConfig};
use parikrama::core::{CellRect, RobotPose};
use parikrama::grid::{EnvironmentBuilder, OccupancyGrid};
use parikrama::io::{
    GridIoError, Scenario, ScenarioError, SvgConfig, SvgRenderer, load_grid_csv, save_grid_csv,
};
use parikrama::sim::Simulation;

/// Wall thickness of the built-in room
const DEFAULT_WALL_THICKNESS: i32 = 40;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file (environment, start pose and config overrides)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Configuration file path (used without a scenario)
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: PathBuf,

    /// Ground-truth grid table (used without a scenario)
    #[arg(short, long)]
    ground_truth: Option<PathBuf>,

    /// Override the tick ceiling
    #[arg(long)]
    max_ticks: Option<u32>,

    /// Output directory for the belief table and SVG
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Write the SVG even if the scenario does not ask for it
    #[arg(long)]
    svg: bool,
}

/// Errors that stop the runner before the simulation starts
#[derive(Debug, Error)]
enum CliError {
    #[error("scenario {}: {}", .path.display(), .source)]
    Scenario { path: PathBuf, source: ScenarioError },

    #[error("config {}: {}", .path.display(), .source)]
    Config { path: PathBuf, source: ConfigLoadError },

    #[error("ground truth {}: {}", .path.display(), .source)]
    GroundTruth { path: PathBuf, source: GridIoError },
}

/// Everything needed to start a run
struct RunSetup {
    name: String,
    config: ParikramaConfig,
    ground_truth: OccupancyGrid,
    visualize: bool,
}

fn load_setup(args: &Args) -> Result<RunSetup, CliError> {
    if let Some(path) = &args.scenario {
        let scenario_error = |source| CliError::Scenario {
            path: path.clone(),
            source,
        };
        let scenario = Scenario::load(path).map_err(scenario_error)?;
        let config = scenario.to_config().map_err(scenario_error)?;
        info!("Scenario: {}", scenario.name);
        return Ok(RunSetup {
            name: scenario.file_stem(),
            ground_truth: scenario.build_ground_truth(),
            visualize: scenario.visualize,
            config,
        });
    }

    let config = if args.config.exists() {
        ParikramaConfig::load(&args.config).map_err(|source| CliError::Config {
            path: args.config.clone(),
            source,
        })?
    } else {
        info!("Config not found at {}, using defaults", args.config.display());
        ParikramaConfig::default()
    };

    let (name, ground_truth) = match &args.ground_truth {
        Some(path) => {
            let grid = load_grid_csv(path).map_err(|source| CliError::GroundTruth {
                path: path.clone(),
                source,
            })?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "ground_truth".to_string());
            (name, grid)
        }
        None => {
            let far = config.grid.side as i32 - 1;
            let grid = EnvironmentBuilder::new(config.grid.side)
                .room(CellRect::new(0, 0, far, far), DEFAULT_WALL_THICKNESS)
                .build();
            ("room".to_string(), grid)
        }
    };

    Ok(RunSetup {
        name,
        config,
        ground_truth,
        visualize: false,
    })
}

fn export(setup_name: &str, output: &Path, write_svg: bool, sim: &Simulation) {
    if let Err(e) = std::fs::create_dir_all(output) {
        error!("Failed to create {}: {}", output.display(), e);
        return;
    }

    let ctx = sim.context();
    let csv_path = output.join(format!("{}_belief.csv", setup_name));
    match save_grid_csv(&ctx.robot.belief, &csv_path) {
        Ok(()) => println!("Saved: {}", csv_path.display()),
        Err(e) => error!("Failed to save {}: {}", csv_path.display(), e),
    }

    if write_svg {
        let svg_path = output.join(format!("{}.svg", setup_name));
        let body = ctx.robot.pose;
        let start = ctx
            .trajectory
            .first()
            .map(|c| RobotPose::new(c.x, c.y, body.width, body.height));
        let mut renderer = SvgRenderer::new(&ctx.robot.belief, SvgConfig::default())
            .with_title(setup_name)
            .with_trajectory(ctx.trajectory.points(), ctx.robot.pose.radius());
        if let Some(start) = start {
            renderer = renderer.with_start(start);
        }
        match renderer.save(&svg_path) {
            Ok(()) => println!("Saved: {}", svg_path.display()),
            Err(e) => error!("Failed to save {}: {}", svg_path.display(), e),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut setup = match load_setup(&args) {
        Ok(setup) => setup,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(max_ticks) = args.max_ticks {
        setup.config.run.max_ticks = max_ticks.max(1);
    }

    let mut sim = Simulation::new(&setup.config, setup.ground_truth);
    let report = sim.run();

    println!("\n=== Run Report ===");
    println!("Outcome: {}", report.outcome);
    println!("Ticks: {}", report.ticks);
    println!("Trajectory: {} poses", report.trajectory_len);
    println!("Lap closed: {}", report.lap_closed);
    if let Some(sweep) = report.sweep {
        println!(
            "Sweep: {} bands, {} clearance steps, {} descent steps",
            sweep.bands, sweep.clearance_steps, sweep.descent_steps
        );
    }
    println!("Accuracy: {}", report.accuracy.summary());

    export(&setup.name, &args.output, args.svg || setup.visualize, &sim);

    std::process::exit(report.outcome.code());
}
