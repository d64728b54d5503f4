//! Test utilities for Parikrama integration tests.
//!
//! Builders for small environments and configs sized to match them.

#![allow(dead_code)]

use std::path::PathBuf;

use parikrama::config::{ControllerKind, EnvironmentKind, ParikramaConfig};
use parikrama::core::{CellRect, GridCoord};
use parikrama::grid::{EnvironmentBuilder, OccupancyGrid};
use parikrama::sim::{RunReport, Simulation, SimulationContext};

/// Wall thickness of the arenas, wider than any detector reach.
pub const ARENA_WALL: i32 = 40;

/// Square room with a one-cell wall border `inset` cells from the edge.
///
/// Thin walls are fine for scoring and single-step checks; full runs use
/// the arenas below.
pub fn room(side: usize, inset: i32) -> OccupancyGrid {
    room_builder(side, inset).build()
}

/// Room builder, for tests that add shapes.
pub fn room_builder(side: usize, inset: i32) -> EnvironmentBuilder {
    let far = side as i32 - 1 - inset;
    EnvironmentBuilder::new(side).room(CellRect::new(inset, inset, far, far), 1)
}

/// Arena builder: the whole grid walled in by [`ARENA_WALL`] cells.
pub fn arena_builder(side: usize) -> EnvironmentBuilder {
    let far = side as i32 - 1;
    EnvironmentBuilder::new(side).room(CellRect::new(0, 0, far, far), ARENA_WALL)
}

/// Plain 300-cell arena.
pub fn arena() -> OccupancyGrid {
    arena_builder(300).build()
}

/// 300-cell arena pushed towards the bottom-right corner.
pub fn offset_arena() -> OccupancyGrid {
    arena_builder(300)
        .wall_rect(CellRect::new(0, 0, 299, 79))
        .wall_rect(CellRect::new(0, 0, 69, 299))
        .build()
}

/// 300-cell arena with two corners cut by thick diagonal walls.
pub fn angled_arena() -> OccupancyGrid {
    arena_builder(300)
        .segment(GridCoord::new(40, 130), GridCoord::new(130, 40), 20)
        .segment(GridCoord::new(170, 259), GridCoord::new(259, 170), 20)
        .build()
}

/// Room with a free-standing object block in the middle.
pub fn room_with_block(side: usize, inset: i32) -> OccupancyGrid {
    let mid = side as i32 / 2;
    room_builder(side, inset)
        .block(CellRect::new(mid - 5, mid - 5, mid + 5, mid + 5))
        .build()
}

/// Default config resized to a grid, starting at the given corner.
pub fn config(side: usize, start: (i32, i32), max_ticks: u32) -> ParikramaConfig {
    let mut config = ParikramaConfig::default();
    config.grid.side = side;
    config.robot.start_x = start.0;
    config.robot.start_y = start.1;
    config.run.max_ticks = max_ticks;
    config
}

/// Same as [`config`] but with another controller and layout.
pub fn config_with(
    side: usize,
    start: (i32, i32),
    max_ticks: u32,
    controller: ControllerKind,
    kind: EnvironmentKind,
) -> ParikramaConfig {
    let mut config = config(side, start, max_ticks);
    config.run.controller = controller;
    config.environment.kind = kind;
    config
}

/// Run to the end, returning the report and the final context.
pub fn run(config: &ParikramaConfig, truth: OccupancyGrid) -> (RunReport, SimulationContext) {
    let mut sim = Simulation::new(config, truth);
    let report = sim.run();
    (report, sim.into_context())
}

/// Path of a file shipped with the crate.
pub fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}
