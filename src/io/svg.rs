//! SVG rendering of a belief grid and the robot trajectory.
//!
//! The SVG is the audit output of a run:
//! - The belief grid (Unknown cells are left as background)
//! - The trajectory of the robot center
//! - The robot body at the start pose
//!
//! Grid rows are merged into horizontal runs of equal cells, so an 800×800
//! map costs a few thousand rects instead of 640k.

use std::fmt::{self, Write};
use std::path::Path;

use log::debug;

use crate::core::{CellType, GridCoord, RobotPose};
use crate::grid::OccupancyGrid;

/// SVG color scheme
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Unknown cell color (background)
    pub unknown: &'static str,
    /// Free cell color
    pub free: &'static str,
    /// Wall cell color
    pub wall: &'static str,
    /// Goal cell color
    pub goal: &'static str,
    /// Object cell color
    pub object: &'static str,
    /// Trajectory color
    pub trajectory: &'static str,
    /// Start pose color
    pub start: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            unknown: "#CCCCCC",
            free: "#FFFFFF",
            wall: "#333333",
            goal: "#22AA22",
            object: "#AA7722",
            trajectory: "#2222AA",
            start: "#AA2222",
        }
    }
}

impl SvgColorScheme {
    fn cell(&self, cell: CellType) -> &'static str {
        match cell {
            CellType::Unknown => self.unknown,
            CellType::Free => self.free,
            CellType::Wall => self.wall,
            CellType::Goal => self.goal,
            CellType::Object => self.object,
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per cell
    pub scale: f32,
    /// Trajectory line width in pixels
    pub trajectory_width: f32,
    /// Padding around the map in pixels
    pub padding: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            trajectory_width: 1.5,
            padding: 20.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// Belief grid + trajectory renderer.
#[derive(Clone, Debug)]
pub struct SvgRenderer<'a> {
    grid: &'a OccupancyGrid,
    config: SvgConfig,
    title: Option<String>,
    /// Robot centers along the run
    trajectory: Vec<GridCoord>,
    start: Option<RobotPose>,
}

impl<'a> SvgRenderer<'a> {
    /// Create a renderer for a grid.
    pub fn new(grid: &'a OccupancyGrid, config: SvgConfig) -> Self {
        Self {
            grid,
            config,
            title: None,
            trajectory: Vec::new(),
            start: None,
        }
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the trajectory as recorded (top-left corners) for a body of
    /// the given radius. The path is drawn through the body centers.
    pub fn with_trajectory(mut self, corners: &[GridCoord], radius: i32) -> Self {
        let offset = GridCoord::new(radius, radius);
        self.trajectory = corners.iter().map(|&c| c + offset).collect();
        self
    }

    /// Draw the robot body at its start pose.
    pub fn with_start(mut self, pose: RobotPose) -> Self {
        self.start = Some(pose);
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_document(&mut svg);
        svg
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.render())?;
        debug!("[Svg] wrote {}", path.display());
        Ok(())
    }

    fn write_document(&self, svg: &mut String) -> fmt::Result {
        let scale = self.config.scale;
        let padding = self.config.padding;
        let map_px = self.grid.side() as f32 * scale;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 30.0;

        let width = map_px + 2.0 * padding;
        let height = map_px + 2.0 * padding + title_height + legend_height;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##)?;

        if let Some(ref title) = self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )?;
        }

        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )?;
        self.write_grid(svg)?;
        self.write_trajectory(svg)?;
        self.write_start(svg)?;
        writeln!(svg, "  </g>")?;

        self.write_legend(svg, padding, padding + title_height + map_px + 10.0)?;

        writeln!(svg, "</svg>")
    }

    fn write_grid(&self, svg: &mut String) -> fmt::Result {
        let scale = self.config.scale;
        let side = self.grid.side();

        writeln!(svg, r#"    <g id="grid">"#)?;
        writeln!(
            svg,
            r#"      <rect width="{:.1}" height="{:.1}" fill="{}"/>"#,
            side as f32 * scale,
            side as f32 * scale,
            self.config.colors.unknown
        )?;

        for (y, row) in self.grid.rows().enumerate() {
            let mut x = 0;
            while x < row.len() {
                let cell = row[x];
                let run = row[x..].iter().take_while(|&&c| c == cell).count();
                if cell.is_known() {
                    writeln!(
                        svg,
                        r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                        x as f32 * scale,
                        y as f32 * scale,
                        run as f32 * scale,
                        scale,
                        self.config.colors.cell(cell)
                    )?;
                }
                x += run;
            }
        }

        writeln!(svg, "    </g>")
    }

    fn write_trajectory(&self, svg: &mut String) -> fmt::Result {
        if self.trajectory.is_empty() {
            return Ok(());
        }

        let scale = self.config.scale;
        let mut path_d = String::new();
        for (i, p) in self.trajectory.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            write!(
                path_d,
                "{} {:.1} {:.1}",
                cmd,
                (p.x as f32 + 0.5) * scale,
                (p.y as f32 + 0.5) * scale
            )?;
        }

        writeln!(svg, r#"    <g id="trajectory">"#)?;
        writeln!(
            svg,
            r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
            path_d, self.config.colors.trajectory, self.config.trajectory_width
        )?;
        if let Some(end) = self.trajectory.last() {
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
                (end.x as f32 + 0.5) * scale,
                (end.y as f32 + 0.5) * scale,
                3.0 * self.config.trajectory_width,
                self.config.colors.trajectory
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_start(&self, svg: &mut String) -> fmt::Result {
        let Some(pose) = self.start else {
            return Ok(());
        };
        let scale = self.config.scale;
        writeln!(
            svg,
            r#"    <rect id="start" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="2"/>"#,
            pose.x as f32 * scale,
            pose.y as f32 * scale,
            pose.width as f32 * scale,
            pose.height as f32 * scale,
            self.config.colors.start
        )
    }

    fn write_legend(&self, svg: &mut String, x: f32, y: f32) -> fmt::Result {
        let colors = &self.config.colors;
        let entries = [
            ("Wall", colors.wall),
            ("Free", colors.free),
            ("Unknown", colors.unknown),
            ("Goal", colors.goal),
            ("Object", colors.object),
            ("Trajectory", colors.trajectory),
            ("Start", colors.start),
        ];

        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate({:.0}, {:.0})">"#,
            x, y
        )?;
        for (i, (label, color)) in entries.iter().enumerate() {
            let ex = i as f32 * 90.0;
            writeln!(
                svg,
                r##"    <rect x="{:.0}" y="0" width="12" height="12" fill="{}" stroke="#666" stroke-width="0.5"/>"##,
                ex, color
            )?;
            writeln!(
                svg,
                r#"    <text x="{:.0}" y="10">{}</text>"#,
                ex + 16.0,
                label
            )?;
        }
        writeln!(svg, "  </g>")
    }
}
