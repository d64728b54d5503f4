//! Grid export/import as a delimited text table.
//!
//! One line per row (`y`), one integer cell code per column (`x`), comma
//! separated, every line newline-terminated. The table is lossless: a grid
//! written and read back compares equal.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::core::CellType;
use crate::grid::OccupancyGrid;

/// Errors from grid table I/O
#[derive(Error, Debug)]
pub enum GridIoError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cell could not be parsed
    #[error("line {line}, column {column}: invalid cell '{value}'")]
    Parse {
        /// 1-based line number
        line: usize,
        /// 0-based column
        column: usize,
        /// Offending text
        value: String,
    },

    /// Table is not square
    #[error("table is not square: {0}")]
    Shape(String),
}

/// Write a grid as a comma separated table.
pub fn write_grid_csv<W: Write>(grid: &OccupancyGrid, writer: W) -> Result<(), GridIoError> {
    let mut writer = BufWriter::new(writer);
    for row in grid.rows() {
        let mut first = true;
        for cell in row {
            if !first {
                writer.write_all(b",")?;
            }
            write!(writer, "{}", cell.code())?;
            first = false;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a grid table to a file.
pub fn save_grid_csv(grid: &OccupancyGrid, path: &Path) -> Result<(), GridIoError> {
    let file = File::create(path)?;
    write_grid_csv(grid, file)?;
    debug!(
        "[GridIo] wrote {}x{} table to {}",
        grid.side(),
        grid.side(),
        path.display()
    );
    Ok(())
}

/// Read a grid from a comma separated table.
///
/// Blank lines are skipped. Every row must have as many cells as there are
/// rows.
pub fn read_grid_csv<R: Read>(reader: R) -> Result<OccupancyGrid, GridIoError> {
    let reader = BufReader::new(reader);
    let mut cells = Vec::new();
    let mut rows = 0usize;
    let mut width: Option<usize> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let before = cells.len();
        for (column, value) in line.split(',').enumerate() {
            let value = value.trim();
            let cell = value
                .parse::<i8>()
                .ok()
                .and_then(CellType::from_code)
                .ok_or_else(|| GridIoError::Parse {
                    line: i + 1,
                    column,
                    value: value.to_string(),
                })?;
            cells.push(cell);
        }

        let count = cells.len() - before;
        match width {
            None => width = Some(count),
            Some(w) if w != count => {
                return Err(GridIoError::Shape(format!(
                    "line {} has {} cells, expected {}",
                    i + 1,
                    count,
                    w
                )));
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let Some(width) = width else {
        return Err(GridIoError::Shape("empty table".into()));
    };
    if width != rows {
        return Err(GridIoError::Shape(format!(
            "{} rows of {} cells",
            rows, width
        )));
    }

    OccupancyGrid::from_cells(rows, cells)
        .ok_or_else(|| GridIoError::Shape(format!("{} cells for side {}", rows * width, rows)))
}

/// Read a grid table from a file.
pub fn load_grid_csv(path: &Path) -> Result<OccupancyGrid, GridIoError> {
    let file = File::open(path)?;
    let grid = read_grid_csv(file)?;
    debug!(
        "[GridIo] read {}x{} table from {}",
        grid.side(),
        grid.side(),
        path.display()
    );
    Ok(grid)
}
