//! Square occupancy grid storage.
//!
//! Cells are stored row-major (`index = y * side + x`), which is also the
//! order of exported text tables.

use serde::{Deserialize, Serialize};

use crate::core::{CellRect, CellType, GridCoord};

/// Square grid of classified cells.
///
/// Used both for the ground truth of an environment and for the robot's
/// belief map. Out-of-bounds reads return [`CellType::Unknown`] and
/// out-of-bounds writes are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    /// Cell classification, row-major
    cells: Vec<CellType>,
    /// Side length in cells
    side: usize,
}

impl OccupancyGrid {
    /// Create a grid with every cell Unknown (a fresh belief map).
    pub fn new(side: usize) -> Self {
        Self::filled(side, CellType::Unknown)
    }

    /// Create a grid with every cell set to `cell`.
    pub fn filled(side: usize, cell: CellType) -> Self {
        Self {
            cells: vec![cell; side * side],
            side,
        }
    }

    /// Create a grid from row-major cells.
    ///
    /// Returns `None` when `cells.len() != side * side`.
    pub fn from_cells(side: usize, cells: Vec<CellType>) -> Option<Self> {
        (cells.len() == side * side).then_some(Self { cells, side })
    }

    /// Side length in cells
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw row-major cells
    #[inline]
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        let side = self.side as i32;
        coord.x >= 0 && coord.x < side && coord.y >= 0 && coord.y < side
    }

    /// Linear index of a coordinate, if inside the grid.
    #[inline]
    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.side + coord.x as usize)
    }

    /// Coordinate of a linear index.
    #[inline]
    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.side) as i32, (index / self.side) as i32)
    }

    /// Cell at a coordinate (Unknown outside the grid).
    #[inline]
    pub fn get(&self, coord: GridCoord) -> CellType {
        self.index(coord)
            .map(|i| self.cells[i])
            .unwrap_or(CellType::Unknown)
    }

    /// Cell at a coordinate, `None` outside the grid.
    #[inline]
    pub fn try_get(&self, coord: GridCoord) -> Option<CellType> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Is the cell at this coordinate a wall?
    #[inline]
    pub fn is_wall(&self, coord: GridCoord) -> bool {
        self.get(coord).is_wall()
    }

    /// Set a cell. Returns true if the value changed.
    #[inline]
    pub fn set(&mut self, coord: GridCoord, cell: CellType) -> bool {
        match self.index(coord) {
            Some(i) if self.cells[i] != cell => {
                self.cells[i] = cell;
                true
            }
            _ => false,
        }
    }

    /// Set every in-bounds cell of a rectangle.
    pub fn fill_rect(&mut self, rect: CellRect, cell: CellType) {
        for coord in rect.cells() {
            self.set(coord, cell);
        }
    }

    /// One row of cells.
    ///
    /// # Panics
    /// Panics if `y >= side`.
    pub fn row(&self, y: usize) -> &[CellType] {
        let start = y * self.side;
        &self.cells[start..start + self.side]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.cells.chunks(self.side.max(1))
    }

    /// Iterate all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord_of(i), cell))
    }

    /// Reset every cell to Unknown.
    pub fn clear(&mut self) {
        self.cells.fill(CellType::Unknown);
    }

    /// Count cells by type.
    pub fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell {
                CellType::Unknown => counts.unknown += 1,
                CellType::Free => counts.free += 1,
                CellType::Wall => counts.wall += 1,
                CellType::Goal => counts.goal += 1,
                CellType::Object => counts.object += 1,
            }
        }
        counts
    }

    /// Render as ASCII art, one line per row (debugging aid).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.side);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.as_char()));
            out.push('\n');
        }
        out
    }
}

/// Cell counts by type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Unknown cells
    pub unknown: usize,
    /// Free cells
    pub free: usize,
    /// Wall cells
    pub wall: usize,
    /// Goal cells
    pub goal: usize,
    /// Object cells
    pub object: usize,
}

impl CellCounts {
    /// Total known cells.
    pub fn known(&self) -> usize {
        self.free + self.wall + self.goal + self.object
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}
