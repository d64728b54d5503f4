//! Cell classification for ground-truth and belief grids.
//!
//! Cells carry a small integer code so grids can be exchanged as plain
//! text tables with other tooling.

use serde::{Deserialize, Serialize};

/// Semantic cell type.
///
/// The cell type hierarchy:
/// - `Unknown` - Never sampled by the range sensor (belief) or outside the map
/// - `Free` - Open floor the robot may cross
/// - `Wall` - Wall segment, the only type the wall detector reacts to
/// - `Goal` - Goal patch
/// - `Object` - Free-standing obstacle spawned inside the room
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum CellType {
    /// Cell has not been observed
    #[default]
    Unknown = -1,

    /// Traversable floor
    Free = 0,

    /// Wall
    Wall = 1,

    /// Goal area
    Goal = 2,

    /// Obstacle object
    Object = 3,
}

impl CellType {
    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellType::Unknown
    }

    /// Is this a wall cell?
    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellType::Wall
    }

    /// Is this cell an obstacle (wall or object)?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellType::Wall | CellType::Object)
    }

    /// Integer code used in text tables.
    #[inline]
    pub fn code(self) -> i8 {
        self as i8
    }

    /// Parse an integer code. Returns `None` outside `-1..=3`.
    #[inline]
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(CellType::Unknown),
            0 => Some(CellType::Free),
            1 => Some(CellType::Wall),
            2 => Some(CellType::Goal),
            3 => Some(CellType::Object),
            _ => None,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellType::Unknown => '?',
            CellType::Free => '.',
            CellType::Wall => '#',
            CellType::Goal => 'G',
            CellType::Object => 'o',
        }
    }
}
