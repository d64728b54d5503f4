//! Bresenham line rasterization for drawing angled walls.
//!
//! ```text
//! From (0,0) to (7,3):
//!
//!     3 │        ●
//!     2 │     ●●
//!     1 │  ●●
//!     0 ●●
//!       └──────────
//!        0 1 2 3 4 5 6 7
//! ```

use crate::core::GridCoord;

/// Bresenham's line algorithm iterator.
///
/// Yields every cell from `start` to `end`, both included, with no gaps.
pub struct BresenhamLine {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    x_inc: i32,
    y_inc: i32,
    error: i32,
    steep: bool,
    end_x: i32,
    end_y: i32,
    done: bool,
}

impl BresenhamLine {
    /// Create a new line iterator from start to end coordinates.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        let steep = dy > dx;

        let (x, y, end_x, end_y, dx, dy) = if steep {
            (start.y, start.x, end.y, end.x, dy, dx)
        } else {
            (start.x, start.y, end.x, end.y, dx, dy)
        };

        let x_inc = if end_x > x { 1 } else { -1 };
        let y_inc = if end_y > y { 1 } else { -1 };

        Self {
            x,
            y,
            dx,
            dy,
            x_inc,
            y_inc,
            error: dx / 2,
            steep,
            end_x,
            end_y,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = if self.steep {
            GridCoord::new(self.y, self.x)
        } else {
            GridCoord::new(self.x, self.y)
        };

        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(result);
        }

        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.y_inc;
            self.error += self.dx;
        }
        self.x += self.x_inc;

        Some(result)
    }
}

/// Cells of a line thickened by a square brush of `thickness` cells.
///
/// A thickness of 1 is the plain Bresenham line. Duplicates are possible;
/// callers write idempotently.
pub fn thick_line(
    start: GridCoord,
    end: GridCoord,
    thickness: i32,
) -> impl Iterator<Item = GridCoord> {
    let thickness = thickness.max(1);
    let lo = -(thickness - 1) / 2;
    let hi = thickness / 2;
    BresenhamLine::new(start, end).flat_map(move |c| {
        (lo..=hi).flat_map(move |dy| (lo..=hi).map(move |dx| GridCoord::new(c.x + dx, c.y + dy)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bresenham_horizontal() {
        let cells: Vec<_> = BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(5, 0)).collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], GridCoord::new(5, 0));
    }

    #[test]
    fn test_bresenham_diagonal() {
        let cells: Vec<_> = BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(5, 5)).collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| c.x == c.y));
    }

    #[test]
    fn test_bresenham_negative() {
        let cells: Vec<_> = BresenhamLine::new(GridCoord::new(5, 5), GridCoord::new(0, 0)).collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridCoord::new(5, 5));
        assert_eq!(cells[5], GridCoord::new(0, 0));
    }

    #[test]
    fn test_bresenham_steep() {
        let cells: Vec<_> = BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(2, 5)).collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], GridCoord::new(2, 5));
    }

    #[test]
    fn test_thick_line_brush() {
        let cells: Vec<_> = thick_line(GridCoord::new(0, 0), GridCoord::new(4, 0), 3).collect();
        assert_eq!(cells.len(), 5 * 9);
        assert!(cells.contains(&GridCoord::new(2, -1)));
        assert!(cells.contains(&GridCoord::new(2, 1)));

        let thin: Vec<_> = thick_line(GridCoord::new(0, 0), GridCoord::new(4, 0), 1).collect();
        assert_eq!(thin.len(), 5);
    }
}
