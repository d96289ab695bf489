//! Diagonal-Shift Walk
//!
//! Computes the slanted line of cells a hexagonal diagonal clue governs.
//! Row widths grow toward the middle of the hexagon and shrink toward both
//! ends, so a slanted line shifts its column offset by one exactly when it
//! crosses the row of maximum width.

use crate::puzzle::model::Coord;

/// Direction a diagonal walk travels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From a top-facet clue toward the last row
    Down,
    /// From a bottom-facet clue toward row 0
    Up,
}

/// Walk a diagonal from `start`, collecting coordinates until the far edge
/// or until the shifting column leaves the hexagon.
///
/// Downward walks shift left once the row index reaches `ceil(R/2)`,
/// upward walks once it drops below `floor(R/2)`. A negative column means
/// the line has run off the short rows near a corner; the walk stops there
/// and the coordinates gathered so far stand. That early termination is
/// normal geometry, not an error.
pub fn diagonal_coords(row_count: usize, start: Coord, direction: Direction) -> Vec<Coord> {
    let mut coords = Vec::new();
    let mut col = start.col as isize;

    match direction {
        Direction::Down => {
            let cutoff = row_count.div_ceil(2);
            for row in start.row..row_count {
                if row >= cutoff {
                    col -= 1;
                }
                if col < 0 {
                    break;
                }
                coords.push(Coord::new(row, col as usize));
            }
        }
        Direction::Up => {
            let cutoff = row_count / 2;
            for row in (0..=start.row).rev() {
                if row < cutoff {
                    col -= 1;
                }
                if col < 0 {
                    break;
                }
                coords.push(Coord::new(row, col as usize));
            }
        }
    }

    coords
}
