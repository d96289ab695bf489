//! Hexagonal Checker Construction
//!
//! Three line families: rows (left-facet clue on the row's first cell),
//! top-diagonals walking down from the first row or the last cell of the
//! upper side rows, and bottom-diagonals walking up from the last row or
//! the last cell of the lower side rows.

use super::add_checker;
use super::diagonal::{diagonal_coords, Direction};
use crate::puzzle::model::{Checker, Clue, CluePlacement, Coord, Facet, PuzzleStructure};

pub(super) fn derive(
    structure: &PuzzleStructure,
    clues: &mut Vec<Clue>,
    checkers: &mut Vec<Checker>,
) {
    let rows = &structure.rows;
    let Some(last_row) = rows.last() else { return };
    let row_count = rows.len();

    // Row lines
    for (r, row) in rows.iter().enumerate() {
        let Some(first) = row.first() else { continue };
        if let Some(text) = &first.clues.left {
            let line: Vec<Coord> = (0..row.len()).map(|c| Coord::new(r, c)).collect();
            let placement = CluePlacement::Facet {
                facet: Facet::Left,
                at: Coord::new(r, 0),
            };
            add_checker(clues, checkers, placement, text, line);
        }
    }

    // Top diagonals - first row
    for (c, cell) in rows[0].iter().enumerate() {
        if let Some(text) = &cell.clues.top {
            let start = Coord::new(0, c);
            let placement = CluePlacement::Facet {
                facet: Facet::Top,
                at: start,
            };
            let coords = diagonal_coords(row_count, start, Direction::Down);
            add_checker(clues, checkers, placement, text, coords);
        }
    }

    // Top diagonals - last cell of each row in the upper half
    for r in 1..row_count.div_ceil(2) {
        let row = &rows[r];
        let Some(cell) = row.last() else { continue };
        if let Some(text) = &cell.clues.top {
            let start = Coord::new(r, row.len() - 1);
            let placement = CluePlacement::Facet {
                facet: Facet::Top,
                at: start,
            };
            let coords = diagonal_coords(row_count, start, Direction::Down);
            add_checker(clues, checkers, placement, text, coords);
        }
    }

    // Bottom diagonals - last row
    for (c, cell) in last_row.iter().enumerate() {
        if let Some(text) = &cell.clues.bottom {
            let start = Coord::new(row_count - 1, c);
            let placement = CluePlacement::Facet {
                facet: Facet::Bottom,
                at: start,
            };
            let coords = diagonal_coords(row_count, start, Direction::Up);
            add_checker(clues, checkers, placement, text, coords);
        }
    }

    // Bottom diagonals - last cell of each row in the lower half
    for r in (row_count / 2..row_count - 1).rev() {
        let row = &rows[r];
        let Some(cell) = row.last() else { continue };
        if let Some(text) = &cell.clues.bottom {
            let start = Coord::new(r, row.len() - 1);
            let placement = CluePlacement::Facet {
                facet: Facet::Bottom,
                at: start,
            };
            let coords = diagonal_coords(row_count, start, Direction::Up);
            add_checker(clues, checkers, placement, text, coords);
        }
    }
}
