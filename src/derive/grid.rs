//! Rectangular Checker Construction
//!
//! Rows are constrained from their left or right edge, columns from the
//! first row's top edge or the last row's bottom edge. Both edge clues of
//! the same line are independent checkers over identical coordinates.

use super::add_checker;
use crate::puzzle::model::{Checker, Clue, CluePlacement, Coord, PuzzleStructure};

pub(super) fn derive(
    structure: &PuzzleStructure,
    clues: &mut Vec<Clue>,
    checkers: &mut Vec<Checker>,
) {
    let rows = &structure.rows;
    let Some(last_row) = rows.last() else { return };
    let row_count = rows.len();

    // Rows
    for (r, row) in rows.iter().enumerate() {
        let Some(first) = row.first() else { continue };
        let line: Vec<Coord> = (0..row.len()).map(|c| Coord::new(r, c)).collect();

        if let Some(text) = &first.clues.left {
            add_checker(clues, checkers, CluePlacement::RowLeft(r), text, line.clone());
        }
        if let Some(text) = &row[row.len() - 1].clues.right {
            add_checker(clues, checkers, CluePlacement::RowRight(r), text, line);
        }
    }

    // Columns - top clues live on the first row only
    for (c, cell) in rows[0].iter().enumerate() {
        if let Some(text) = &cell.clues.top {
            let column: Vec<Coord> = (0..row_count).map(|r| Coord::new(r, c)).collect();
            add_checker(clues, checkers, CluePlacement::ColumnTop(c), text, column);
        }
    }

    // Columns - bottom clues live on the last row only
    for (c, cell) in last_row.iter().enumerate() {
        if let Some(text) = &cell.clues.bottom {
            let column: Vec<Coord> = (0..row_count).map(|r| Coord::new(r, c)).collect();
            add_checker(clues, checkers, CluePlacement::ColumnBottom(c), text, column);
        }
    }
}
