//! Validation Session
//!
//! Caller-owned state: the current puzzle, its cell values, and the
//! operating mode. The environment drives it through two events -
//! structure replaced and value changed - plus an explicit one-shot
//! validation request. No ambient state, no change detection of its own.

use crate::derive;
use crate::puzzle::model::{CellValues, Coord, Puzzle, PuzzleStructure};
use crate::validation::engine::{self, StatusSink};

/// When validation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Validate only on explicit request
    Click,
    /// Also validate on every value change and structure replacement
    Live,
}

/// One puzzle's worth of validation state
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    puzzle: Option<Puzzle>,
    values: CellValues,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            puzzle: None,
            values: CellValues::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Structure-replaced event: rebuild the puzzle and values wholesale.
    ///
    /// Previously derived checkers are discarded with the old puzzle.
    /// `None` means no structure is present; the session goes empty and
    /// validation becomes a no-op.
    pub fn replace_structure(
        &mut self,
        structure: Option<&PuzzleStructure>,
        sink: &mut impl StatusSink,
    ) {
        self.puzzle = structure.map(derive::build_puzzle);
        self.values = structure.map(CellValues::from_structure).unwrap_or_default();

        match &self.puzzle {
            Some(puzzle) => log::info!(
                "Puzzle rebuilt: {} rows, {} checkers",
                puzzle.row_count(),
                puzzle.checkers.len()
            ),
            None => log::info!("Puzzle cleared"),
        }

        if self.mode == Mode::Live {
            self.validate(sink);
        }
    }

    /// Value-changed event. Out-of-range coordinates are ignored.
    pub fn set_value(&mut self, coord: Coord, value: Option<char>, sink: &mut impl StatusSink) {
        if !self.values.set(coord, value) {
            log::warn!("Ignoring value change at out-of-range cell {coord}");
            return;
        }
        log::debug!("Cell {coord} set to {value:?}");

        if self.mode == Mode::Live {
            self.validate(sink);
        }
    }

    /// One-shot validation of the current puzzle; no-op when none is loaded
    pub fn validate(&self, sink: &mut impl StatusSink) {
        if let Some(puzzle) = &self.puzzle {
            engine::validate(puzzle, &self.values, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::model::{CellSpec, Topology};
    use crate::validation::engine::{ClueStatus, ValidationReport};

    fn two_cell_structure(pattern: &str) -> PuzzleStructure {
        let mut row = vec![CellSpec::new(Some('o')), CellSpec::new(None)];
        row[0].clues.left = Some(pattern.to_string());
        PuzzleStructure {
            topology: Topology::Grid,
            rows: vec![row],
        }
    }

    #[test]
    fn test_validate_without_puzzle_is_noop() {
        let session = Session::new(Mode::Click);
        let mut report = ValidationReport::new();
        session.validate(&mut report);
        assert!(report.statuses.is_empty());
    }

    #[test]
    fn test_click_mode_defers_validation() {
        let structure = two_cell_structure("ok");
        let mut session = Session::new(Mode::Click);
        let mut report = ValidationReport::new();

        session.replace_structure(Some(&structure), &mut report);
        session.set_value(Coord::new(0, 1), Some('k'), &mut report);
        assert!(report.statuses.is_empty());

        session.validate(&mut report);
        assert_eq!(report.statuses, vec![(0, ClueStatus::Valid)]);
    }

    #[test]
    fn test_live_mode_validates_on_events() {
        let structure = two_cell_structure("ok");
        let mut session = Session::new(Mode::Live);
        let mut report = ValidationReport::new();

        session.replace_structure(Some(&structure), &mut report);
        assert_eq!(report.statuses, vec![(0, ClueStatus::Neutral)]);

        session.set_value(Coord::new(0, 1), Some('k'), &mut report);
        assert_eq!(report.status_of(0), Some(ClueStatus::Valid));

        session.set_value(Coord::new(0, 1), Some('x'), &mut report);
        assert_eq!(report.status_of(0), Some(ClueStatus::Invalid));
    }

    #[test]
    fn test_out_of_range_value_change_is_ignored() {
        let structure = two_cell_structure("ok");
        let mut session = Session::new(Mode::Live);
        let mut report = ValidationReport::new();
        session.replace_structure(Some(&structure), &mut report);

        let before = report.statuses.len();
        session.set_value(Coord::new(5, 5), Some('z'), &mut report);
        assert_eq!(report.statuses.len(), before);
    }

    #[test]
    fn test_replacing_structure_discards_old_state() {
        let mut session = Session::new(Mode::Click);
        let mut report = ValidationReport::new();
        session.replace_structure(Some(&two_cell_structure("ok")), &mut report);
        session.set_value(Coord::new(0, 1), Some('k'), &mut report);

        // New structure: a single unfilled cell; the old filled values and
        // the old checker must not leak through.
        let replacement = PuzzleStructure {
            topology: Topology::Grid,
            rows: vec![vec![CellSpec {
                value: None,
                clues: crate::puzzle::model::CellClues {
                    left: Some("z".to_string()),
                    ..Default::default()
                },
            }]],
        };
        session.replace_structure(Some(&replacement), &mut report);

        let puzzle = session.puzzle().expect("puzzle");
        assert_eq!(puzzle.row_lengths, vec![1]);
        assert_eq!(puzzle.checkers.len(), 1);
        assert_eq!(puzzle.checkers[0].coords, vec![Coord::new(0, 0)]);

        session.validate(&mut report);
        assert_eq!(report.status_of(0), Some(ClueStatus::Neutral));
    }

    #[test]
    fn test_clearing_structure_empties_session() {
        let mut session = Session::new(Mode::Live);
        let mut report = ValidationReport::new();
        session.replace_structure(Some(&two_cell_structure("ok")), &mut report);
        session.replace_structure(None, &mut report);

        assert!(session.puzzle().is_none());
        let before = report.statuses.len();
        session.validate(&mut report);
        assert_eq!(report.statuses.len(), before);
    }
}
