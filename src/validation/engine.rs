//! Validation Engine
//!
//! Core checker evaluation separated from derivation and CLI concerns.
//! Stateless between calls: every run re-derives eligibility and match
//! results from current cell values.

use crate::puzzle::model::{Checker, ClueId, Puzzle, ValueSource};

/// Validity signal for a single clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueStatus {
    /// Every governed cell is filled and the concatenation matches
    Valid,
    /// Every governed cell is filled and the concatenation does not match
    Invalid,
    /// At least one governed cell is still empty; any prior failure
    /// indication is cleared
    Neutral,
}

/// Display target for clue validity signals.
///
/// The engine never renders anything itself; the environment decides what
/// a signal looks like (the CLI collects them into a report).
pub trait StatusSink {
    fn report(&mut self, clue: ClueId, status: ClueStatus);
}

/// A sink that records every signal, in order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub statuses: Vec<(ClueId, ClueStatus)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any clue reported invalid
    pub fn is_valid(&self) -> bool {
        !self
            .statuses
            .iter()
            .any(|(_, status)| *status == ClueStatus::Invalid)
    }

    /// Last reported status for `clue`, if any
    pub fn status_of(&self, clue: ClueId) -> Option<ClueStatus> {
        self.statuses
            .iter()
            .rev()
            .find(|(id, _)| *id == clue)
            .map(|(_, status)| *status)
    }

    pub fn count_of(&self, status: ClueStatus) -> usize {
        self.statuses.iter().filter(|(_, s)| *s == status).count()
    }
}

impl StatusSink for ValidationReport {
    fn report(&mut self, clue: ClueId, status: ClueStatus) {
        self.statuses.push((clue, status));
    }
}

/// Evaluate one checker against current cell values.
///
/// A checker whose walk produced no coordinates (a zero-length diagonal at
/// a hexagon corner) is vacuously skipped.
pub fn check(checker: &Checker, values: &impl ValueSource) -> ClueStatus {
    if checker.coords.is_empty() {
        return ClueStatus::Neutral;
    }

    let mut text = String::with_capacity(checker.coords.len());
    for &coord in &checker.coords {
        match values.value(coord) {
            Some(ch) => text.push(ch),
            None => return ClueStatus::Neutral,
        }
    }

    match &checker.regex {
        Some(regex) if regex.is_match(&text) => ClueStatus::Valid,
        // No match, or the pattern never compiled
        _ => ClueStatus::Invalid,
    }
}

/// Re-evaluate every checker and signal each clue's current status
pub fn validate(puzzle: &Puzzle, values: &impl ValueSource, sink: &mut impl StatusSink) {
    for checker in &puzzle.checkers {
        sink.report(checker.clue, check(checker, values));
    }
}
