//! Line Deriver
//!
//! Topology-specific construction of checkers: the ordered coordinate
//! sequence each clue constrains, with its pattern compiled once at build
//! time. Pure derivation over the abstract structure - no live document,
//! no I/O.

pub mod diagonal;
mod grid;
mod hex;

pub use diagonal::{diagonal_coords, Direction};

use regex::{Regex, RegexBuilder};

use crate::puzzle::model::{
    Checker, Clue, CluePlacement, Coord, Puzzle, PuzzleStructure, Topology,
};

/// Derive every checker (and its clue table entry) from a structure
pub fn derive_checkers(structure: &PuzzleStructure) -> (Vec<Clue>, Vec<Checker>) {
    let mut clues = Vec::new();
    let mut checkers = Vec::new();

    match structure.topology {
        Topology::Grid => grid::derive(structure, &mut clues, &mut checkers),
        Topology::Hexagonal => hex::derive(structure, &mut clues, &mut checkers),
    }

    (clues, checkers)
}

/// Build the full puzzle (shape + clue table + checkers) from a structure
pub fn build_puzzle(structure: &PuzzleStructure) -> Puzzle {
    let (clues, checkers) = derive_checkers(structure);

    Puzzle {
        topology: structure.topology,
        row_lengths: structure.rows.iter().map(Vec::len).collect(),
        clues,
        checkers,
    }
}

/// Register one clue and its checker. Whitespace-only clue text constrains
/// nothing and is dropped here, in one place for every topology.
fn add_checker(
    clues: &mut Vec<Clue>,
    checkers: &mut Vec<Checker>,
    placement: CluePlacement,
    text: &str,
    coords: Vec<Coord>,
) {
    let pattern = text.trim();
    if pattern.is_empty() {
        return;
    }

    let id = clues.len();
    clues.push(Clue {
        placement,
        pattern: pattern.to_string(),
    });
    checkers.push(Checker {
        clue: id,
        regex: compile_pattern(pattern),
        coords,
    });
}

/// Compile clue text as a fully anchored, case-insensitive regex.
///
/// The non-capturing group keeps alternations anchored at both ends. A
/// pattern that fails to compile is logged here; its checker is kept and
/// reports invalid whenever it is eligible.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Invalid clue pattern '{pattern}': {e}");
            None
        }
    }
}
