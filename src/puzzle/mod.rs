//! Puzzle Model
//!
//! The abstract structure handed in by the environment, the derived puzzle
//! shared by derivation and validation, and the on-disk description format.

pub mod model;
pub mod schema;

pub use model::{
    CellClues, CellSpec, CellValues, Checker, Clue, ClueId, CluePlacement, Coord, Facet, Puzzle,
    PuzzleStructure, RowSpec, Topology, ValueSource,
};
pub use schema::{load_puzzle_file, PuzzleFile};
