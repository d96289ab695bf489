//! Regex Crossword Validation
//!
//! Constraint extraction and validation for crossword-style puzzles laid
//! out as a rectangular grid or a hexagonal tiling.
//!
//! This library provides:
//! - An abstract puzzle model plus a TOML/JSON description format
//! - Topology-aware derivation of the linear constraints each clue governs
//! - Idempotent re-validation of those constraints against current values
//! - A caller-owned session driven by structure and value-change events

pub mod config;
pub mod derive;
pub mod puzzle;
pub mod session;
pub mod validation;
pub mod watch;

// Re-exports for clean public API
pub use config::Config;
pub use derive::{build_puzzle, derive_checkers};
pub use puzzle::model::{Checker, Clue, Coord, Puzzle, PuzzleStructure, Topology};
pub use puzzle::schema::load_puzzle_file;
pub use session::{Mode, Session};
pub use validation::engine::{check, validate, ClueStatus, StatusSink, ValidationReport};
