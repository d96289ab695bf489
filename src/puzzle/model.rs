//! Puzzle Data Model
//!
//! Clean, minimal types shared by derivation and validation.
//! No file-format or CLI concerns - pure data representation.

use std::fmt;

use regex::Regex;

/// Layout of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Rectangular grid with edge clues
    Grid,
    /// Hexagonal tiling with per-cell facet clues
    Hexagonal,
}

/// A (row, column) cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Side of a hexagonal cell a clue can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Left,
    Top,
    Bottom,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Left => write!(f, "left"),
            Facet::Top => write!(f, "top"),
            Facet::Bottom => write!(f, "bottom"),
        }
    }
}

/// Where a clue sits on the puzzle, used to identify its display target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CluePlacement {
    /// Left edge of a grid row
    RowLeft(usize),
    /// Right edge of a grid row
    RowRight(usize),
    /// Top edge of a grid column
    ColumnTop(usize),
    /// Bottom edge of a grid column
    ColumnBottom(usize),
    /// A facet of a hexagonal cell
    Facet { facet: Facet, at: Coord },
}

impl fmt::Display for CluePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CluePlacement::RowLeft(r) => write!(f, "row {r} left"),
            CluePlacement::RowRight(r) => write!(f, "row {r} right"),
            CluePlacement::ColumnTop(c) => write!(f, "column {c} top"),
            CluePlacement::ColumnBottom(c) => write!(f, "column {c} bottom"),
            CluePlacement::Facet { facet, at } => write!(f, "{facet} facet at {at}"),
        }
    }
}

/// Index of a clue within its puzzle's clue table
pub type ClueId = usize;

/// A clue: trimmed pattern text plus its placement
#[derive(Debug, Clone, PartialEq)]
pub struct Clue {
    pub placement: CluePlacement,
    pub pattern: String,
}

/// One linear constraint: a clue's compiled pattern plus the ordered cells
/// it governs.
#[derive(Debug, Clone)]
pub struct Checker {
    pub clue: ClueId,
    /// `None` when the pattern failed to compile; the checker then reports
    /// invalid whenever it is eligible.
    pub regex: Option<Regex>,
    /// Coordinates in exact concatenation order
    pub coords: Vec<Coord>,
}

/// A fully derived puzzle: shape, clue table, and checkers.
///
/// Rebuilt wholesale whenever the underlying structure is replaced;
/// immutable in shape thereafter. Cell values live outside the puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub topology: Topology,
    /// Length of each row; hexagonal rows may differ
    pub row_lengths: Vec<usize>,
    pub clues: Vec<Clue>,
    pub checkers: Vec<Checker>,
}

impl Puzzle {
    pub fn row_count(&self) -> usize {
        self.row_lengths.len()
    }

    /// Whether `coord` names an in-bounds cell
    pub fn contains(&self, coord: Coord) -> bool {
        self.row_lengths
            .get(coord.row)
            .is_some_and(|len| coord.col < *len)
    }
}

/// Clue text attached around a single cell, one optional slot per side.
///
/// Grid structures use all four slots on edge cells; hexagonal structures
/// use left, top, and bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellClues {
    pub left: Option<String>,
    pub right: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
}

/// A single cell of the abstract input structure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellSpec {
    /// Initial value; `None` = unfilled
    pub value: Option<char>,
    pub clues: CellClues,
}

impl CellSpec {
    pub fn new(value: Option<char>) -> Self {
        Self {
            value,
            clues: CellClues::default(),
        }
    }
}

/// A row of the abstract input structure
pub type RowSpec = Vec<CellSpec>;

/// The abstract puzzle structure handed in by the environment.
///
/// The engine never reads a live document; an external collaborator builds
/// this structure (for the CLI, from a TOML/JSON file) and delivers it as a
/// structure-replaced event.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleStructure {
    pub topology: Topology,
    pub rows: Vec<RowSpec>,
}

/// Read access to current cell values
pub trait ValueSource {
    /// Current value at `coord`; `None` when unfilled or out of range
    fn value(&self, coord: Coord) -> Option<char>;
}

/// Externally mutable cell values, shaped like the puzzle rows.
///
/// Owned by the session, not the puzzle: checkers hold coordinates, never
/// snapshotted values, so validation always reads current state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellValues {
    rows: Vec<Vec<Option<char>>>,
}

impl CellValues {
    /// Capture the initial values of a structure
    pub fn from_structure(structure: &PuzzleStructure) -> Self {
        Self {
            rows: structure
                .rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.value).collect())
                .collect(),
        }
    }

    /// Set the value at `coord`; returns false when out of range
    pub fn set(&mut self, coord: Coord, value: Option<char>) -> bool {
        match self.rows.get_mut(coord.row).and_then(|r| r.get_mut(coord.col)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl ValueSource for CellValues {
    fn value(&self, coord: Coord) -> Option<char> {
        *self.rows.get(coord.row)?.get(coord.col)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure_with_values(rows: &[&str]) -> PuzzleStructure {
        PuzzleStructure {
            topology: Topology::Grid,
            rows: rows
                .iter()
                .map(|row| {
                    row.chars()
                        .map(|ch| CellSpec::new(if ch == '.' { None } else { Some(ch) }))
                        .collect()
                })
                .collect(),
        }
    }

    #[test]
    fn test_cell_values_read_and_write() {
        let structure = structure_with_values(&["ab", ".d"]);
        let mut values = CellValues::from_structure(&structure);

        assert_eq!(values.value(Coord::new(0, 0)), Some('a'));
        assert_eq!(values.value(Coord::new(1, 0)), None);

        assert!(values.set(Coord::new(1, 0), Some('c')));
        assert_eq!(values.value(Coord::new(1, 0)), Some('c'));

        assert!(values.set(Coord::new(0, 1), None));
        assert_eq!(values.value(Coord::new(0, 1)), None);
    }

    #[test]
    fn test_cell_values_out_of_range() {
        let structure = structure_with_values(&["ab"]);
        let mut values = CellValues::from_structure(&structure);

        assert!(!values.set(Coord::new(2, 0), Some('x')));
        assert_eq!(values.value(Coord::new(0, 5)), None);
        assert_eq!(values.value(Coord::new(9, 9)), None);
    }

    #[test]
    fn test_puzzle_contains() {
        let puzzle = Puzzle {
            topology: Topology::Hexagonal,
            row_lengths: vec![2, 3, 2],
            clues: Vec::new(),
            checkers: Vec::new(),
        };

        assert!(puzzle.contains(Coord::new(1, 2)));
        assert!(!puzzle.contains(Coord::new(0, 2)));
        assert!(!puzzle.contains(Coord::new(3, 0)));
    }

    #[test]
    fn test_placement_display() {
        assert_eq!(CluePlacement::RowLeft(2).to_string(), "row 2 left");
        let placement = CluePlacement::Facet {
            facet: Facet::Top,
            at: Coord::new(0, 3),
        };
        assert_eq!(placement.to_string(), "top facet at (0, 3)");
    }
}
