//! Puzzle File Schema
//!
//! serde types matching the on-disk puzzle description (TOML or JSON) and
//! conversion into the abstract structure consumed by derivation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::puzzle::model::{CellSpec, PuzzleStructure, RowSpec, Topology};

/// Root puzzle file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PuzzleFile {
    pub puzzle: PuzzleMeta,
    #[serde(default)]
    pub rows: Vec<RowDef>,
}

/// Puzzle metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PuzzleMeta {
    pub name: Option<String>,
    pub description: Option<String>,
    pub topology: TopologyDef,
}

/// Topology as written in puzzle files
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TopologyDef {
    Grid,
    Hexagonal,
}

impl From<TopologyDef> for Topology {
    fn from(def: TopologyDef) -> Self {
        match def {
            TopologyDef::Grid => Topology::Grid,
            TopologyDef::Hexagonal => Topology::Hexagonal,
        }
    }
}

/// One row of cells with its optional clues.
///
/// `left`/`right` sit at the row's ends (right is meaningful for grids
/// only); `top`/`bottom` are per-cell, aligned with `values`. An empty
/// string in any clue slot means "no clue".
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RowDef {
    /// Cell values; "" = unfilled, otherwise exactly one character
    pub values: Vec<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub top: Option<Vec<String>>,
    pub bottom: Option<Vec<String>>,
}

impl PuzzleFile {
    /// Convert the file representation into an abstract structure,
    /// validating cell values and clue alignment.
    pub fn into_structure(self) -> Result<PuzzleStructure, String> {
        let topology = Topology::from(self.puzzle.topology);
        let mut rows = Vec::with_capacity(self.rows.len());

        for (r, row_def) in self.rows.into_iter().enumerate() {
            rows.push(convert_row(r, row_def)?);
        }

        if topology == Topology::Grid {
            let mut lengths = rows.iter().map(Vec::len);
            if let Some(first) = lengths.next() {
                if lengths.any(|len| len != first) {
                    return Err("grid rows must all have the same length".to_string());
                }
            }
        }

        Ok(PuzzleStructure { topology, rows })
    }
}

fn convert_row(r: usize, def: RowDef) -> Result<RowSpec, String> {
    let mut row: RowSpec = Vec::with_capacity(def.values.len());

    for (c, value) in def.values.iter().enumerate() {
        let mut chars = value.chars();
        let first = chars.next();
        if chars.next().is_some() {
            return Err(format!(
                "row {r} cell {c}: value '{value}' holds more than one character"
            ));
        }
        row.push(CellSpec::new(first));
    }

    for (side, clues) in [("top", def.top), ("bottom", def.bottom)] {
        let Some(clues) = clues else { continue };
        if clues.len() > row.len() {
            return Err(format!(
                "row {r}: {} {side} clues for {} cells",
                clues.len(),
                row.len()
            ));
        }
        for (c, clue) in clues.into_iter().enumerate() {
            if clue.is_empty() {
                continue;
            }
            match side {
                "top" => row[c].clues.top = Some(clue),
                _ => row[c].clues.bottom = Some(clue),
            }
        }
    }

    if let Some(left) = def.left {
        match row.first_mut() {
            Some(cell) => cell.clues.left = Some(left),
            None => return Err(format!("row {r}: left clue on an empty row")),
        }
    }
    if let Some(right) = def.right {
        match row.last_mut() {
            Some(cell) => cell.clues.right = Some(right),
            None => return Err(format!("row {r}: right clue on an empty row")),
        }
    }

    Ok(row)
}

/// Load a puzzle description from disk, dispatching on the file extension
/// (`.json` is JSON, anything else is TOML).
pub fn load_puzzle_file(path: &Path) -> Result<PuzzleStructure> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.display()))?;

    let file: PuzzleFile = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse puzzle JSON: {}", path.display()))?,
        _ => toml::from_str(&content)
            .with_context(|| format!("Failed to parse puzzle TOML: {}", path.display()))?,
    };

    file.into_structure()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid puzzle description: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::model::{CellValues, Coord, ValueSource};

    const GRID_TOML: &str = r#"
[puzzle]
name = "example"
topology = "grid"

[[rows]]
values = ["c", "a", "t"]
left = "cat"
top = ["c.", "", "t."]

[[rows]]
values = ["", "r", "o"]
right = ".ro"
bottom = ["", "ar", "to"]
"#;

    #[test]
    fn test_parse_grid_toml() {
        let file: PuzzleFile = toml::from_str(GRID_TOML).expect("parse");
        let structure = file.into_structure().expect("convert");

        assert_eq!(structure.topology, Topology::Grid);
        assert_eq!(structure.rows.len(), 2);
        assert_eq!(structure.rows[0][0].value, Some('c'));
        assert_eq!(structure.rows[1][0].value, None);
        assert_eq!(structure.rows[0][0].clues.left.as_deref(), Some("cat"));
        assert_eq!(structure.rows[0][0].clues.top.as_deref(), Some("c."));
        assert_eq!(structure.rows[0][1].clues.top, None);
        assert_eq!(structure.rows[1][2].clues.right.as_deref(), Some(".ro"));
        assert_eq!(structure.rows[1][1].clues.bottom.as_deref(), Some("ar"));

        let values = CellValues::from_structure(&structure);
        assert_eq!(values.value(Coord::new(0, 2)), Some('t'));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "puzzle": { "topology": "hexagonal" },
            "rows": [
                { "values": ["a", "b"], "left": "ab" },
                { "values": ["c", "d", "e"] },
                { "values": ["f", "g"] }
            ]
        }"#;
        let file: PuzzleFile = serde_json::from_str(json).expect("parse");
        let structure = file.into_structure().expect("convert");

        assert_eq!(structure.topology, Topology::Hexagonal);
        assert_eq!(structure.rows[1].len(), 3);
    }

    #[test]
    fn test_multi_char_value_rejected() {
        let file: PuzzleFile = toml::from_str(
            r#"
[puzzle]
topology = "grid"

[[rows]]
values = ["ab"]
"#,
        )
        .expect("parse");

        let err = file.into_structure().expect_err("multi-char value");
        assert!(err.contains("more than one character"), "got: {err}");
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let file: PuzzleFile = toml::from_str(
            r#"
[puzzle]
topology = "grid"

[[rows]]
values = ["a", "b"]

[[rows]]
values = ["c"]
"#,
        )
        .expect("parse");

        let err = file.into_structure().expect_err("ragged grid");
        assert!(err.contains("same length"), "got: {err}");
    }

    #[test]
    fn test_ragged_hexagonal_allowed() {
        let file: PuzzleFile = toml::from_str(
            r#"
[puzzle]
topology = "hexagonal"

[[rows]]
values = ["a", "b"]

[[rows]]
values = ["c"]
"#,
        )
        .expect("parse");

        assert!(file.into_structure().is_ok());
    }

    #[test]
    fn test_misaligned_clues_rejected() {
        let file: PuzzleFile = toml::from_str(
            r#"
[puzzle]
topology = "grid"

[[rows]]
values = ["a"]
top = ["x", "y"]
"#,
        )
        .expect("parse");

        let err = file.into_structure().expect_err("too many top clues");
        assert!(err.contains("top clues"), "got: {err}");
    }
}
