//! Puzzle document model
//!
//! Puzzles are JSON documents keyed by direction. Each direction maps a clue
//! number to a [`ClueEntry`] carrying the clue text, the answer, and the cell
//! the answer starts in:
//!
//! ```json
//! {
//!   "across": { "1": { "clue": "Central processor", "answer": "CPU", "row": 0, "col": 0 } },
//!   "down":   { "1": { "clue": "Disc format", "answer": "CD", "row": 0, "col": 0 } },
//!   "circles": [[0, 2]]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted grid, in cells along either side
pub const MAX_GRID_SIZE: usize = 100;

/// Clue numbers must fit the three-character label on a grid cell
pub const MAX_CLUE_NUMBER: u32 = 999;

/// Clue direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Row/column step for moving one cell along this direction
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Title-case label for headings
    pub fn label(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A single clue and the answer it describes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClueEntry {
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
}

impl ClueEntry {
    /// Cell holding the final letter, `None` if it is not addressable
    fn last_cell(&self, direction: Direction) -> Option<(usize, usize)> {
        let span = self.answer.chars().count().checked_sub(1)?;
        let (dr, dc) = direction.step();
        Some((
            self.row.checked_add(dr * span)?,
            self.col.checked_add(dc * span)?,
        ))
    }
}

/// A complete puzzle document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PuzzleData {
    /// Optional display title, used as the catalog label for user puzzles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub across: BTreeMap<u32, ClueEntry>,

    #[serde(default)]
    pub down: BTreeMap<u32, ClueEntry>,

    /// Highlighted cells as `[row, col]` pairs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub circles: Vec<(usize, usize)>,
}

impl PuzzleData {
    /// Parse and validate a puzzle document.
    ///
    /// `source_name` only labels errors (a file name or bundled id).
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let mut data: PuzzleData = serde_json::from_str(json)
            .map_err(|e| Error::puzzle_parse(source_name, e.to_string()))?;
        data.normalize();
        data.validate()
            .map_err(|message| Error::puzzle_parse(source_name, message))?;
        Ok(data)
    }

    /// Clues for one direction, ordered by number
    pub fn clues(&self, direction: Direction) -> &BTreeMap<u32, ClueEntry> {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Look up a clue by direction and number
    pub fn clue(&self, direction: Direction, number: u32) -> Option<&ClueEntry> {
        self.clues(direction).get(&number)
    }

    /// Grid size as `(rows, cols)`, derived from the extent of every answer
    pub fn dimensions(&self) -> (usize, usize) {
        let mut rows = 0;
        let mut cols = 0;
        for (direction, _, entry) in self.entries() {
            let len = entry.answer.chars().count();
            match direction {
                Direction::Across => {
                    rows = rows.max(entry.row.saturating_add(1));
                    cols = cols.max(entry.col.saturating_add(len));
                }
                Direction::Down => {
                    rows = rows.max(entry.row.saturating_add(len));
                    cols = cols.max(entry.col.saturating_add(1));
                }
            }
        }
        (rows, cols)
    }

    /// Every clue in both directions, across first
    pub fn entries(&self) -> impl Iterator<Item = (Direction, u32, &ClueEntry)> {
        self.across
            .iter()
            .map(|(n, e)| (Direction::Across, *n, e))
            .chain(self.down.iter().map(|(n, e)| (Direction::Down, *n, e)))
    }

    /// Whether the document has no clues at all
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    fn normalize(&mut self) {
        for entry in self.across.values_mut().chain(self.down.values_mut()) {
            entry.answer = entry.answer.trim().to_uppercase();
        }
    }

    /// Checks that every answer is non-empty ASCII alphanumeric, fits inside
    /// [`MAX_GRID_SIZE`], and that crossing answers agree on shared cells.
    fn validate(&self) -> std::result::Result<(), String> {
        if self.is_empty() {
            return Err("puzzle has no clues".to_string());
        }

        let mut letters: BTreeMap<(usize, usize), (char, Direction, u32)> = BTreeMap::new();
        for (direction, number, entry) in self.entries() {
            if number > MAX_CLUE_NUMBER {
                return Err(format!(
                    "clue number {number} is above the limit of {MAX_CLUE_NUMBER}"
                ));
            }
            if entry.answer.is_empty() {
                return Err(format!("{number} {direction} has an empty answer"));
            }
            // Only keys the grid accepts as entries
            if let Some(bad) = entry.answer.chars().find(|c| !c.is_ascii_alphanumeric()) {
                return Err(format!(
                    "{number} {direction} contains unsupported character '{bad}'"
                ));
            }

            let (last_row, last_col) = entry.last_cell(direction).ok_or_else(|| {
                format!("{number} {direction} runs past the largest grid position")
            })?;
            if last_row >= MAX_GRID_SIZE || last_col >= MAX_GRID_SIZE {
                return Err(format!(
                    "{number} {direction} ends at row {last_row} col {last_col}, \
                     outside the {MAX_GRID_SIZE}x{MAX_GRID_SIZE} limit"
                ));
            }

            let (dr, dc) = direction.step();
            for (i, letter) in entry.answer.chars().enumerate() {
                let cell = (entry.row + dr * i, entry.col + dc * i);
                match letters.get(&cell) {
                    Some((existing, other_dir, other_num)) if *existing != letter => {
                        return Err(format!(
                            "{number} {direction} puts '{letter}' at row {} col {} but \
                             {other_num} {other_dir} puts '{existing}' there",
                            cell.0, cell.1
                        ));
                    }
                    Some(_) => {}
                    None => {
                        letters.insert(cell, (letter, direction, number));
                    }
                }
            }
        }
        Ok(())
    }
}
