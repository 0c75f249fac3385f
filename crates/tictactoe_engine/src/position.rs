//! Validated board coordinates.

use super::error::PositionError;
use super::types::{CELLS, SIDE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, addressed by `(row, col)` with both in `0..3`.
///
/// A `Position` can only be built from in-range coordinates, so every
/// engine operation that takes one can index the board without checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Self = Self::at(0, 0);
    /// Top-center (0, 1)
    pub const TOP_CENTER: Self = Self::at(0, 1);
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Self = Self::at(0, 2);
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Self = Self::at(1, 0);
    /// Center (1, 1)
    pub const CENTER: Self = Self::at(1, 1);
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Self = Self::at(1, 2);
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Self = Self::at(2, 0);
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Self = Self::at(2, 1);
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Self = Self::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; CELLS] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::CENTER,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, rejecting coordinates outside the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, PositionError> {
        if row >= SIDE || col >= SIDE {
            return Err(PositionError::OutOfBounds { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Creates a position from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * SIDE + self.col()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; CELLS] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

/// Parses `"row col"` or `"row,col"`.
impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || PositionError::Parse {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(parse_error());
        };
        let row = row.parse::<usize>().map_err(|_| parse_error())?;
        let col = col.parse::<usize>().map_err(|_| parse_error())?;
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
