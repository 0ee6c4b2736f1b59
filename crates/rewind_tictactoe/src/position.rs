//! Named cells of the tic-tac-toe board.

use super::error::PositionError;
use super::types::Coordinate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Index `i` maps to row `i / 3` and column `i % 3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row and column of this position.
    pub fn coordinate(self) -> Coordinate {
        let index = self.to_index();
        Coordinate::new(index / 3, index % 3)
    }

    /// Creates position from a row and column.
    pub fn from_coordinate(coordinate: Coordinate) -> Option<Self> {
        if coordinate.row >= 3 || coordinate.col >= 3 {
            return None;
        }
        Self::from_index(coordinate.row * 3 + coordinate.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses an index (`"4"`), a coordinate (`"1,1"` or `"(1, 1)"`), or a
    /// label (`"center"`, case-insensitive).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or(PositionError::OutOfBounds(index));
        }

        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        if let Some((row, col)) = inner.split_once(',') {
            let parsed = (row.trim().parse::<usize>(), col.trim().parse::<usize>());
            if let (Ok(row), Ok(col)) = parsed {
                let coordinate = Coordinate::new(row, col);
                return Self::from_coordinate(coordinate)
                    .ok_or(PositionError::CoordinateOutOfBounds(coordinate));
            }
            return Err(PositionError::Unparsable(s.to_string()));
        }

        let lower = trimmed.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == lower)
            .ok_or_else(|| PositionError::Unparsable(s.to_string()))
    }
}
