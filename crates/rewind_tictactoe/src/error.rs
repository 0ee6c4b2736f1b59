//! Error types for board positions and history navigation.

use super::types::Coordinate;

/// Error returned when navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested index is not a recorded snapshot.
    #[display("History index {index} is out of range (history has {len} entries)")]
    PointerOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Error returned when turning user input into a [`Position`](super::Position).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// Index is not in `0..9`.
    #[display("Position index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// Row or column is not in `0..3`.
    #[display("Coordinate {_0} is out of bounds (row and column must be 0-2)")]
    CoordinateOutOfBounds(Coordinate),

    /// Input is neither an index, a coordinate, nor a label.
    #[display("Cannot parse {_0:?} as a position")]
    Unparsable(String),
}

impl std::error::Error for PositionError {}
