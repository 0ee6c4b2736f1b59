//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game, identified by the mark they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `ply` moves.
    ///
    /// Even plies belong to X, odd plies to O.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Row and column of a move, each in `0..3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every change produces a new board, so a
/// snapshot stored in history can never be altered through another handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, or `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `pos` set to `square`.
    #[must_use]
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Finds the single square that went from empty to occupied between
    /// `before` and `after`.
    ///
    /// Returns `None` unless exactly one square differs and that change
    /// fills an empty square.
    pub fn changed_cell(before: &Board, after: &Board) -> Option<Position> {
        let mut changed = Position::ALL
            .into_iter()
            .filter(|pos| before.get(*pos) != after.get(*pos));

        let pos = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (before.get(pos), after.get(pos)) {
            (Square::Empty, Square::Occupied(_)) => Some(pos),
            _ => None,
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares are shown as `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_ply_alternates() {
        assert_eq!(Player::for_ply(0), Player::X);
        assert_eq!(Player::for_ply(1), Player::O);
        assert_eq!(Player::for_ply(8), Player::X);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Square::Occupied(Player::X));

        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_get_index_out_of_range() {
        assert_eq!(Board::new().get_index(9), None);
        assert_eq!(Board::new().get_index(8), Some(Square::Empty));
    }

    #[test]
    fn test_changed_cell_single_placement() {
        let before = Board::new();
        let after = before.with(Position::MiddleRight, Square::Occupied(Player::O));
        assert_eq!(Board::changed_cell(&before, &after), Some(Position::MiddleRight));
    }

    #[test]
    fn test_changed_cell_rejects_two_changes_and_overwrites() {
        let before = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));

        let two = before
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomRight, Square::Occupied(Player::X));
        assert_eq!(Board::changed_cell(&before, &two), None);

        let overwrite = before.with(Position::TopLeft, Square::Occupied(Player::O));
        assert_eq!(Board::changed_cell(&before, &overwrite), None);

        assert_eq!(Board::changed_cell(&before, &before), None);
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(2, 1).to_string(), "(2, 1)");
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
