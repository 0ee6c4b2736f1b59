//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Legality and evaluation are
//! queries; [`apply_move`] is the only function that produces a new board
//! and it performs no validation of its own.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::{apply_move, is_legal, legal_moves};
pub use win::{winning_line, LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// Lines are checked in a fixed order (rows top to bottom, columns left to
/// right, then the two diagonals) and the first complete line wins. A board
/// with no complete line is a draw once every square is filled.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Win { mark, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
