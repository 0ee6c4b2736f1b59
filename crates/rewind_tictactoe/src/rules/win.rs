//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square, WinningLine};
use tracing::instrument;

/// The eight lines in evaluation order.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first complete line on the board.
///
/// Returns the mark and the line, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => Some((mark, line)),
            _ => None,
        }
    })
}
