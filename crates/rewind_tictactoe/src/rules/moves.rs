//! Move legality and application.

use super::super::{Board, Outcome, Player, Position, Square};
use super::evaluate;
use tracing::{instrument, trace};

/// Returns true if a mark may be placed at `index`.
///
/// A move is legal when the index is on the board, the square is empty,
/// and the game on `board` is still in progress.
#[instrument(skip(board))]
pub fn is_legal(board: &Board, index: usize) -> bool {
    let Some(pos) = Position::from_index(index) else {
        trace!(index, "Index off the board");
        return false;
    };

    if !board.is_empty(pos) {
        trace!(%pos, "Square already occupied");
        return false;
    }

    evaluate(board) == Outcome::InProgress
}

/// Returns a new board with `mark` placed at `pos`.
///
/// The input board is left untouched. No legality check is made here;
/// callers confirm the move with [`is_legal`] first.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, pos: Position, mark: Player) -> Board {
    board.with(pos, Square::Occupied(mark))
}

/// Positions where a move is currently legal, in index order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    if evaluate(board).is_over() {
        return Vec::new();
    }
    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_all_legal() {
        let board = Board::new();
        assert!((0..9).all(|i| is_legal(&board, i)));
        assert_eq!(legal_moves(&board).len(), 9);
    }

    #[test]
    fn test_out_of_range_is_illegal() {
        assert!(!is_legal(&Board::new(), 9));
        assert!(!is_legal(&Board::new(), usize::MAX));
    }

    #[test]
    fn test_occupied_square_is_illegal() {
        let board = apply_move(&Board::new(), Position::TopLeft, Player::X);
        assert!(!is_legal(&board, 0));
        assert!(is_legal(&board, 1));
        assert!(!legal_moves(&board).contains(&Position::TopLeft));
    }

    #[test]
    fn test_no_moves_after_win() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, pos| apply_move(&b, pos, Player::X));

        assert!((0..9).all(|i| !is_legal(&board, i)));
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = Board::new();
        let next = apply_move(&board, Position::Center, Player::O);

        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(next.occupied_count(), 1);
    }
}
