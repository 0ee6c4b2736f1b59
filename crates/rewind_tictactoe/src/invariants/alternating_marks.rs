//! Alternating marks invariant: X, O, X, O, ...

use super::super::{Board, HistoryStore, Player};
use super::Invariant;

/// Invariant: marks alternate along the timeline, starting with X.
///
/// The snapshot at index `k` was produced by the player to move at ply
/// `k - 1`.
pub struct AlternatingMarksInvariant;

impl Invariant<HistoryStore> for AlternatingMarksInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history
            .boards
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| {
                Board::changed_cell(&pair[0], &pair[1])
                    .and_then(|pos| pair[1].get(pos).mark())
                    .is_some_and(|mark| mark == Player::for_ply(ply))
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... along the timeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, apply_move};

    #[test]
    fn test_alternating_holds() {
        let mut history = HistoryStore::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            let board = apply_move(&history.current().board, pos, history.next_mark());
            history.append(board, pos.coordinate());
        }
        assert!(AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let mut history = HistoryStore::new();
        history
            .boards
            .push(apply_move(&Board::new(), Position::Center, Player::O));
        history.moves.push(Some(Position::Center.coordinate()));
        assert!(!AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_mark_violates() {
        let mut history = HistoryStore::new();
        let first = apply_move(&Board::new(), Position::Center, Player::X);
        let second = apply_move(&first, Position::TopLeft, Player::X);
        history.boards.extend([first, second]);
        history.moves.extend([
            Some(Position::Center.coordinate()),
            Some(Position::TopLeft.coordinate()),
        ]);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }
}
