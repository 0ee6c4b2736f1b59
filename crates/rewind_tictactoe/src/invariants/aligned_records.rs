//! Aligned records invariant: one move record per snapshot.

use super::super::{Board, HistoryStore};
use super::Invariant;

/// Invariant: boards and move records line up one-to-one.
///
/// Index 0 is the empty board with no record; every later snapshot has one.
pub struct AlignedRecordsInvariant;

impl Invariant<HistoryStore> for AlignedRecordsInvariant {
    fn holds(history: &HistoryStore) -> bool {
        if history.boards.len() != history.moves.len() {
            return false;
        }

        match (history.boards.first(), history.moves.first()) {
            (Some(board), Some(None)) if *board == Board::new() => {}
            _ => return false,
        }

        history.moves[1..].iter().all(Option::is_some)
    }

    fn description() -> &'static str {
        "Every snapshot after the first has exactly one move record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Player, Position, apply_move};

    #[test]
    fn test_new_history_holds() {
        assert!(AlignedRecordsInvariant::holds(&HistoryStore::new()));
    }

    #[test]
    fn test_missing_record_violates() {
        let mut history = HistoryStore::new();
        history
            .boards
            .push(apply_move(&Board::new(), Position::Center, Player::X));
        assert!(!AlignedRecordsInvariant::holds(&history));

        history.moves.push(None);
        assert!(!AlignedRecordsInvariant::holds(&history));
    }

    #[test]
    fn test_record_on_starting_board_violates() {
        let mut history = HistoryStore::new();
        history.moves[0] = Some(Coordinate::new(0, 0));
        assert!(!AlignedRecordsInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut history = HistoryStore::new();
        history.boards[0] = apply_move(&Board::new(), Position::Center, Player::X);
        assert!(!AlignedRecordsInvariant::holds(&history));
    }
}
