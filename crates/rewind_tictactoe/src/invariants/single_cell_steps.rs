//! Single cell steps invariant: each snapshot fills exactly one square.

use super::super::{Board, HistoryStore};
use super::Invariant;

/// Invariant: consecutive snapshots differ by one newly filled square.
///
/// The move record of each snapshot names that square.
pub struct SingleCellStepsInvariant;

impl Invariant<HistoryStore> for SingleCellStepsInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history
            .boards
            .windows(2)
            .zip(history.moves.iter().skip(1))
            .all(|(pair, record)| match Board::changed_cell(&pair[0], &pair[1]) {
                Some(pos) => *record == Some(pos.coordinate()),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square, at its recorded coordinate"
    }
}
