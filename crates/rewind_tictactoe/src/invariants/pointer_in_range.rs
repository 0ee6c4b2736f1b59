//! Pointer range invariant.

use super::super::HistoryStore;
use super::Invariant;

/// Invariant: the pointer selects a recorded snapshot.
pub struct PointerInRangeInvariant;

impl Invariant<HistoryStore> for PointerInRangeInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history.pointer < history.boards.len()
    }

    fn description() -> &'static str {
        "Pointer lies within the recorded history"
    }
}
