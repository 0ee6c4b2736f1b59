//! Rewindable move history.
//!
//! The history is a single linear timeline of board snapshots. Index 0 is
//! always the empty board. Each later snapshot is paired with the
//! coordinate of the move that produced it. A pointer selects the active
//! snapshot; moving it never changes the timeline, while appending after
//! moving back discards everything past the pointer first.

use super::error::HistoryError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::types::{Board, Coordinate, Player};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One snapshot of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Position in the timeline (0 is the starting board).
    pub index: usize,
    /// Board at this point.
    pub board: Board,
    /// Move that produced this board; `None` for the starting board.
    pub coordinate: Option<Coordinate>,
}

/// Ordered board snapshots plus a pointer to the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    pub(crate) boards: Vec<Board>,
    pub(crate) moves: Vec<Option<Coordinate>>,
    pub(crate) pointer: usize,
}

impl HistoryStore {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            moves: vec![None],
            pointer: 0,
        }
    }

    /// Records a new snapshot after the active one.
    ///
    /// Snapshots past the pointer are discarded first, then `board` is
    /// pushed and becomes active. The board is not validated here; use
    /// [`is_legal`](crate::is_legal) before building it. Debug builds check
    /// the history invariants afterwards.
    #[instrument(skip(self, board), fields(pointer = self.pointer, len = self.boards.len()))]
    pub fn append(&mut self, board: Board, coordinate: Coordinate) {
        let keep = self.pointer + 1;
        if keep < self.boards.len() {
            debug!(
                discarded = self.boards.len() - keep,
                "Discarding snapshots past the pointer"
            );
        }
        self.boards.truncate(keep);
        self.moves.truncate(keep);

        self.boards.push(board);
        self.moves.push(Some(coordinate));
        self.pointer = self.boards.len() - 1;

        debug!(pointer = self.pointer, %coordinate, "Snapshot appended");

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after append: {:?}",
            HistoryInvariants::check_all(self)
        );
    }

    /// Makes the snapshot at `index` active.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PointerOutOfRange`] if `index` is not a
    /// recorded snapshot. The pointer is left unchanged in that case.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn set_pointer(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.boards.len() {
            warn!(index, "Pointer request outside history");
            return Err(HistoryError::PointerOutOfRange {
                index,
                len: self.boards.len(),
            });
        }

        self.pointer = index;
        debug!(pointer = index, "Pointer moved");
        Ok(())
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> HistoryEntry {
        self.entry(self.pointer)
    }

    /// Returns the snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<HistoryEntry> {
        (index < self.boards.len()).then(|| self.entry(index))
    }

    /// Iterates the whole timeline from the starting board.
    ///
    /// Call `.rev()` to walk it newest first.
    pub fn entries(
        &self,
    ) -> impl DoubleEndedIterator<Item = HistoryEntry> + ExactSizeIterator + '_ {
        self.boards
            .iter()
            .zip(self.moves.iter())
            .enumerate()
            .map(|(index, (board, coordinate))| HistoryEntry {
                index,
                board: *board,
                coordinate: *coordinate,
            })
    }

    /// Returns to the single empty board.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("History reset");
    }

    /// Index of the active snapshot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of recorded snapshots (always at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns true if the pointer is at the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.pointer + 1 == self.boards.len()
    }

    /// Player to move on the active snapshot, derived from the pointer.
    pub fn next_mark(&self) -> Player {
        Player::for_ply(self.pointer)
    }

    fn entry(&self, index: usize) -> HistoryEntry {
        HistoryEntry {
            index,
            board: self.boards[index],
            coordinate: self.moves[index],
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
