//! A single player's game: rules plus history behind one handle.

use super::error::HistoryError;
use super::history::{HistoryEntry, HistoryStore};
use super::outcome::{status_text, Outcome};
use super::position::Position;
use super::rules::{apply_move, evaluate, is_legal};
use super::types::{Board, Coordinate, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HistoryOrder {
    /// Starting board first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// History index this row jumps to.
    pub index: usize,
    /// Move that produced the snapshot; `None` for the starting board.
    pub coordinate: Option<Coordinate>,
    /// Whether this is the active snapshot.
    pub is_current: bool,
}

impl MoveListItem {
    /// Text shown for the row.
    pub fn label(&self) -> String {
        match (self.index, self.coordinate) {
            (0, _) | (_, None) => "Go to game start".to_string(),
            (n, Some(coordinate)) if self.is_current => {
                format!("You are at move #{}, Position: {}", n, coordinate)
            }
            (n, Some(coordinate)) => format!("Go to move #{}, Position: {}", n, coordinate),
        }
    }
}

/// A game with history and time travel.
///
/// Illegal moves are ignored without changing any state, the same way a
/// board ignores clicks on filled squares or after the game has ended.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    history: HistoryStore,
    order: HistoryOrder,
}

impl GameSession {
    /// Creates a session at the empty board with the move list ascending.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game session");
        Self::default()
    }

    /// Creates a session with the given move list order.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: HistoryStore::new(),
            order,
        }
    }

    /// Plays the player to move at `index` (0-8) on the active board.
    ///
    /// Does nothing if the move is illegal. Playing after jumping back
    /// discards the snapshots that followed.
    #[instrument(skip(self), fields(pointer = self.history.pointer()))]
    pub fn play(&mut self, index: usize) {
        let board = self.history.current().board;
        let Some(pos) = Position::from_index(index).filter(|_| is_legal(&board, index)) else {
            debug!(index, "Ignoring illegal move");
            return;
        };

        let mark = self.history.next_mark();
        let next = apply_move(&board, pos, mark);
        self.history.append(next, pos.coordinate());

        info!(%mark, %pos, outcome = %evaluate(&next), "Move played");
    }

    /// Makes the snapshot at `index` active.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::PointerOutOfRange`] if `index` was never
    /// recorded.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.set_pointer(index)
    }

    /// Moves one snapshot back; does nothing at the starting board.
    pub fn step_back(&mut self) {
        if let Some(index) = self.history.pointer().checked_sub(1) {
            // In range by construction.
            let _ = self.history.set_pointer(index);
        }
    }

    /// Moves one snapshot forward; does nothing at the newest snapshot.
    pub fn step_forward(&mut self) {
        if !self.history.is_at_latest() {
            let _ = self.history.set_pointer(self.history.pointer() + 1);
        }
    }

    /// Starts over from the empty board, keeping the move list order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.reset();
        info!("Game reset");
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = %self.order, "Move list order changed");
    }

    /// Current move list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Underlying history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Active snapshot.
    pub fn current(&self) -> HistoryEntry {
        self.history.current()
    }

    /// Active board.
    pub fn board(&self) -> Board {
        self.history.current().board
    }

    /// Player to move on the active board.
    pub fn next_mark(&self) -> Player {
        self.history.next_mark()
    }

    /// Outcome of the active board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board())
    }

    /// Status line for the active board.
    pub fn status(&self) -> String {
        status_text(&self.outcome(), self.next_mark())
    }

    /// Move list rows in the current order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let pointer = self.history.pointer();
        let rows = self.history.entries().map(|entry| MoveListItem {
            index: entry.index,
            coordinate: entry.coordinate,
            is_current: entry.index == pointer,
        });

        match self.order {
            HistoryOrder::Ascending => rows.collect(),
            HistoryOrder::Descending => rows.rev().collect(),
        }
    }

    /// Text for the control that flips the move list order.
    pub fn toggle_label(&self) -> &'static str {
        match self.order {
            HistoryOrder::Ascending => "Sort in descending order",
            HistoryOrder::Descending => "Sort in ascending order",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alternates_marks() {
        let mut session = GameSession::new();
        session.play(4);
        session.play(0);

        let board = session.board();
        assert_eq!(board.get(Position::Center).mark(), Some(Player::X));
        assert_eq!(board.get(Position::TopLeft).mark(), Some(Player::O));
        assert_eq!(session.next_mark(), Player::X);
    }

    #[test]
    fn test_illegal_moves_are_ignored() {
        let mut session = GameSession::new();
        session.play(4);
        let before = session.history().clone();

        session.play(4);
        session.play(9);
        assert_eq!(session.history(), &before);
    }

    #[test]
    fn test_step_back_and_forward_clamp_at_ends() {
        let mut session = GameSession::new();
        session.step_back();
        assert_eq!(session.current().index, 0);

        session.play(0);
        session.play(1);
        session.step_forward();
        assert_eq!(session.current().index, 2);

        session.step_back();
        session.step_back();
        session.step_back();
        assert_eq!(session.current().index, 0);

        session.step_forward();
        assert_eq!(session.current().index, 1);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_labels() {
        let mut session = GameSession::new();
        session.play(5);
        session.play(6);
        session.jump_to(1).unwrap();

        let labels: Vec<String> = session.move_list().iter().map(MoveListItem::label).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "You are at move #1, Position: (1, 2)".to_string(),
                "Go to move #2, Position: (2, 0)".to_string(),
            ]
        );
    }

    #[test]
    fn test_start_row_label_when_current() {
        let session = GameSession::new();
        let rows = session.move_list();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_current);
        assert_eq!(rows[0].label(), "Go to game start");
    }

    #[test]
    fn test_toggle_order() {
        let mut session = GameSession::new();
        session.play(0);
        session.play(1);

        assert_eq!(session.toggle_label(), "Sort in descending order");
        session.toggle_order();
        assert_eq!(session.order(), HistoryOrder::Descending);
        assert_eq!(session.toggle_label(), "Sort in ascending order");

        let indices: Vec<usize> = session.move_list().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_reset_keeps_order() {
        let mut session = GameSession::with_order(HistoryOrder::Descending);
        session.play(0);
        session.reset();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.order(), HistoryOrder::Descending);
    }

    #[test]
    fn test_order_serde_names() {
        assert_eq!(HistoryOrder::Descending.to_string(), "descending");
        let parsed: HistoryOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(parsed, HistoryOrder::Ascending);
    }
}
