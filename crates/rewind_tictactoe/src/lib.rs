//! Tic-tac-toe rules and a rewindable move history.
//!
//! The crate is split into two layers:
//!
//! - **Rules**: pure functions over a [`Board`] snapshot ([`is_legal`],
//!   [`apply_move`], [`evaluate`]).
//! - **History**: a [`HistoryStore`] holding every snapshot of the game
//!   together with the coordinate of the move that produced it, plus a
//!   pointer that can travel back and forth along the timeline.
//!
//! [`GameSession`] ties the two together for a front end.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! for index in [0, 4, 1, 5, 2] {
//!     session.play(index);
//! }
//! assert_eq!(session.outcome().winner(), Some(Player::X));
//!
//! // Travel back to the position after the first move.
//! session.jump_to(1).unwrap();
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::{HistoryError, PositionError};
pub use history::{HistoryEntry, HistoryStore};
pub use outcome::{status_text, Outcome, WinningLine};
pub use position::Position;
pub use rules::{apply_move, evaluate, is_legal, legal_moves};
pub use session::{GameSession, HistoryOrder, MoveListItem};
pub use types::{Board, Coordinate, Player, Square};

/// Alias used where the player is referred to by the symbol they place.
pub type Mark = Player;
