//! Rewind - terminal tic-tac-toe with move history and time travel.
//!
//! Game rules and the rewindable history live in [`rewind_tictactoe`];
//! this crate adds configuration, the command-line surface, a text replay
//! report, and the interactive terminal UI.
//!
//! # Example
//!
//! ```
//! use rewind_games::{replay, report, HistoryOrder, Position};
//!
//! let moves = [Position::TopLeft, Position::Center, Position::TopCenter];
//! let session = replay(&moves, Some(1), HistoryOrder::Ascending).unwrap();
//! assert!(report(&session).contains("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_LOG_FILTER};

// Crate-level exports - Replay
pub use replay::{parse_moves, replay, report};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, Coordinate, GameSession, HistoryError, HistoryOrder, Outcome, Player, Position,
    PositionError,
};
