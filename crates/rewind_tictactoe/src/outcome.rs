//! Derived game status.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Three cells whose equal marks decide a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// Positions on the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Status of a board.
///
/// Never stored alongside a board; always recomputed with
/// [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning mark.
        mark: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Every square is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, .. } => write!(f, "Winner: {}", mark),
            Outcome::Draw => write!(f, "Draw Game"),
        }
    }
}

/// Status line for a board: the result when the game is over, otherwise
/// whose turn it is.
pub fn status_text(outcome: &Outcome, next: Player) -> String {
    match outcome {
        Outcome::InProgress => format!("Next player: {}", next),
        over => over.to_string(),
    }
}
