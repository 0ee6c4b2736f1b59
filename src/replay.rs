//! Non-interactive replay of a move sequence.

use rewind_tictactoe::{GameSession, HistoryError, HistoryOrder, Position, PositionError};
use tracing::{debug, info, instrument};

/// Parses each move as an index, a `row,col` pair, or a position label.
#[instrument(skip(raw), fields(count = raw.len()))]
pub fn parse_moves(raw: &[String]) -> Result<Vec<Position>, PositionError> {
    raw.iter().map(|s| s.parse::<Position>()).collect()
}

/// Plays `moves` in a fresh session, then optionally jumps to a snapshot.
///
/// Illegal moves are skipped just as the interactive board skips them.
///
/// # Errors
///
/// Returns [`HistoryError::PointerOutOfRange`] if `jump` is past the end of
/// the recorded history.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(
    moves: &[Position],
    jump: Option<usize>,
    order: HistoryOrder,
) -> Result<GameSession, HistoryError> {
    let mut session = GameSession::with_order(order);

    for pos in moves {
        let before = session.history().len();
        session.play(pos.to_index());
        if session.history().len() == before {
            debug!(%pos, "Move skipped");
        }
    }

    if let Some(index) = jump {
        session.jump_to(index)?;
    }

    info!(
        snapshots = session.history().len(),
        pointer = session.history().pointer(),
        "Replay finished"
    );
    Ok(session)
}

/// Renders the active board, the status line and the move list as text.
///
/// The active row of the move list is marked with `>`.
pub fn report(session: &GameSession) -> String {
    let mut out = session.board().display();
    out.push_str("\n\n");
    out.push_str(&session.status());
    out.push('\n');

    if let Some(line) = session.outcome().winning_line() {
        let [a, b, c] = line.indices();
        out.push_str(&format!("Winning line: {}, {}, {}\n", a, b, c));
    }

    out.push('\n');
    out.push_str(session.toggle_label());
    out.push('\n');
    for item in session.move_list() {
        let marker = if item.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, item.label()));
    }
    out
}
