//! Application state and key handling.

use super::input::{digit_index, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, Position};
use tracing::{debug, instrument, warn};

/// Pane receiving arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor.
    Board,
    /// Arrows select a row in the move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates an application around a session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        };
        app.select_current();
        app
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.select_current();
            }
            KeyCode::Char('s') => {
                self.session.toggle_order();
                self.select_current();
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.select_current();
            }
            KeyCode::Char('[') => {
                self.session.step_back();
                self.select_current();
            }
            KeyCode::Char(']') => {
                self.session.step_forward();
                self.select_current();
            }
            KeyCode::Char(c) if digit_index(c).is_some() => {
                if let Some(index) = digit_index(c) {
                    self.play(index);
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            key => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let rows = self.session.move_list();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = rows.get(self.selected) {
                    if let Err(e) = self.session.jump_to(row.index) {
                        warn!(error = %e, "Move list row points outside history");
                    }
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, index: usize) {
        debug!(index, "Playing");
        self.session.play(index);
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
        self.select_current();
    }

    /// Points the move list selection at the active snapshot.
    fn select_current(&mut self) {
        self.selected = self
            .session
            .move_list()
            .iter()
            .position(|row| row.is_current)
            .unwrap_or(0);
    }
}
