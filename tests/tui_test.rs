//! Tests for key handling and rendering of the terminal UI.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use rewind_games::tui::{App, AppAction, Focus, draw};
use rewind_games::{GameSession, HistoryOrder, Player, Position};

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_enter_plays_at_cursor() {
    let mut app = App::new(GameSession::new());
    assert_eq!(app.cursor(), Position::Center);

    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Char(' '));

    let board = app.session().board();
    assert_eq!(board.get(Position::Center).mark(), Some(Player::X));
    assert_eq!(board.get(Position::TopLeft).mark(), Some(Player::O));
}

#[test]
fn test_digits_play_and_occupied_clicks_ignored() {
    let mut app = App::new(GameSession::new());
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('5'));

    assert_eq!(app.session().history().len(), 2);
    assert_eq!(app.session().next_mark(), Player::O);
}

#[test]
fn test_move_list_jump() {
    let mut app = App::new(GameSession::new());
    for key in ['1', '5', '9'] {
        app.handle_key(KeyCode::Char(key));
    }

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Moves);
    assert_eq!(app.selected(), 3);

    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.session().current().index, 1);
    assert_eq!(app.session().history().len(), 4);
}

#[test]
fn test_selection_follows_order_toggle() {
    let mut app = App::new(GameSession::new());
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('2'));
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.selected(), 2);

    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.session().order(), HistoryOrder::Descending);
    assert_eq!(app.selected(), 0);
}

#[test]
fn test_step_keys_and_reset() {
    let mut app = App::new(GameSession::new());
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('2'));

    app.handle_key(KeyCode::Char('['));
    assert_eq!(app.session().current().index, 1);
    app.handle_key(KeyCode::Char(']'));
    assert_eq!(app.session().current().index, 2);

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.session().history().len(), 1);
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(GameSession::new());
    assert_eq!(app.handle_key(KeyCode::Char('x')), AppAction::Continue);
    assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
}

#[test]
fn test_screen_shows_status_and_moves() {
    let mut app = App::new(GameSession::new());
    for key in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(key));
    }

    let text = screen(&app);
    assert!(text.contains("Winner: X"));
    assert!(text.contains("You are at move #5, Position: (0, 2)"));
    assert!(text.contains("Go to game start"));
    assert!(text.contains("Sort in descending order"));
}

#[test]
fn test_screen_after_rewind_shows_next_player() {
    let mut app = App::new(GameSession::with_order(HistoryOrder::Descending));
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('['));

    let text = screen(&app);
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Go to move #1, Position: (0, 0)"));
}
