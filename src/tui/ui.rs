//! Stateless UI rendering.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Board, Player, Position, Square, WinningLine};

const HELP: &str =
    "arrows move  enter play  1-9 play  tab switch pane  [ ] step  s sort  r reset  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_moves(frame, panes[1], app);

    let status = Paragraph::new(app.session().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = app.session().board();
    let line = app.session().outcome().winning_line();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, &board, line, cursor, row);
    }
    for area in [rows[1], rows[3]] {
        let sep = Paragraph::new("───────┼───────┼───────")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    line: Option<WinningLine>,
    cursor: Option<Position>,
    row: usize,
) {
    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        if col > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let Some(pos) = Position::from_index(row * 3 + col) else {
            continue;
        };
        spans.push(cell_span(board, pos, line, cursor));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cell_span(
    board: &Board,
    pos: Position,
    line: Option<WinningLine>,
    cursor: Option<Position>,
) -> Span<'static> {
    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => ("       ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "   X   ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "   O   ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if line.is_some_and(|l| l.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let session = app.session();
    let title = format!("Moves ({}) [s] {}", session.order(), session.toggle_label());
    let block = pane_block(&title, focused);

    let items: Vec<ListItem> = session
        .move_list()
        .into_iter()
        .map(|row| {
            let style = if row.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(row.label()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
