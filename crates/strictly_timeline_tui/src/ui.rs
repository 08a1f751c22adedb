//! Stateless UI rendering for the game view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_timeline::{Cell, DisplayOrder, Player, Position, ViewModel};

use crate::app::{App, Focus};

const HELP: &str = "arrows: move  enter: play/jump  1-9: play  tab: switch pane  s: sort  r: restart  q: quit";

/// Renders the whole screen from the app's current view.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.engine().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, body[0], &view, cursor);
    draw_moves(frame, body[1], &view, app);

    let status = Paragraph::new(view.status_text.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &ViewModel<'_>, cursor: Option<Position>) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], view, cursor, positions);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &ViewModel<'_>,
    cursor: Option<Position>,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        draw_cell(frame, cols[col * 2], view, cursor, *pos);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &ViewModel<'_>,
    cursor: Option<Position>,
    pos: Position,
) {
    let (symbol, mut style) = match view.current_board.get(pos) {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if view.is_winning_cell(pos) {
        style = style.bg(Color::Yellow);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &ViewModel<'_>, app: &App) {
    let items: Vec<ListItem> = view
        .move_entries
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label.clone(), style)))
        })
        .collect();

    let title = match app.engine().display_order() {
        DisplayOrder::Ascending => "Moves (ascending)",
        DisplayOrder::Descending => "Moves (descending)",
    };

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state =
        ListState::default().with_selected((app.focus() == Focus::MoveList).then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
