//! Renders the TUI into an in-memory terminal and checks what is drawn.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use strictly_timeline::DisplayOrder;
use strictly_timeline_tui::{app::App, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_fresh_game_screen() {
    let screen = render(&App::default());
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Moves (ascending)"));
}

#[test]
fn test_won_game_screen() {
    let mut app = App::default();
    press(&mut app, "14253");
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5 (2,0)"));
}

#[test]
fn test_sorted_screen_lists_latest_first() {
    let mut app = App::new(DisplayOrder::Ascending);
    press(&mut app, "15s");
    let screen = render(&app);
    assert!(screen.contains("Moves (descending)"));
    let latest = screen.find("Go to move #2").expect("latest move listed");
    let start = screen.find("Go to game start").expect("start listed");
    assert!(latest < start);
}
