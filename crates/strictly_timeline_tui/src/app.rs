//! Application state and key handling.

use crate::input::move_cursor;
use crossterm::event::KeyCode;
use strictly_timeline::{DisplayOrder, GameEngine, Intent, Position};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor; Enter plays.
    #[default]
    Board,
    /// Arrow keys move through the move list; Enter jumps.
    MoveList,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
///
/// Owns the single [`GameEngine`] instance; everything drawn comes from
/// [`GameEngine::view`] after each key is handled.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    initial_order: DisplayOrder,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application with the move list starting in `order`.
    #[instrument]
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            engine: GameEngine::with_order(order),
            initial_order: order,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The highlighted board cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index into the displayed move list of the highlighted entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.forward(Intent::ToggleOrder),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|digit| Position::from_index(digit as usize - 1))
                {
                    self.cursor = pos;
                    self.forward(Intent::Play(pos));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.forward(Intent::Play(self.cursor)),
                Focus::MoveList => {
                    let step = self
                        .engine
                        .view()
                        .move_entries
                        .get(self.selected)
                        .map(|entry| entry.step);
                    if let Some(step) = step {
                        self.forward(Intent::JumpTo(step));
                    }
                }
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::MoveList => self.move_selection(key),
            },
            _ => {}
        }
        Control::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new(self.initial_order);
    }

    fn forward(&mut self, intent: Intent) {
        let changed = self.engine.apply(intent);
        debug!(?intent, changed, "Intent forwarded");
        self.clamp_selection();
    }

    fn move_selection(&mut self, key: KeyCode) {
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => self.selected + 1,
            _ => self.selected,
        };
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let last = self.engine.timeline().len() - 1;
        self.selected = self.selected.min(last);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timeline::{Cell, Player};

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        let board = app.engine().current_board();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::default();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().current_board().get(Position::TopCenter),
            Cell::Occupied(Player::X)
        );
    }

    #[test]
    fn test_move_list_enter_jumps_to_selected_step() {
        let mut app = App::default();
        for key in ['1', '4', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::MoveList);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().cursor(), 1);
        assert_eq!(app.engine().to_move(), Player::O);
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut app = App::default();
        for key in ['1', '4', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Tab);
        // First displayed entry is now the latest move.
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().cursor(), 3);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Tab);
        for _ in 0..5 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_restart_keeps_configured_order() {
        let mut app = App::new(DisplayOrder::Descending);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.engine().timeline().len(), 1);
        assert_eq!(app.engine().display_order(), DisplayOrder::Descending);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('x')), Control::Continue);
    }
}
