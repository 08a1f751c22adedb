//! Game engine: timeline, cursor, and turn tracking.

use crate::action::{Intent, MoveError};
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::{WinResult, detect_winner};
use crate::timeline::{MoveRecord, Timeline};
use crate::view::{DisplayOrder, ViewModel, derive_view};
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe engine with history and time travel.
///
/// The engine owns the [`Timeline`] of every board reached, a cursor
/// selecting the board currently shown, the player to move, and the order
/// in which the move list is presented. Playing from a past cursor
/// discards the later history before the new move is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    timeline: Timeline,
    cursor: usize,
    to_move: Player,
    order: DisplayOrder,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::Ascending)
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: 0,
            to_move: Player::X,
            order,
        }
    }

    /// Plays the active player's mark at `pos`.
    ///
    /// Returns `false` and leaves the engine untouched when the cell is
    /// occupied or the current board already has a winner.
    pub fn play_move(&mut self, pos: Position) -> bool {
        self.try_play_move(pos).is_ok()
    }

    /// Plays the active player's mark at `pos`, reporting why a move was
    /// rejected.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board has a winner.
    /// - [`MoveError::CellOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(position = ?pos, player = %self.to_move, cursor = self.cursor))]
    pub fn try_play_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = *self.current_board();
        if detect_winner(&current).is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.timeline.truncate_after(self.cursor);
        let board = current.with_mark(pos, self.to_move);
        self.timeline.push(MoveRecord::new(board, pos.coordinate()));
        self.cursor = self.timeline.len() - 1;
        self.to_move = self.to_move.opponent();
        debug!(step = self.cursor, "Move applied");

        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "Timeline invariants violated after move"
        );
        Ok(())
    }

    /// Plays at a raw board index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0-8. Callers pass only indices of cells
    /// they rendered.
    pub fn play_index(&mut self, index: usize) -> bool {
        let Some(pos) = Position::from_index(index) else {
            panic!("cell index {index} is outside the board (0-8)");
        };
        self.play_move(pos)
    }

    /// Moves the cursor to `step` without altering the timeline.
    ///
    /// The player to move is recomputed from the step's parity.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.timeline.len()))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.timeline.len(),
            "step {step} is outside the timeline (0..{})",
            self.timeline.len()
        );
        self.cursor = step;
        self.to_move = Player::for_step(step);
        debug!(to_move = %self.to_move, "Cursor moved");
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_display_order(&mut self) {
        self.order = self.order.toggle();
    }

    /// Applies an intent forwarded by a presentation layer.
    ///
    /// Returns whether the engine state changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Play(pos) => self.play_move(pos),
            Intent::JumpTo(step) => {
                self.jump_to(step);
                true
            }
            Intent::ToggleOrder => {
                self.toggle_display_order();
                true
            }
        }
    }

    /// Derives the read-only view of the current state.
    pub fn view(&self) -> ViewModel<'_> {
        derive_view(self)
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_record().board()
    }

    /// The record at the cursor.
    pub fn current_record(&self) -> &MoveRecord {
        // `cursor` is only ever set to an index below `timeline.len()`.
        &self.timeline.records()[self.cursor]
    }

    /// The winner on the board at the cursor, if any.
    pub fn winner(&self) -> Option<WinResult> {
        detect_winner(self.current_board())
    }

    /// Index of the record being shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Order of the presented move list.
    pub fn display_order(&self) -> DisplayOrder {
        self.order
    }

    /// Every board reached so far.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_play_move_appends_and_flips_turn() {
        let mut engine = GameEngine::new();
        assert!(engine.play_move(Position::Center));
        assert_eq!(engine.timeline().len(), 2);
        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(
            engine.current_board().get(Position::Center),
            Cell::Occupied(Player::X)
        );
    }

    #[test]
    fn test_try_play_move_reports_occupied_cell() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center);
        assert_eq!(
            engine.try_play_move(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_try_play_move_reports_game_over() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.play_index(index);
        }
        assert_eq!(engine.try_play_move(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_play_index_out_of_range_panics() {
        GameEngine::new().play_index(9);
    }

    #[test]
    #[should_panic(expected = "outside the timeline")]
    fn test_jump_past_end_panics() {
        GameEngine::new().jump_to(1);
    }

    #[test]
    fn test_apply_routes_intents() {
        let mut engine = GameEngine::new();
        assert!(engine.apply(Intent::Play(Position::TopLeft)));
        assert!(!engine.apply(Intent::Play(Position::TopLeft)));
        assert!(engine.apply(Intent::ToggleOrder));
        assert_eq!(engine.display_order(), DisplayOrder::Descending);
        assert!(engine.apply(Intent::JumpTo(0)));
        assert_eq!(engine.cursor(), 0);
    }
}
