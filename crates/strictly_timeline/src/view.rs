//! Read-only view derived from engine state.
//!
//! The view is recomputed on demand and never stored. A presentation layer
//! renders it, forwards user intents to the engine, then derives it again.

use crate::engine::GameEngine;
use crate::rules::{WinningLine, detect_winner};
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
///
/// Affects presentation only; timeline indices never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One entry of the move list.
///
/// Activating the entry means calling [`GameEngine::jump_to`] with
/// [`MoveEntry::step`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Timeline index this entry jumps to.
    pub step: usize,
    /// Button text, e.g. `Go to move #2 (1,0)`.
    pub label: String,
    /// Whether this is the record being shown.
    pub is_current: bool,
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel<'a> {
    /// Board at the cursor, borrowed from the timeline.
    pub current_board: &'a Board,
    /// `Winner: X` or `Next player: O`.
    pub status_text: String,
    /// The completed line on the current board, if any.
    pub winning_line: Option<WinningLine>,
    /// Move list in presentation order.
    pub move_entries: Vec<MoveEntry>,
}

impl ViewModel<'_> {
    /// Whether `pos` lies on the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }
}

/// Derives the view for the engine's current state.
#[instrument(skip(engine), fields(cursor = engine.cursor()))]
pub fn derive_view(engine: &GameEngine) -> ViewModel<'_> {
    let current_board = engine.current_board();
    let winner = detect_winner(current_board);

    let status_text = match winner {
        Some(win) => format!("Winner: {}", win.player()),
        None => format!("Next player: {}", engine.to_move()),
    };

    let mut move_entries: Vec<MoveEntry> = engine
        .timeline()
        .records()
        .iter()
        .enumerate()
        .map(|(step, record)| MoveEntry {
            step,
            label: match record.coordinate() {
                Some(coordinate) => format!("Go to move #{step} ({coordinate})"),
                None => "Go to game start".to_string(),
            },
            is_current: step == engine.cursor(),
        })
        .collect();

    if engine.display_order() == DisplayOrder::Descending {
        move_entries.reverse();
    }

    ViewModel {
        current_board,
        status_text,
        winning_line: winner.map(|win| win.line()),
        move_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_view() {
        let engine = GameEngine::new();
        let view = engine.view();
        assert_eq!(view.status_text, "Next player: X");
        assert_eq!(view.winning_line, None);
        assert_eq!(view.move_entries.len(), 1);
        assert_eq!(view.move_entries[0].label, "Go to game start");
        assert!(view.move_entries[0].is_current);
    }

    #[test]
    fn test_labels_carry_col_and_row() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::TopRight);
        engine.play_move(Position::BottomLeft);
        let labels: Vec<_> = engine
            .view()
            .move_entries
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1 (2,0)", "Go to move #2 (0,2)"]
        );
    }

    #[test]
    fn test_descending_keeps_jump_targets() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center);
        engine.play_move(Position::TopLeft);
        engine.toggle_display_order();
        let steps: Vec<_> = engine.view().move_entries.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(engine.view().move_entries[0].label, "Go to move #2 (0,0)");
    }

    #[test]
    fn test_current_entry_follows_cursor() {
        let mut engine = GameEngine::new();
        engine.play_move(Position::Center);
        engine.play_move(Position::TopLeft);
        engine.jump_to(1);
        let current: Vec<_> = engine
            .view()
            .move_entries
            .iter()
            .filter(|e| e.is_current)
            .map(|e| e.step)
            .collect();
        assert_eq!(current, vec![1]);
    }
}
