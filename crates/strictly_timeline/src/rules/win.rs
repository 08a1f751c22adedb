//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the two
/// diagonals. The first completed line in this order is the one reported.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Three cells forming a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    player: Player,
    line: WinningLine,
}

impl WinResult {
    /// The player occupying the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The completed line.
    pub fn line(&self) -> WinningLine {
        self.line
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose three cells hold the same
/// player, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<WinResult> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinResult { player, line })
            }
            _ => None,
        }
    })
}
