//! User intents and move errors.
//!
//! A presentation layer never touches engine state directly. It forwards
//! what the user asked for as an [`Intent`] and re-reads the view.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Something the user asked the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Play the active player's mark at a cell.
    Play(Position),
    /// Move the cursor to a recorded step.
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    ToggleOrder,
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
