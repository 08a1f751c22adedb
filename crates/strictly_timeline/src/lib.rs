//! Strictly Timeline - tic-tac-toe with move history and time travel.
//!
//! The crate is the game-state core of an interactive board: it keeps every
//! board reached during play, lets a caller jump back to any of them, and
//! derives what a presentation layer should draw.
//!
//! # Architecture
//!
//! - **Rules**: [`detect_winner`] checks the eight lines in a fixed order
//! - **Timeline**: append-only [`MoveRecord`]s, truncated only when a move
//!   is played from a past step
//! - **Engine**: [`GameEngine`] applies intents and owns all mutable state
//! - **View**: [`ViewModel`] is recomputed from the engine after every intent
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameEngine, Position};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play_index(index);
//! }
//! assert_eq!(engine.view().status_text, "Winner: X");
//!
//! engine.jump_to(0);
//! assert_eq!(engine.view().status_text, "Next player: X");
//! assert!(engine.play_move(Position::Center));
//! assert_eq!(engine.timeline().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod invariants;
mod position;
mod rules;
mod timeline;
mod types;
mod view;

pub use action::{Intent, MoveError};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingMarks, CursorInBounds, Invariant, InvariantSet, InvariantViolation, PlyCount,
    TimelineInvariants,
};
pub use position::Position;
pub use rules::{LINES, WinResult, WinningLine, detect_winner};
pub use timeline::{MoveRecord, Timeline};
pub use types::{Board, Cell, Coordinate, Player};
pub use view::{DisplayOrder, MoveEntry, ViewModel, derive_view};
