//! Game rules for tic-tac-toe.

mod win;

pub use win::{LINES, WinResult, WinningLine, detect_winner};
