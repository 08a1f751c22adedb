//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `step` moves.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Column and row of a played cell, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{col},{row}")]
pub struct Coordinate {
    /// Column (0-2, left to right).
    pub col: u8,
    /// Row (0-2, top to bottom).
    pub row: u8,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Converts back to the board position this coordinate names.
    ///
    /// Returns `None` when either component is outside 0-2.
    pub fn to_position(self) -> Option<Position> {
        if self.col > 2 || self.row > 2 {
            return None;
        }
        Position::from_index(usize::from(self.row) * 3 + usize::from(self.col))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark produces a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.squares[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `player` marked at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Cell::Occupied(player);
        Self { squares }
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Cell; 9] {
        &self.squares
    }

    /// Counts the marks placed by `player`.
    pub fn marks(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.marks(Player::X) + self.marks(Player::O)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so the text doubles as a
    /// keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = Board::new();
        let marked = empty.with_mark(Position::Center, Player::X);

        assert_eq!(empty.get(Position::Center), Cell::Empty);
        assert_eq!(marked.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(marked.occupied(), 1);
    }

    #[test]
    fn test_display_shows_numbers_for_empty_cells() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::BottomRight, Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_coordinate_display_is_col_then_row() {
        assert_eq!(Coordinate::new(2, 0).to_string(), "2,0");
    }

    #[test]
    fn test_coordinate_to_position() {
        assert_eq!(Coordinate::new(1, 2).to_position(), Some(Position::BottomCenter));
        assert_eq!(Coordinate::new(3, 0).to_position(), None);
    }

    #[test]
    fn test_player_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(4), Player::X);
    }
}
