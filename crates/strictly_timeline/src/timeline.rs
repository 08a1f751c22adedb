//! Append-only history of board states.

use crate::{Board, Coordinate, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board reached during play and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    coordinate: Option<Coordinate>,
}

impl MoveRecord {
    /// The record every game starts from: an empty board and no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    /// Creates a record for a board produced by a move at `coordinate`.
    pub fn new(board: Board, coordinate: Coordinate) -> Self {
        Self {
            board,
            coordinate: Some(coordinate),
        }
    }

    /// The board after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the move was played; `None` for the game start.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// Every board reached in the game, starting from the empty board.
///
/// Record `n` is reached by exactly `n` moves from record 0. The timeline
/// is never empty, and the only way records leave it is
/// [`Timeline::truncate_after`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    records: Vec<MoveRecord>,
}

impl Timeline {
    /// Creates a timeline holding only the game start.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Rebuilds a timeline by playing `coordinates` in order from the
    /// empty board, alternating X and O.
    ///
    /// Returns `None` if a coordinate is off the board or names an occupied
    /// cell.
    #[instrument(skip(coordinates))]
    pub fn replay(coordinates: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut timeline = Self::new();
        for coordinate in coordinates {
            let pos = coordinate.to_position()?;
            let last = timeline.last();
            if !last.board().is_empty(pos) {
                debug!(%coordinate, "Replay hit an occupied cell");
                return None;
            }
            let player = Player::for_step(timeline.len() - 1);
            let board = last.board().with_mark(pos, player);
            timeline.push(MoveRecord::new(board, coordinate));
        }
        Some(timeline)
    }

    /// Number of records, including the game start.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a timeline holds at least the game start.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `step`, if present.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// The most recent record.
    pub fn last(&self) -> &MoveRecord {
        // `records` starts with the game start and is never emptied.
        &self.records[self.records.len() - 1]
    }

    /// All records in play order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The coordinates of moves 1..n, in play order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.records
            .iter()
            .filter_map(MoveRecord::coordinate)
            .collect()
    }

    /// Appends a record.
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Discards every record after `step`, keeping `0..=step`.
    pub(crate) fn truncate_after(&mut self, step: usize) {
        self.records.truncate(step + 1);
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_new_timeline_holds_game_start() {
        let timeline = Timeline::new();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.last().coordinate(), None);
        assert_eq!(timeline.last().board(), &Board::new());
    }

    #[test]
    fn test_replay_alternates_players() {
        let timeline = Timeline::replay([Coordinate::new(1, 1), Coordinate::new(0, 0)])
            .expect("both cells are free");
        let board = timeline.last().board();
        assert_eq!(timeline.len(), 3);
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Player::O));
    }

    #[test]
    fn test_replay_rejects_repeated_cell() {
        assert!(Timeline::replay([Coordinate::new(1, 1), Coordinate::new(1, 1)]).is_none());
    }

    #[test]
    fn test_truncate_after_keeps_prefix() {
        let mut timeline = Timeline::replay([
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
        ])
        .expect("valid replay");
        timeline.truncate_after(1);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.coordinates(), vec![Coordinate::new(0, 0)]);
    }
}
