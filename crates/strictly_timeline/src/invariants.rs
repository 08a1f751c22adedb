//! Timeline invariants.
//!
//! Invariants are logical properties that must hold after every move. The
//! engine checks them in debug builds; they are also testable on their own.

use crate::{GameEngine, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// Invariant: record `n` holds exactly `n` marks.
pub struct PlyCount;

impl Invariant<GameEngine> for PlyCount {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .timeline()
            .records()
            .iter()
            .enumerate()
            .all(|(step, record)| record.board().occupied() == step)
    }

    fn description() -> &'static str {
        "Every record holds one mark per move played"
    }
}

/// Invariant: X never trails O, and never leads by more than one.
pub struct AlternatingMarks;

impl Invariant<GameEngine> for AlternatingMarks {
    fn holds(engine: &GameEngine) -> bool {
        engine.timeline().records().iter().all(|record| {
            let board = record.board();
            let (x, o) = (board.marks(Player::X), board.marks(Player::O));
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

/// Invariant: the cursor selects a recorded step.
pub struct CursorInBounds;

impl Invariant<GameEngine> for CursorInBounds {
    fn holds(engine: &GameEngine) -> bool {
        engine.cursor() < engine.timeline().len()
    }

    fn description() -> &'static str {
        "Cursor points into the timeline"
    }
}

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (PlyCount, AlternatingMarks, CursorInBounds);
