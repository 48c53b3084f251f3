//! Invariants that hold for every reachable game session.
//!
//! Each invariant is checkable on its own; [`SessionInvariants`] bundles
//! them for a single post-move check.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turns;
pub mod balanced_marks;
pub mod history_matches_board;

pub use alternating_turns::AlternatingTurns;
pub use balanced_marks::BalancedMarks;
pub use history_matches_board::HistoryMatchesBoard;

/// All session invariants as a composable set.
pub type SessionInvariants = (BalancedMarks, HistoryMatchesBoard, AlternatingTurns);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, GameSession};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let session = GameSession::replay([
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
            Coordinate::new(2, 0),
        ])
        .unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }
}
