//! Balanced marks: X has the same number of marks as O, or one more.

use super::Invariant;
use crate::{Cell, GameSession};

/// Invariant: X count minus O count is 0 or 1.
pub struct BalancedMarks;

impl Invariant<GameSession> for BalancedMarks {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Cell::PlayerX);
        let o = session.board().count(Cell::PlayerO);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
