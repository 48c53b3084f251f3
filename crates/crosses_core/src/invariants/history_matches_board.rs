//! Monotonic board: replaying the history reproduces the board.

use super::Invariant;
use crate::{Board, GameSession, apply_move_at};

/// Invariant: every recorded move landed on an empty cell, and together
/// they produce exactly the current board.
pub struct HistoryMatchesBoard;

impl Invariant<GameSession> for HistoryMatchesBoard {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            let Some(index) = mov.coordinate.index() else {
                return false;
            };
            match apply_move_at(&reconstructed, index, mov.player) {
                Ok(next) => reconstructed = next,
                Err(_) => return false,
            }
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Cells are never overwritten and history reproduces the board"
    }
}
