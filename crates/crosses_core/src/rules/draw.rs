//! Draw detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A draw: nobody won this turn and the board is full.
///
/// Evaluate win detection first. A full board with a completed line is a
/// win, so pass its result as `won_this_turn`.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, won_this_turn: bool) -> bool {
    !won_this_turn && is_full(board)
}
