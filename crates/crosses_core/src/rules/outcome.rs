//! Outcome evaluation.

use super::{detect_win, is_draw};
use crate::types::{Board, GameOutcome, Player};
use tracing::instrument;

/// Derives the outcome after `mover` has just played on `board`.
///
/// Any completed line belongs to the mover. Win takes priority over draw.
#[instrument(skip(board))]
pub fn outcome(board: &Board, mover: Player) -> GameOutcome {
    let won = detect_win(board);
    if won {
        GameOutcome::Win(mover)
    } else if is_draw(board, won) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
