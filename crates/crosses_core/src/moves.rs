//! Move values and copy-on-write move application.

use crate::error::{IllegalMove, UnsupportedDimension};
use crate::position::Coordinate;
use crate::types::{Board, Cell, DIMENSION, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate.label())
    }
}

/// Returns a fresh board of `dimension * dimension` empty cells.
///
/// # Errors
///
/// Fails for any dimension other than 3.
#[instrument]
pub fn new_game(dimension: usize) -> Result<Board, UnsupportedDimension> {
    if dimension != DIMENSION {
        warn!(dimension, "Unsupported board dimension");
        return Err(UnsupportedDimension {
            requested: dimension,
            supported: DIMENSION,
        });
    }
    Ok(Board::new())
}

/// Places `player` at column `x`, row `y` and returns the resulting board.
///
/// `board` is left as it was; the returned board differs from it in exactly
/// one cell.
///
/// # Errors
///
/// Returns [`IllegalMove`] when `dimension` is not the board's, the
/// coordinate is off the board, or the target cell is occupied.
#[instrument(skip(board))]
pub fn apply_move(
    board: &Board,
    x: usize,
    y: usize,
    dimension: usize,
    player: Player,
) -> Result<Board, IllegalMove> {
    if dimension != DIMENSION {
        warn!(dimension, "Move rejected: dimension mismatch");
        return Err(IllegalMove::DimensionMismatch {
            expected: DIMENSION,
            actual: dimension,
        });
    }

    let coordinate = Coordinate::new(x, y);
    let Some(index) = coordinate.index() else {
        warn!(%coordinate, "Move rejected: off the board");
        return Err(IllegalMove::OutOfRange { coordinate });
    };

    if !board.is_empty(index) {
        warn!(%coordinate, "Move rejected: cell occupied");
        return Err(IllegalMove::Occupied { coordinate });
    }

    debug!(%player, %coordinate, "Move applied");
    Ok(board.with_cell(index, Cell::from(player)))
}

/// Index-based form of [`apply_move`].
///
/// # Errors
///
/// Same as [`apply_move`]; indices past the last cell are off the board.
#[instrument(skip(board))]
pub fn apply_move_at(board: &Board, index: usize, player: Player) -> Result<Board, IllegalMove> {
    apply_move(board, index % DIMENSION, index / DIMENSION, DIMENSION, player)
}
