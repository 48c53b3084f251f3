//! Error types for board construction and move application.

use crate::invariants::InvariantViolation;
use crate::position::Coordinate;
use derive_more::{Display, Error};
use tracing::instrument;

/// A move the rules do not allow.
///
/// This is the only failure of move application. The variant says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The target cell already holds a mark.
    #[display("Illegal move: {} is already occupied", coordinate)]
    Occupied {
        /// Where the move was aimed.
        coordinate: Coordinate,
    },

    /// The target lies outside the board.
    #[display("Illegal move: {} is off the board", coordinate)]
    OutOfRange {
        /// Where the move was aimed.
        coordinate: Coordinate,
    },

    /// The caller passed a dimension this board does not have.
    #[display("Illegal move: board dimension is {}, got {}", expected, actual)]
    DimensionMismatch {
        /// Dimension of the board.
        expected: usize,
        /// Dimension supplied by the caller.
        actual: usize,
    },

    /// The game already has a result.
    #[display("Illegal move: the game is already over")]
    GameOver,
}

impl std::error::Error for IllegalMove {}

/// Requested a board size other than 3x3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unsupported board dimension {} (only {} is supported)", requested, supported)]
pub struct UnsupportedDimension {
    /// Dimension that was asked for.
    pub requested: usize,
    /// The one dimension the win table covers.
    pub supported: usize,
}

/// Text could not be read as a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {}", message)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub message: String,
}

impl BoardParseError {
    /// Creates a new board parse error.
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Text could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid coordinate {:?}: expected \"x,y\", 1-9 or a cell name", input)]
pub struct CoordinateParseError {
    /// The rejected input.
    pub input: String,
}

impl CoordinateParseError {
    /// Creates a new coordinate parse error.
    #[instrument(skip(input))]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Session data that no sequence of legal moves could produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSession {
    /// Every invariant the data breaks.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Invalid session: {}", descriptions)
    }
}

impl std::error::Error for InvalidSession {}
