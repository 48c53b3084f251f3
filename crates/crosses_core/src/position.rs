//! Board coordinates and their text forms.

use crate::error::CoordinateParseError;
use crate::types::{Board, CELL_COUNT, DIMENSION};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Column `x` and row `y`, both counted from the top-left corner.
///
/// A coordinate may lie off the board; [`Coordinate::index`] says whether
/// it maps to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Row-major board index, or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        (self.x < DIMENSION && self.y < DIMENSION).then(|| self.x + DIMENSION * self.y)
    }

    /// Coordinate for a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(Self::new(index % DIMENSION, index / DIMENSION))
    }

    /// Human-readable cell name.
    pub fn label(&self) -> &'static str {
        match self.index() {
            Some(0) => "Top-left",
            Some(1) => "Top-center",
            Some(2) => "Top-right",
            Some(3) => "Middle-left",
            Some(4) => "Center",
            Some(5) => "Middle-right",
            Some(6) => "Bottom-left",
            Some(7) => "Bottom-center",
            Some(8) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// Every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).map(|index| Self::new(index % DIMENSION, index / DIMENSION))
    }

    /// Filters coordinates by board state, returning only empty cells.
    #[instrument(skip(board))]
    pub fn available(board: &Board) -> Vec<Coordinate> {
        Self::all()
            .filter(|coordinate| coordinate.index().is_some_and(|i| board.is_empty(i)))
            .collect()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index() {
            Some(_) => write!(f, "{} ({}, {})", self.label(), self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    /// Accepts `x,y` (0-based), a keypad number `1`-`9`, or a cell name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((x, y)) = trimmed.split_once(',') {
            return match (x.trim().parse(), y.trim().parse()) {
                (Ok(x), Ok(y)) => Ok(Self::new(x, y)),
                _ => Err(CoordinateParseError::new(s)),
            };
        }

        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| CoordinateParseError::new(s));
        }

        let wanted = trimmed.to_lowercase().replace([' ', '_'], "-");
        Self::all()
            .find(|coordinate| coordinate.label().to_lowercase() == wanted)
            .ok_or_else(|| CoordinateParseError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_for_corners() {
        assert_eq!(Coordinate::new(0, 0).index(), Some(0));
        assert_eq!(Coordinate::new(2, 0).index(), Some(2));
        assert_eq!(Coordinate::new(0, 2).index(), Some(6));
        assert_eq!(Coordinate::new(2, 2).index(), Some(8));
        assert_eq!(Coordinate::from_index(5), Some(Coordinate::new(2, 1)));
        assert_eq!(Coordinate::from_index(9), None);
    }

    #[test]
    fn test_off_board_has_no_index() {
        assert_eq!(Coordinate::new(3, 0).index(), None);
        assert_eq!(Coordinate::new(0, 3).index(), None);
        assert_eq!(Coordinate::new(3, 0).label(), "Off-board");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("1,2".parse::<Coordinate>(), Ok(Coordinate::new(1, 2)));
        assert_eq!(" 0 , 0 ".parse::<Coordinate>(), Ok(Coordinate::new(0, 0)));
        assert_eq!("5".parse::<Coordinate>(), Ok(Coordinate::new(1, 1)));
        assert_eq!("9".parse::<Coordinate>(), Ok(Coordinate::new(2, 2)));
        assert_eq!("center".parse::<Coordinate>(), Ok(Coordinate::new(1, 1)));
        assert_eq!("top left".parse::<Coordinate>(), Ok(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0".parse::<Coordinate>().is_err());
        assert!("10".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
        assert!("middle".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_off_board_pair_still_parses() {
        assert_eq!("4,4".parse::<Coordinate>(), Ok(Coordinate::new(4, 4)));
    }

    #[test]
    fn test_available_skips_occupied() {
        let board: Board = "X../.O./...".parse().unwrap();
        let available = Coordinate::available(&board);
        assert_eq!(available.len(), 7);
        assert!(!available.contains(&Coordinate::new(0, 0)));
        assert!(!available.contains(&Coordinate::new(1, 1)));
    }
}
