//! Core domain types for naughts and crosses.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board. The win-line table is built for this value.
pub const DIMENSION: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = DIMENSION * DIMENSION;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by X.
    PlayerX,
    /// Cell claimed by O.
    PlayerO,
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerX => Some(Player::X),
            Cell::PlayerO => Some(Player::O),
        }
    }

    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player() {
            Some(player) => write!(f, "{}", player),
            None => write!(f, " "),
        }
    }
}

/// 3x3 board stored row-major: index = x + DIMENSION * y.
///
/// There is no public single-cell setter. A changed board is only ever
/// produced by [`apply_move`](crate::apply_move), which copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from a complete row-major cell array.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at column `x`, row `y`.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= DIMENSION || y >= DIMENSION {
            return None;
        }
        self.get(x + DIMENSION * y)
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are not.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Counts cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Returns a copy with one cell replaced.
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[index] = cell;
        next
    }

    /// Formats the board as three text rows.
    ///
    /// With `hints`, empty cells show their keypad number (1-9).
    #[instrument(skip(self))]
    pub fn render(&self, hints: bool) -> String {
        let mut result = String::new();
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                let index = row * DIMENSION + col;
                let symbol = match self.cells[index].player() {
                    Some(player) => player.to_string(),
                    None if hints => (index + 1).to_string(),
                    None => " ".to_string(),
                };
                result.push_str(&symbol);
                if col < DIMENSION - 1 {
                    result.push('|');
                }
            }
            if row < DIMENSION - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`/`_` (empty); whitespace, `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
        {
            let cell = match ch {
                'X' | 'x' => Cell::PlayerX,
                'O' | 'o' => Cell::PlayerO,
                '.' | '_' => Cell::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            if count == CELL_COUNT {
                return Err(BoardParseError::new(format!(
                    "more than {} cells",
                    CELL_COUNT
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(BoardParseError::new(format!(
                "expected {} cells, found {}",
                CELL_COUNT, count
            )));
        }

        Ok(Self::from_cells(cells))
    }
}

/// Outcome of a game, derived from the board after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves are still possible.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board is full with no completed line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true while the game accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
