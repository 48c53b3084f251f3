//! Win detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Every line that wins on a 3x3 board, as row-major indices.
///
/// Rows first, then columns, then the two diagonals. Hardwired to 3x3.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether any line holds three identical marks.
///
/// Three empty cells are not a line. The result does not say who won:
/// the caller knows who just moved.
#[instrument(skip(board))]
pub fn detect_win(board: &Board) -> bool {
    WIN_LINES.iter().any(|&line| line_complete(board, line))
}

fn line_complete(board: &Board, [a, b, c]: [usize; 3]) -> bool {
    match board.get(a) {
        Some(Cell::Empty) | None => false,
        first => first == board.get(b) && first == board.get(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_win_empty_board() {
        assert!(!detect_win(&Board::new()));
    }

    #[test]
    fn test_win_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(detect_win(&board));
    }

    #[test]
    fn test_win_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        assert!(detect_win(&board));
    }

    #[test]
    fn test_no_win_incomplete() {
        let board: Board = "XX./O.O/...".parse().unwrap();
        assert!(!detect_win(&board));
    }

    #[test]
    fn test_mixed_line_is_not_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert!(!detect_win(&board));
    }
}
