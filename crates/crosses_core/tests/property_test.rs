//! Property-based tests for win detection and move application.

use crosses_core::{Board, Cell, Player, WIN_LINES, apply_move_at, detect_win, is_draw};
use proptest::prelude::*;

/// Strategy for a single cell.
fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::PlayerX), Just(Cell::PlayerO)]
}

/// Strategy for an arbitrary (not necessarily reachable) board.
fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell()).prop_map(Board::from_cells)
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Line check by geometry rather than by table.
fn has_line(board: &Board) -> bool {
    let at = |x: usize, y: usize| board.cell_at(x, y).unwrap_or(Cell::Empty);
    let same = |a: Cell, b: Cell, c: Cell| a != Cell::Empty && a == b && b == c;

    (0..3).any(|i| same(at(0, i), at(1, i), at(2, i)) || same(at(i, 0), at(i, 1), at(i, 2)))
        || same(at(0, 0), at(1, 1), at(2, 2))
        || same(at(2, 0), at(1, 1), at(0, 2))
}

proptest! {
    /// No line and an empty cell left: neither win nor draw.
    #[test]
    fn open_board_is_neither_win_nor_draw(
        board in any_board().prop_filter("open board", |b| !has_line(b) && b.count(Cell::Empty) > 0)
    ) {
        let won = detect_win(&board);
        prop_assert!(!won);
        prop_assert!(!is_draw(&board, won));
    }

    /// Filling any win line with one player's mark is detected.
    #[test]
    fn completed_line_always_wins(
        line in prop::sample::select(WIN_LINES.to_vec()),
        player in player(),
        others in prop::array::uniform9(prop::bool::ANY),
    ) {
        let filler = Cell::from(player.opponent());
        let mut cells = [Cell::Empty; 9];
        for (index, cell) in cells.iter_mut().enumerate() {
            if others[index] {
                *cell = filler;
            }
        }
        for index in line {
            cells[index] = Cell::from(player);
        }
        prop_assert!(detect_win(&Board::from_cells(cells)));
    }

    /// Detection agrees with a geometric line check on every board.
    #[test]
    fn detect_win_matches_geometry(board in any_board()) {
        prop_assert_eq!(detect_win(&board), has_line(&board));
    }

    /// Applying a move copies: input untouched, exactly one cell differs.
    #[test]
    fn apply_move_changes_exactly_one_cell(
        board in any_board().prop_filter("has empty cell", |b| b.count(Cell::Empty) > 0),
        pick in any::<prop::sample::Index>(),
        player in player(),
    ) {
        let before = board;
        let empties = board.empty_cells();
        let index = empties[pick.index(empties.len())];

        let after = apply_move_at(&board, index, player).unwrap();

        prop_assert_eq!(board, before);
        let changed = before.cells().iter().zip(after.cells()).filter(|(a, b)| a != b).count();
        prop_assert_eq!(changed, 1);
        prop_assert_eq!(after.get(index), Some(Cell::from(player)));
    }

    /// Applying a move to an occupied cell fails and leaves the board alone.
    #[test]
    fn apply_move_on_occupied_cell_fails(
        board in any_board().prop_filter("has occupied cell", |b| b.count(Cell::Empty) < 9),
        pick in any::<prop::sample::Index>(),
        player in player(),
    ) {
        let before = board;
        let occupied: Vec<usize> = (0..9).filter(|&i| !board.is_empty(i)).collect();
        let index = occupied[pick.index(occupied.len())];

        prop_assert!(apply_move_at(&board, index, player).is_err());
        prop_assert_eq!(board, before);
    }
}
