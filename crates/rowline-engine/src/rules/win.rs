use crate::core::{Board, Player, Pos};

use super::Probe;

/// Returns `true` if the stone at `pos` completes `run_length` in a row for `player`.
///
/// `pos` is expected to be the cell `player` just played. All four axes are
/// examined, counting consecutive `player` cells on both sides of `pos` and
/// the cell itself.
#[must_use]
pub fn check_win(board: &Board, pos: Pos, player: Player, run_length: usize) -> bool {
    Probe::capture(board, pos, run_length.saturating_sub(1)).wins(player, run_length)
}

/// Returns `true` if `player` would win by playing the empty cell `pos`.
///
/// The board is only read; occupied or off-board cells never win.
#[must_use]
pub fn wins_if_placed(board: &Board, pos: Pos, player: Player, run_length: usize) -> bool {
    board.is_empty(pos) && check_win(board, pos, player, run_length)
}

/// Finds the first empty cell (row-major) where `player` wins immediately.
#[must_use]
pub fn find_winning_cell(board: &Board, player: Player, run_length: usize) -> Option<Pos> {
    board
        .empty_cells()
        .find(|&pos| check_win(board, pos, player, run_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;

    fn place_line(board: &mut Board, start: Pos, axis: Axis, len: usize, player: Player) -> Vec<Pos> {
        let size = board.size();
        (0..len)
            .map(|i| {
                let pos = start.step(axis.delta(), i, size).unwrap();
                board.place(pos, player).unwrap();
                pos
            })
            .collect()
    }

    #[test]
    fn test_five_in_every_axis() {
        let starts = [
            (Axis::Horizontal, Pos::new(3, 7)),
            (Axis::Vertical, Pos::new(2, 0)),
            (Axis::DiagonalDown, Pos::new(10, 10)),
            (Axis::DiagonalUp, Pos::new(0, 14)),
        ];
        for (axis, start) in starts {
            let mut board = Board::new(15);
            let line = place_line(&mut board, start, axis, 5, Player::Human);
            for &pos in &line {
                assert!(
                    check_win(&board, pos, Player::Human, 5),
                    "{axis:?} run should win from {pos}"
                );
                assert!(!check_win(&board, pos, Player::Ai, 5));
            }
        }
    }

    #[test]
    fn test_four_is_not_five() {
        let mut board = Board::new(15);
        let line = place_line(&mut board, Pos::new(0, 0), Axis::Horizontal, 4, Player::Ai);
        for pos in line {
            assert!(!check_win(&board, pos, Player::Ai, 5));
            assert!(check_win(&board, pos, Player::Ai, 4));
        }
    }

    #[test]
    fn test_overline_counts() {
        let mut board = Board::new(15);
        let line = place_line(&mut board, Pos::new(2, 2), Axis::Vertical, 7, Player::Ai);
        assert!(check_win(&board, line[3], Player::Ai, 5));
    }

    #[test]
    fn test_interrupted_run_does_not_win() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(0, 5), Axis::Horizontal, 3, Player::Human);
        board.place(Pos::new(3, 5), Player::Ai).unwrap();
        place_line(&mut board, Pos::new(4, 5), Axis::Horizontal, 2, Player::Human);
        assert!(!check_win(&board, Pos::new(2, 5), Player::Human, 5));
        assert!(!check_win(&board, Pos::new(4, 5), Player::Human, 5));
    }

    #[test]
    fn test_three_in_a_row_small_board() {
        let mut board = Board::new(3);
        place_line(&mut board, Pos::new(0, 2), Axis::DiagonalUp, 3, Player::Ai);
        assert!(check_win(&board, Pos::new(1, 1), Player::Ai, 3));
        assert!(check_win(&board, Pos::new(2, 0), Player::Ai, 3));
    }

    #[test]
    fn test_wins_if_placed_is_speculative() {
        let mut board = Board::new(15);
        place_line(&mut board, Pos::new(3, 7), Axis::Horizontal, 4, Player::Ai);
        let before = board.clone();

        assert!(wins_if_placed(&board, Pos::new(7, 7), Player::Ai, 5));
        assert!(wins_if_placed(&board, Pos::new(2, 7), Player::Ai, 5));
        assert!(!wins_if_placed(&board, Pos::new(8, 7), Player::Ai, 5));
        assert!(!wins_if_placed(&board, Pos::new(3, 7), Player::Ai, 5));
        assert!(!wins_if_placed(&board, Pos::new(7, 7), Player::Human, 5));
        assert_eq!(board, before);
    }

    #[test]
    fn test_find_winning_cell() {
        let mut board = Board::new(3);
        board.place(Pos::new(0, 0), Player::Human).unwrap();
        board.place(Pos::new(1, 0), Player::Human).unwrap();
        assert_eq!(
            find_winning_cell(&board, Player::Human, 3),
            Some(Pos::new(2, 0))
        );
        assert_eq!(find_winning_cell(&board, Player::Ai, 3), None);
    }
}
