use crate::core::{Board, Pos};

/// Every empty cell, row-major. All of them are legal moves in both games.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Pos> {
    board.empty_cells().collect()
}

/// Preference groups of the 3×3 board.
///
/// These are fallback tiers for move selection, not legality filters.
pub mod tic_tac_toe {
    use crate::core::{Board, Pos};

    pub const CENTER: Pos = Pos::new(1, 1);

    pub const CORNERS: [Pos; 4] = [
        Pos::new(0, 0),
        Pos::new(2, 0),
        Pos::new(0, 2),
        Pos::new(2, 2),
    ];

    pub const EDGES: [Pos; 4] = [
        Pos::new(1, 0),
        Pos::new(0, 1),
        Pos::new(2, 1),
        Pos::new(1, 2),
    ];

    /// Cells of `group` that are still empty on `board`, in group order.
    #[must_use]
    pub fn available(board: &Board, group: &[Pos]) -> Vec<Pos> {
        group
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_legal_moves_are_empty_cells() {
        let mut board = Board::new(15);
        assert_eq!(legal_moves(&board).len(), 225);
        board.place(Pos::new(7, 7), Player::Human).unwrap();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 224);
        assert!(!moves.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_groups_partition_small_board() {
        let board = Board::new(3);
        let mut all: Vec<_> = [tic_tac_toe::CENTER]
            .into_iter()
            .chain(tic_tac_toe::CORNERS)
            .chain(tic_tac_toe::EDGES)
            .map(|pos| board.index_of(pos).unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..9).collect::<Vec<_>>());

        let corners: Vec<_> = tic_tac_toe::CORNERS
            .iter()
            .map(|&pos| board.index_of(pos).unwrap())
            .collect();
        assert_eq!(corners, [0, 2, 6, 8]);
    }

    #[test]
    fn test_available_skips_occupied() {
        let mut board = Board::new(3);
        board.place(Pos::new(0, 0), Player::Ai).unwrap();
        board.place(Pos::new(2, 2), Player::Human).unwrap();
        assert_eq!(
            tic_tac_toe::available(&board, &tic_tac_toe::CORNERS),
            [Pos::new(2, 0), Pos::new(0, 2)]
        );
    }
}
