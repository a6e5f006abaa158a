use crate::InvalidMove;

use super::{Cell, Player, Pos};

/// Square game board with per-player move history.
///
/// Cells are stored row-major, so the index of `(x, y)` is `y * size + x`.
/// Every placement appends the cell index to its owner's history and every
/// removal deletes it again, so a player's history always lists exactly the
/// cells that player currently occupies, oldest first.
///
/// # Example
///
/// ```
/// use rowline_engine::{Board, Cell, Player, Pos};
///
/// let mut board = Board::new(3);
/// board.place(Pos::new(1, 1), Player::Human).unwrap();
///
/// assert_eq!(board.get(Pos::new(1, 1)), Some(Cell::Occupied(Player::Human)));
/// assert_eq!(board.empty_cells().count(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    histories: [Vec<usize>; 2],
}

impl Board {
    /// Creates an all-empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            histories: [Vec::new(), Vec::new()],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    #[must_use]
    pub fn index_of(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.size + pos.x)
    }

    /// Converts a row-major cell index back to a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cell of this board.
    #[must_use]
    pub fn pos_of(&self, index: usize) -> Pos {
        assert!(index < self.cells.len(), "cell index {index} out of range");
        Pos::new(index % self.size, index / self.size)
    }

    /// Returns the cell at `pos`, or `None` outside the board.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Returns `true` if `pos` is on the board and unoccupied.
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), InvalidMove> {
        let index = self.index_of(pos).ok_or(InvalidMove::OutOfBounds {
            pos,
            size: self.size,
        })?;
        if !self.cells[index].is_empty() {
            return Err(InvalidMove::Occupied { pos });
        }
        self.cells[index] = Cell::Occupied(player);
        self.histories[player.index()].push(index);
        Ok(())
    }

    /// Clears `pos` and drops it from its owner's history.
    ///
    /// Returns the player whose piece was removed.
    pub fn remove(&mut self, pos: Pos) -> Result<Player, InvalidMove> {
        let index = self.index_of(pos).ok_or(InvalidMove::OutOfBounds {
            pos,
            size: self.size,
        })?;
        let Cell::Occupied(owner) = self.cells[index] else {
            return Err(InvalidMove::Vacant { pos });
        };
        self.cells[index] = Cell::Empty;
        let history = &mut self.histories[owner.index()];
        if let Some(at) = history.iter().position(|&i| i == index) {
            history.remove(at);
        }
        Ok(owner)
    }

    /// Iterates over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| self.pos_of(i))
    }

    /// Cell indices occupied by `player`, in the order they were placed.
    #[must_use]
    pub fn history(&self, player: Player) -> &[usize] {
        &self.histories[player.index()]
    }

    #[must_use]
    pub fn live_pieces(&self, player: Player) -> usize {
        self.history(player).len()
    }

    /// Iterates over the board rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Cells seen walking from `origin` (exclusive) in direction `delta` until the edge.
    pub fn ray(&self, origin: Pos, delta: (isize, isize)) -> impl Iterator<Item = Cell> + '_ {
        (1..)
            .map_while(move |steps| origin.step(delta, steps, self.size))
            .map(move |pos| self.cells[pos.y * self.size + pos.x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(15);
        assert_eq!(board.size(), 15);
        assert_eq!(board.empty_cells().count(), 225);
        assert!(!board.is_full());
        for player in Player::ALL {
            assert!(board.history(player).is_empty());
        }
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(3);
        board.place(Pos::new(0, 0), Player::Human).unwrap();
        board.place(Pos::new(2, 1), Player::Ai).unwrap();
        let cells: Vec<_> = board.empty_cells().collect();
        assert_eq!(
            cells,
            [
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(0, 1),
                Pos::new(1, 1),
                Pos::new(0, 2),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ]
        );
    }

    mod place {
        use super::*;

        #[test]
        fn test_rejects_out_of_bounds() {
            let mut board = Board::new(3);
            let before = board.clone();
            assert_eq!(
                board.place(Pos::new(3, 0), Player::Human),
                Err(InvalidMove::OutOfBounds {
                    pos: Pos::new(3, 0),
                    size: 3
                })
            );
            assert_eq!(board, before);
        }

        #[test]
        fn test_rejects_occupied() {
            let mut board = Board::new(3);
            board.place(Pos::new(1, 1), Player::Human).unwrap();
            let before = board.clone();
            assert_eq!(
                board.place(Pos::new(1, 1), Player::Ai),
                Err(InvalidMove::Occupied {
                    pos: Pos::new(1, 1)
                })
            );
            assert_eq!(board, before);
        }

        #[test]
        fn test_appends_history_in_play_order() {
            let mut board = Board::new(3);
            board.place(Pos::new(2, 2), Player::Human).unwrap();
            board.place(Pos::new(0, 0), Player::Ai).unwrap();
            board.place(Pos::new(1, 0), Player::Human).unwrap();
            assert_eq!(board.history(Player::Human), &[8, 1]);
            assert_eq!(board.history(Player::Ai), &[0]);
            assert_eq!(board.live_pieces(Player::Human), 2);
        }

        #[test]
        fn test_full_board() {
            let mut board = Board::new(2);
            for (i, pos) in [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().enumerate() {
                let player = if i % 2 == 0 { Player::Human } else { Player::Ai };
                board.place(Pos::new(pos.0, pos.1), player).unwrap();
            }
            assert!(board.is_full());
            assert_eq!(board.empty_cells().count(), 0);
        }
    }

    mod remove {
        use super::*;

        #[test]
        fn test_place_then_remove_restores_board() {
            let mut board = Board::new(15);
            board.place(Pos::new(3, 4), Player::Ai).unwrap();
            board.place(Pos::new(7, 7), Player::Human).unwrap();
            let before = board.clone();

            board.place(Pos::new(8, 8), Player::Human).unwrap();
            assert_eq!(board.remove(Pos::new(8, 8)), Ok(Player::Human));

            assert_eq!(board, before);
        }

        #[test]
        fn test_removes_from_middle_of_history() {
            let mut board = Board::new(3);
            for x in 0..3 {
                board.place(Pos::new(x, 0), Player::Human).unwrap();
            }
            board.remove(Pos::new(1, 0)).unwrap();
            assert_eq!(board.history(Player::Human), &[0, 2]);
            assert!(board.is_empty(Pos::new(1, 0)));
        }

        #[test]
        fn test_rejects_vacant_cell() {
            let mut board = Board::new(3);
            assert_eq!(
                board.remove(Pos::new(0, 0)),
                Err(InvalidMove::Vacant {
                    pos: Pos::new(0, 0)
                })
            );
        }
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let mut board = Board::new(5);
        board.place(Pos::new(3, 2), Player::Ai).unwrap();
        let cells: Vec<_> = board.ray(Pos::new(2, 2), (1, 0)).collect();
        assert_eq!(cells, [Cell::Occupied(Player::Ai), Cell::Empty]);
        assert_eq!(board.ray(Pos::new(0, 0), (-1, 0)).count(), 0);
        assert_eq!(board.ray(Pos::new(0, 4), (1, -1)).count(), 4);
    }

    #[test]
    fn test_pos_index_round_trip() {
        let board = Board::new(15);
        let pos = Pos::new(4, 9);
        let index = board.index_of(pos).unwrap();
        assert_eq!(index, 9 * 15 + 4);
        assert_eq!(board.pos_of(index), pos);
        assert_eq!(board.index_of(Pos::new(15, 0)), None);
    }
}
