use arrayvec::ArrayVec;

use crate::core::{Axis, Board, Cell, Player, Pos};

/// Longest ray a probe keeps on each side of its origin.
///
/// Enough for run lengths up to `MAX_REACH + 1`.
pub const MAX_REACH: usize = 8;

type Ray = ArrayVec<Cell, MAX_REACH>;

/// Snapshot of the cells around a candidate position.
///
/// A probe copies, for each of the four axes, the cells walking outward from
/// `origin` in both directions (at most `reach` cells per side). The origin
/// itself is not stored: every query treats it as occupied by the player
/// being asked about, which is what a speculative placement means.
///
/// Because the probe owns its copy, evaluating a hypothetical move never
/// touches the board it was captured from.
///
/// # Example
///
/// ```
/// use rowline_engine::{Axis, Board, Player, Pos, Probe};
///
/// let mut board = Board::new(15);
/// for x in 3..7 {
///     board.place(Pos::new(x, 7), Player::Ai).unwrap();
/// }
///
/// let probe = Probe::capture(&board, Pos::new(7, 7), 4);
/// assert_eq!(probe.run_length(Axis::Horizontal, Player::Ai, 4), 5);
/// assert!(probe.wins(Player::Ai, 5));
/// assert!(!probe.wins(Player::Human, 5));
/// ```
#[derive(Debug, Clone)]
pub struct Probe {
    origin: Pos,
    rays: [[Ray; 2]; 4],
}

impl Probe {
    /// Copies up to `reach` cells on each side of `origin` along every axis.
    ///
    /// `reach` is clamped to [`MAX_REACH`].
    #[must_use]
    pub fn capture(board: &Board, origin: Pos, reach: usize) -> Self {
        let reach = reach.min(MAX_REACH);
        let rays = Axis::ALL.map(|axis| {
            [axis.delta(), axis.reverse_delta()]
                .map(|delta| board.ray(origin, delta).take(reach).collect())
        });
        Self { origin, rays }
    }

    #[must_use]
    pub fn origin(&self) -> Pos {
        self.origin
    }

    /// Length of the run through the origin along `axis` if `player` stood there.
    ///
    /// Counts the origin plus consecutive `player` cells on each side, looking at
    /// most `limit` cells per side. A side stops at the first cell that is empty,
    /// owned by the other player, or beyond the board edge.
    #[must_use]
    pub fn run_length(&self, axis: Axis, player: Player, limit: usize) -> usize {
        let sides: usize = self.rays[axis.index()]
            .iter()
            .map(|ray| {
                ray.iter()
                    .take(limit)
                    .take_while(|cell| cell.is_owned_by(player))
                    .count()
            })
            .sum();
        1 + sides
    }

    /// Returns `true` if a `player` stone at the origin forms a run of at least
    /// `length` along `axis`, looking no further than `length - 1` cells per side.
    #[must_use]
    pub fn makes_run(&self, axis: Axis, player: Player, length: usize) -> bool {
        self.run_length(axis, player, length.saturating_sub(1)) >= length
    }

    /// Returns `true` if a `player` stone at the origin completes `run_length` in a row.
    #[must_use]
    pub fn wins(&self, player: Player, run_length: usize) -> bool {
        Axis::ALL
            .into_iter()
            .any(|axis| self.makes_run(axis, player, run_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(x, y, player) in stones {
            board.place(Pos::new(x, y), player).unwrap();
        }
        board
    }

    #[test]
    fn test_capture_does_not_mutate_board() {
        let board = board_with(15, &[(6, 7, Player::Ai), (8, 7, Player::Human)]);
        let before = board.clone();
        let probe = Probe::capture(&board, Pos::new(7, 7), 4);
        let _ = probe.wins(Player::Ai, 5);
        assert_eq!(board, before);
        assert!(board.is_empty(Pos::new(7, 7)));
    }

    #[test]
    fn test_run_stops_at_empty_and_opponent() {
        // H H . H [origin] A H
        let board = board_with(
            9,
            &[
                (0, 0, Player::Human),
                (1, 0, Player::Human),
                (3, 0, Player::Human),
                (5, 0, Player::Ai),
                (6, 0, Player::Human),
            ],
        );
        let probe = Probe::capture(&board, Pos::new(4, 0), 4);
        assert_eq!(probe.run_length(Axis::Horizontal, Player::Human, 4), 2);
        assert_eq!(probe.run_length(Axis::Horizontal, Player::Ai, 4), 2);
    }

    #[test]
    fn test_run_limit_caps_each_side() {
        let board = board_with(
            15,
            &[
                (4, 4, Player::Ai),
                (5, 5, Player::Ai),
                (6, 6, Player::Ai),
                (8, 8, Player::Ai),
            ],
        );
        let probe = Probe::capture(&board, Pos::new(7, 7), 4);
        assert_eq!(probe.run_length(Axis::DiagonalDown, Player::Ai, 4), 5);
        assert_eq!(probe.run_length(Axis::DiagonalDown, Player::Ai, 1), 3);
        assert!(probe.makes_run(Axis::DiagonalDown, Player::Ai, 4));
        assert!(probe.makes_run(Axis::DiagonalDown, Player::Ai, 2));
    }

    #[test]
    fn test_diagonal_up_direction() {
        let board = board_with(3, &[(0, 2, Player::Human), (2, 0, Player::Human)]);
        let probe = Probe::capture(&board, Pos::new(1, 1), 2);
        assert!(probe.makes_run(Axis::DiagonalUp, Player::Human, 3));
        assert!(!probe.makes_run(Axis::DiagonalDown, Player::Human, 3));
        assert!(probe.wins(Player::Human, 3));
    }

    #[test]
    fn test_reach_is_clamped() {
        let board = Board::new(15);
        let probe = Probe::capture(&board, Pos::new(0, 0), 100);
        assert_eq!(probe.rays[Axis::Horizontal.index()][0].len(), MAX_REACH);
        assert!(probe.rays[Axis::Horizontal.index()][1].is_empty());
    }
}
