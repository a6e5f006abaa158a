//! Static scoring of a hypothetical Gomoku placement.
//!
//! The score of placing `player` at a cell is the sum of
//!
//! - a center bonus: `(c - |x - c|) + (c - |y - c|)` with `c = size / 2`
//! - for each axis, a reward for the run the stone would be part of
//!   ([`RUN_WEIGHTS`]) and for the opponent run it would sit next to
//!   ([`BLOCK_WEIGHTS`])
//!
//! A run of length `k` is detected by counting the cell itself plus up to
//! `k - 1` consecutive stones of the same colour on each side; the count
//! stops at an empty cell, an opponent stone or the edge. Weights for
//! different lengths add up, so a four on one axis also collects the three
//! and two rewards.
//!
//! ```
//! use rowline_ai::heuristic::score_placement;
//! use rowline_engine::{Board, Player, Pos};
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Player::Ai).unwrap();
//!
//! // Next to the center stone: center bonus 13 plus a two (50).
//! assert_eq!(score_placement(&board, Pos::new(8, 7), Player::Ai), 63);
//! // Same cell for the human: center bonus 13 plus blocking a two (40).
//! assert_eq!(score_placement(&board, Pos::new(8, 7), Player::Human), 53);
//! ```

use rowline_engine::{Axis, Board, Player, Pos, Probe};

/// Heuristic score; larger is better for the player being scored.
pub type Score = usize;

/// Score given to a cell that wins on the spot.
pub const WIN_SCORE: Score = 100_000;

/// Score given to a cell where the opponent would win on the spot.
pub const BLOCK_SCORE: Score = 50_000;

/// `(run length, reward)` for the scored player's own runs.
pub const RUN_WEIGHTS: [(usize, Score); 3] = [(4, 5000), (3, 500), (2, 50)];

/// `(run length, reward)` for opponent runs next to the cell.
pub const BLOCK_WEIGHTS: [(usize, Score); 2] = [(3, 400), (2, 40)];

/// Cells a probe must reach on each side to evaluate every weight.
pub const SCORE_REACH: usize = 3;

/// Scores `player` taking the empty cell `pos`.
#[must_use]
pub fn score_placement(board: &Board, pos: Pos, player: Player) -> Score {
    score_probe(&Probe::capture(board, pos, SCORE_REACH), board.size(), player)
}

/// Scores `player` taking the origin of `probe` on a `size`×`size` board.
///
/// `probe` must reach at least [`SCORE_REACH`] cells.
#[must_use]
pub fn score_probe(probe: &Probe, size: usize, player: Player) -> Score {
    let opponent = player.opponent();
    let lines: Score = Axis::ALL
        .into_iter()
        .map(|axis| {
            let own = weigh(probe, axis, player, &RUN_WEIGHTS);
            let block = weigh(probe, axis, opponent, &BLOCK_WEIGHTS);
            own + block
        })
        .sum();
    center_bonus(probe.origin(), size) + lines
}

fn weigh(probe: &Probe, axis: Axis, player: Player, weights: &[(usize, Score)]) -> Score {
    weights
        .iter()
        .filter(|(length, _)| probe.makes_run(axis, player, *length))
        .map(|(_, reward)| reward)
        .sum()
}

fn center_bonus(pos: Pos, size: usize) -> Score {
    let center = size / 2;
    (center - pos.x.abs_diff(center)) + (center - pos.y.abs_diff(center))
}
