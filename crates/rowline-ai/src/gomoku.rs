use rowline_engine::{
    Board, Difficulty, MoveStrategy, NoLegalMove, Player, Pos, Probe, RandomSource, Rules,
    find_winning_cell, legal_moves,
};
use tracing::debug;

use crate::heuristic::{self, BLOCK_SCORE, Score, WIN_SCORE};

const RUN_LENGTH: usize = Rules::GOMOKU.run_length();

/// Gomoku opponent with selectable strength.
///
/// # Example
///
/// ```
/// use rowline_ai::GomokuAi;
/// use rowline_engine::{Board, Difficulty, MoveStrategy, Player, Pos, ScriptedRandom};
///
/// let mut ai = GomokuAi::new(Box::new(ScriptedRandom::new([0.0])));
/// let board = Board::new(15);
///
/// let pos = ai.select_move(&board, Player::Ai, Difficulty::Medium).unwrap();
/// assert_eq!(pos, Pos::new(7, 7));
/// ```
#[derive(Debug)]
pub struct GomokuAi {
    rng: Box<dyn RandomSource>,
}

impl GomokuAi {
    #[must_use]
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Uniformly random empty cell.
    pub fn random_move(&mut self, board: &Board) -> Result<Pos, NoLegalMove> {
        self.rng.choose(&legal_moves(board)).ok_or(NoLegalMove)
    }

    /// Wins if possible, otherwise blocks an immediate loss, otherwise plays randomly.
    pub fn easy_move(&mut self, board: &Board, mover: Player) -> Result<Pos, NoLegalMove> {
        if let Some(pos) = find_winning_cell(board, mover, RUN_LENGTH) {
            debug!(%pos, "easy: winning move");
            return Ok(pos);
        }
        if let Some(pos) = find_winning_cell(board, mover.opponent(), RUN_LENGTH) {
            debug!(%pos, "easy: blocking move");
            return Ok(pos);
        }
        self.random_move(board)
    }

    /// Picks the empty cell with the best combined score.
    ///
    /// A cell scores the heuristic value for `mover` plus the value for the
    /// opponent, with [`WIN_SCORE`] replacing the first when `mover` would win
    /// there and [`BLOCK_SCORE`] replacing the second when the opponent would.
    ///
    /// Cells are visited in row-major order. On an exact tie with the best so
    /// far, the later cell takes over when the random source yields more than
    /// `0.5`, so ties are not resolved uniformly.
    pub fn medium_move(&mut self, board: &Board, mover: Player) -> Result<Pos, NoLegalMove> {
        let opponent = mover.opponent();
        let mut best: Option<(Score, Pos)> = None;

        for pos in board.empty_cells() {
            let probe = Probe::capture(board, pos, RUN_LENGTH - 1);
            let own = if probe.wins(mover, RUN_LENGTH) {
                WIN_SCORE
            } else {
                heuristic::score_probe(&probe, board.size(), mover)
            };
            let block = if probe.wins(opponent, RUN_LENGTH) {
                BLOCK_SCORE
            } else {
                heuristic::score_probe(&probe, board.size(), opponent)
            };
            let score = own + block;

            match best {
                Some((best_score, _)) if score < best_score => {}
                Some((best_score, _)) if score == best_score => {
                    if self.rng.next_unit() > 0.5 {
                        best = Some((score, pos));
                    }
                }
                _ => best = Some((score, pos)),
            }
        }

        if let Some((score, pos)) = best {
            debug!(%pos, score, "medium: best cell");
            return Ok(pos);
        }
        match spiral_from_center(board) {
            Some(pos) => Ok(pos),
            None => self.random_move(board),
        }
    }
}

impl MoveStrategy for GomokuAi {
    fn select_move(
        &mut self,
        board: &Board,
        mover: Player,
        difficulty: Difficulty,
    ) -> Result<Pos, NoLegalMove> {
        match difficulty {
            Difficulty::Random => self.random_move(board),
            Difficulty::Easy => self.easy_move(board, mover),
            Difficulty::Medium => self.medium_move(board, mover),
            Difficulty::Hard => {
                debug!("hard difficulty is not implemented, playing medium");
                self.medium_move(board, mover)
            }
        }
    }
}

/// First empty cell found walking outward from the center.
///
/// Offsets grow column by column; each offset tries the four mirrored cells
/// around the center.
fn spiral_from_center(board: &Board) -> Option<Pos> {
    let center = board.size() / 2;
    (0..=center)
        .flat_map(|dx| (0..=center).map(move |dy| (dx, dy)))
        .flat_map(|(dx, dy)| {
            [
                Pos::new(center + dx, center + dy),
                Pos::new(center - dx, center + dy),
                Pos::new(center + dx, center - dy),
                Pos::new(center - dx, center - dy),
            ]
        })
        .find(|&pos| board.is_empty(pos))
}
