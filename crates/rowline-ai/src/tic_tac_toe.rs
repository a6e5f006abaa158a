use rowline_engine::{
    Board, Difficulty, MoveStrategy, NoLegalMove, Player, Pos, RandomSource, Rules,
    find_winning_cell, legal_moves,
    tic_tac_toe::{CENTER, CORNERS, EDGES, available},
};
use tracing::debug;

const RUN_LENGTH: usize = Rules::TIC_TAC_TOE.run_length();

/// Opponent for the 3×3 game with vanishing pieces.
///
/// Works through a fixed list and plays the first rule that applies:
///
/// 1. complete three in a row
/// 2. block the opponent's three in a row
/// 3. take the center
/// 4. take a random free corner
/// 5. take a random free edge
/// 6. take any random free cell
///
/// The difficulty setting is ignored.
#[derive(Debug)]
pub struct TicTacToeAi {
    rng: Box<dyn RandomSource>,
}

impl TicTacToeAi {
    #[must_use]
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for TicTacToeAi {
    fn select_move(&mut self, board: &Board, mover: Player, _: Difficulty) -> Result<Pos, NoLegalMove> {
        if let Some(pos) = find_winning_cell(board, mover, RUN_LENGTH) {
            debug!(%pos, "winning move");
            return Ok(pos);
        }
        if let Some(pos) = find_winning_cell(board, mover.opponent(), RUN_LENGTH) {
            debug!(%pos, "blocking move");
            return Ok(pos);
        }
        if board.is_empty(CENTER) {
            return Ok(CENTER);
        }
        [&CORNERS[..], &EDGES[..]]
            .into_iter()
            .find_map(|group| self.rng.choose(&available(board, group)))
            .or_else(|| self.rng.choose(&legal_moves(board)))
            .ok_or(NoLegalMove)
    }
}
