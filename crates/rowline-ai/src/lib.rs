//! Computer opponents for the rowline games.
//!
//! Both strategies implement [`MoveStrategy`] and plug into the
//! [`GameController`](rowline_engine::GameController) of `rowline-engine`.
//!
//! - [`GomokuAi`] - four difficulty tiers for the 15×15 game:
//!   - **Random**: any empty cell
//!   - **Easy**: win if possible, else block an immediate loss, else random
//!   - **Medium**: greedy one-ply search over every empty cell, ranked by the
//!     [`heuristic`] scorer
//!   - **Hard**: not implemented, plays Medium
//! - [`TicTacToeAi`] - fixed priority list for the 3×3 game with vanishing
//!   pieces: win, block, center, corner, edge, anything.
//!
//! # Design: One-Step Lookahead
//!
//! No tier searches deeper than the move being chosen. Each candidate is judged
//! from a [`Probe`](rowline_engine::Probe) captured around it, so the board is
//! only read, never modified.
//!
//! **Limitations:**
//!
//! - Open and blocked runs score the same
//! - Double threats are not recognized
//!
//! # Randomness
//!
//! Every random choice is drawn from the [`RandomSource`] handed to the
//! strategy. Seeded sources replay whole games; scripted sources let tests pin
//! down tie-breaks exactly.

use rowline_engine::{GameKind, MoveStrategy, RandomSource};

pub use self::{gomoku::*, tic_tac_toe::*};

mod gomoku;
pub mod heuristic;
mod tic_tac_toe;

/// Builds the strategy that plays `kind`.
#[must_use]
pub fn strategy_for(kind: GameKind, rng: Box<dyn RandomSource>) -> Box<dyn MoveStrategy> {
    match kind {
        GameKind::Gomoku => Box::new(GomokuAi::new(rng)),
        GameKind::TicTacToe => Box::new(TicTacToeAi::new(rng)),
    }
}
