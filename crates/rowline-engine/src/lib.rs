//! Game-state engine for the rowline board games.
//!
//! Two games share this engine:
//!
//! - **Gomoku**: 15×15 board, five in a row wins.
//! - **Tic-tac-toe with vanishing pieces**: 3×3 board, three in a row wins, and
//!   a player never has more than three pieces on the board; placing a fourth
//!   removes one of that player's older pieces at random.
//!
//! The crate is split into three layers:
//!
//! - [`core`] - board, cells, coordinates and per-player move history
//! - [`rules`] - win detection, speculative probes, legal-move enumeration
//! - [`engine`] - sessions, removal policy, scheduling and the [`GameController`]
//!
//! Move selection for the computer opponent lives in the `rowline-ai` crate and
//! plugs into the controller through the [`MoveStrategy`] trait.

pub use self::{core::*, engine::*, rules::*};

pub mod core;
pub mod engine;
pub mod rules;

/// A placement or removal that the board cannot perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    #[display("{pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },
    #[display("{pos} is already occupied")]
    Occupied { pos: Pos },
    #[display("{pos} is empty")]
    Vacant { pos: Pos },
}

/// A move submitted when the game does not accept one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum IllegalMove {
    #[display("game is over")]
    #[from(ignore)]
    GameOver,
    #[display("not the human's turn (state: {state})")]
    #[from(ignore)]
    OutOfTurn { state: TurnState },
    #[display("invalid cell: {_0}")]
    InvalidCell(InvalidMove),
}

/// The computer opponent found no empty cell to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no empty cell left to play")]
pub struct NoLegalMove;
