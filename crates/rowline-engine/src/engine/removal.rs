use tracing::debug;

use crate::{
    InvalidMove,
    core::{Board, Player, Pos},
};

use super::RandomSource;

/// Where the removal policy stands within the current move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RemovalPhase {
    /// No removal pending.
    Playing,
    /// `mover` just played `placed` and one of their older pieces, `target`,
    /// is about to be removed.
    Removing {
        mover: Player,
        placed: Pos,
        target: Pos,
    },
    /// The game has ended; no further removals.
    Terminal,
}

/// Enforces a maximum number of live pieces per player.
///
/// After each placement, if the mover now has more than `cap` pieces on the
/// board, one of their pieces other than the one just placed is chosen
/// uniformly at random. The policy enters [`RemovalPhase::Removing`] and the
/// board is left untouched until [`RemovalPolicy::complete`] applies the
/// removal. Without a cap the policy never removes anything.
#[derive(Debug, Clone)]
pub struct RemovalPolicy {
    cap: Option<usize>,
    phase: RemovalPhase,
}

impl RemovalPolicy {
    #[must_use]
    pub fn new(cap: Option<usize>) -> Self {
        Self {
            cap,
            phase: RemovalPhase::Playing,
        }
    }

    #[must_use]
    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    #[must_use]
    pub fn phase(&self) -> RemovalPhase {
        self.phase
    }

    /// Pending removal target, if any.
    #[must_use]
    pub fn target(&self) -> Option<Pos> {
        match self.phase {
            RemovalPhase::Removing { target, .. } => Some(target),
            RemovalPhase::Playing | RemovalPhase::Terminal => None,
        }
    }

    /// Called after `mover` placed `placed`; picks a piece to remove if the cap is exceeded.
    ///
    /// Returns the chosen cell. The board is not modified.
    pub fn after_placement(
        &mut self,
        board: &Board,
        mover: Player,
        placed: Pos,
        rng: &mut dyn RandomSource,
    ) -> Option<Pos> {
        if !self.phase.is_playing() {
            return None;
        }
        let cap = self.cap?;
        let history = board.history(mover);
        if history.len() <= cap {
            return None;
        }
        let older = &history[..history.len() - 1];
        let target = board.pos_of(older[rng.pick_index(older.len())]);
        debug!(?mover, %placed, %target, "piece cap exceeded, removal pending");
        self.phase = RemovalPhase::Removing {
            mover,
            placed,
            target,
        };
        Some(target)
    }

    /// Applies the pending removal and returns to [`RemovalPhase::Playing`].
    ///
    /// Returns `(mover, placed, removed)` of the move that triggered it, or
    /// `None` if nothing was pending.
    pub fn complete(&mut self, board: &mut Board) -> Result<Option<(Player, Pos, Pos)>, InvalidMove> {
        let RemovalPhase::Removing {
            mover,
            placed,
            target,
        } = self.phase
        else {
            return Ok(None);
        };
        board.remove(target)?;
        self.phase = RemovalPhase::Playing;
        debug!(?mover, %target, "removed older piece");
        Ok(Some((mover, placed, target)))
    }

    /// Marks the game as finished.
    pub fn finish(&mut self) {
        self.phase = RemovalPhase::Terminal;
    }
}
