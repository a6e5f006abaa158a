use crate::core::{Board, Player, Pos};

use super::{Difficulty, Generation, RemovalPolicy, Rules};

/// Where the turn cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum TurnState {
    #[display("waiting for human")]
    WaitingForHuman,
    #[display("AI thinking")]
    AiThinking,
    #[display("removing")]
    Removing,
    #[display("game over")]
    GameOver,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameResult {
    Won(Player),
    Draw,
}

/// State of one game from start to finish.
///
/// Owned by the [`GameController`](super::GameController); a new game
/// replaces the whole session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    removal: RemovalPolicy,
    active: Player,
    turn_state: TurnState,
    result: Option<GameResult>,
    difficulty: Difficulty,
    total_moves: usize,
    last_move: Option<Pos>,
    generation: Generation,
}

impl GameSession {
    #[must_use]
    pub fn new(rules: &Rules, difficulty: Difficulty, generation: Generation) -> Self {
        Self {
            board: Board::new(rules.board_size()),
            removal: RemovalPolicy::new(rules.piece_cap()),
            active: Player::Human,
            turn_state: TurnState::WaitingForHuman,
            result: None,
            difficulty,
            total_moves: 0,
            last_move: None,
            generation,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn removal(&self) -> &RemovalPolicy {
        &self.removal
    }

    /// Player whose move the session is waiting for (or who moved last once the game is over).
    #[must_use]
    pub fn active(&self) -> Player {
        self.active
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            Some(GameResult::Won(player)) => Some(player),
            Some(GameResult::Draw) | None => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn_state.is_game_over()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Successful placements by both players, removals not subtracted.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.total_moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub(crate) fn board_and_removal_mut(&mut self) -> (&mut Board, &mut RemovalPolicy) {
        (&mut self.board, &mut self.removal)
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub(crate) fn record_placement(&mut self, pos: Pos) {
        self.total_moves += 1;
        self.last_move = Some(pos);
    }

    pub(crate) fn set_turn(&mut self, active: Player, turn_state: TurnState) {
        debug_assert!(!turn_state.is_game_over());
        self.active = active;
        self.turn_state = turn_state;
    }

    pub(crate) fn enter_removing(&mut self) {
        self.turn_state = TurnState::Removing;
    }

    pub(crate) fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        self.turn_state = TurnState::GameOver;
        self.removal.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_waits_for_human() {
        let session = GameSession::new(&Rules::GOMOKU, Difficulty::Easy, Generation::default());
        assert_eq!(session.board().size(), 15);
        assert_eq!(session.active(), Player::Human);
        assert!(session.turn_state().is_waiting_for_human());
        assert_eq!(session.result(), None);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.total_moves(), 0);
        assert_eq!(session.removal().cap(), None);
    }

    #[test]
    fn test_finish_sets_result() {
        let mut session = GameSession::new(&Rules::TIC_TAC_TOE, Difficulty::Medium, Generation::default());
        session.finish(GameResult::Won(Player::Ai));
        assert!(session.is_game_over());
        assert_eq!(session.winner(), Some(Player::Ai));
        assert!(session.removal().phase().is_terminal());

        let mut session = GameSession::new(&Rules::TIC_TAC_TOE, Difficulty::Medium, Generation::default());
        session.finish(GameResult::Draw);
        assert_eq!(session.winner(), None);
        assert_eq!(session.result(), Some(GameResult::Draw));
    }
}
