use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    IllegalMove, InvalidMove, NoLegalMove,
    core::{Board, Cell, Player, Pos},
    rules::check_win,
};

use super::{
    Difficulty, GameResult, GameSession, Generation, RandomSource, Rules, ScheduledTask,
    Scheduler, TaskKind, TurnState, status,
};

/// Picks moves for a computer-controlled seat.
pub trait MoveStrategy: fmt::Debug {
    /// Chooses an empty cell for `mover` on `board`.
    ///
    /// Fails only when the board has no empty cell.
    fn select_move(
        &mut self,
        board: &Board,
        mover: Player,
        difficulty: Difficulty,
    ) -> Result<Pos, NoLegalMove>;
}

/// How a move was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Resolution {
    /// A removal is pending; the move resolves when it completes.
    Pending,
    /// The game goes on with `next` to move.
    Continue { next: Player },
    Won(Player),
    Draw,
}

/// Report of one committed move, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    placed: Pos,
    mover: Player,
    removal: Option<Pos>,
    resolution: Resolution,
}

impl MoveOutcome {
    #[must_use]
    pub fn placed(&self) -> Pos {
        self.placed
    }

    #[must_use]
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Cell chosen for removal (pending or already applied).
    #[must_use]
    pub fn removal(&self) -> Option<Pos> {
        self.removal
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.resolution {
            Resolution::Won(player) => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.resolution.is_draw()
    }

    #[must_use]
    pub fn next_player(&self) -> Option<Player> {
        match self.resolution {
            Resolution::Continue { next } => Some(next),
            _ => None,
        }
    }
}

/// Result of running a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TaskResult {
    /// The task belonged to an earlier game or no longer applies.
    Stale,
    /// The AI played a move.
    Moved(MoveOutcome),
    /// A pending removal was applied and its move resolved.
    Removed(MoveOutcome),
    /// The AI had no cell to play; the game ended in a draw.
    NoMove,
}

/// Drives one game at a time: turn order, AI turns, removals and game end.
///
/// All mutation goes through `&mut self`, so moves never interleave. The
/// controller never sleeps: whenever the AI should move or a removal should
/// be applied, it hands a [`ScheduledTask`] to the host's [`Scheduler`] and
/// continues when the host passes the task back to [`run_task`](Self::run_task).
///
/// # Example
///
/// ```
/// use rowline_engine::{
///     Board, Difficulty, GameController, MoveStrategy, NoLegalMove, Player, Pos, Rules,
///     ScheduledTask, ScriptedRandom,
/// };
///
/// #[derive(Debug)]
/// struct FirstEmpty;
///
/// impl MoveStrategy for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _: Player, _: Difficulty) -> Result<Pos, NoLegalMove> {
///         board.empty_cells().next().ok_or(NoLegalMove)
///     }
/// }
///
/// let mut controller = GameController::new(
///     Rules::GOMOKU,
///     Difficulty::Medium,
///     Box::new(FirstEmpty),
///     Box::new(ScriptedRandom::new([0.0])),
/// );
/// let mut tasks: Vec<ScheduledTask> = vec![];
///
/// controller.player_move(Pos::new(7, 7), &mut tasks).unwrap();
/// assert_eq!(controller.status_text(), "轮到 AI (白棋)");
///
/// let result = controller.run_task(tasks.remove(0), &mut tasks);
/// assert!(result.is_moved());
/// assert_eq!(controller.status_text(), "轮到你 (黑棋)");
/// ```
#[derive(Debug)]
pub struct GameController {
    rules: Rules,
    session: GameSession,
    strategy: Box<dyn MoveStrategy>,
    rng: Box<dyn RandomSource>,
}

impl GameController {
    /// Creates a controller with a fresh game waiting for the human.
    ///
    /// `strategy` plays the AI seat; `rng` drives the removal policy.
    #[must_use]
    pub fn new(
        rules: Rules,
        difficulty: Difficulty,
        strategy: Box<dyn MoveStrategy>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let session = GameSession::new(&rules, difficulty, Generation::default());
        info!(kind = %rules.kind(), %difficulty, "new game");
        Self {
            rules,
            session,
            strategy,
            rng,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.rules.board_size()
    }

    #[must_use]
    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        self.session.board().get(pos)
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.session.turn_state()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }

    /// Human-readable status line for the current session.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        status::status_text(self.rules.kind(), &self.session)
    }

    /// Replaces the session with a fresh game.
    ///
    /// Keeps the current difficulty when `difficulty` is `None`. Tasks
    /// scheduled for the previous game become stale.
    pub fn new_game(&mut self, difficulty: Option<Difficulty>) -> Generation {
        let difficulty = difficulty.unwrap_or(self.session.difficulty());
        let generation = self.session.generation().next();
        self.session = GameSession::new(&self.rules, difficulty, generation);
        info!(kind = %self.rules.kind(), %difficulty, %generation, "new game");
        generation
    }

    /// Changes the AI difficulty of the running game, effective from the next AI turn.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
    }

    /// Plays the human's move at `pos`.
    ///
    /// Rejected without any state change unless it is the human's turn and
    /// `pos` is an empty cell.
    pub fn player_move(
        &mut self,
        pos: Pos,
        scheduler: &mut dyn Scheduler,
    ) -> Result<MoveOutcome, IllegalMove> {
        match self.session.turn_state() {
            TurnState::WaitingForHuman => {}
            TurnState::GameOver => return Err(IllegalMove::GameOver),
            state => return Err(IllegalMove::OutOfTurn { state }),
        }
        Ok(self.commit(pos, Player::Human, scheduler)?)
    }

    /// Runs a task previously handed to the scheduler.
    ///
    /// Tasks from an earlier game, or that no longer match the turn state,
    /// are ignored.
    pub fn run_task(&mut self, task: ScheduledTask, scheduler: &mut dyn Scheduler) -> TaskResult {
        if task.generation() != self.session.generation() {
            debug!(
                task = %task.generation(),
                current = %self.session.generation(),
                "ignoring task from an earlier game"
            );
            return TaskResult::Stale;
        }
        match task.kind() {
            TaskKind::AiTurn => self.play_ai_turn(scheduler),
            TaskKind::FinishRemoval => self.finish_removal(scheduler),
        }
    }

    fn play_ai_turn(&mut self, scheduler: &mut dyn Scheduler) -> TaskResult {
        if !self.session.turn_state().is_ai_thinking() {
            debug!(state = %self.session.turn_state(), "AI turn no longer applies");
            return TaskResult::Stale;
        }

        let board = self.session.board();
        let choice = match self
            .strategy
            .select_move(board, Player::Ai, self.session.difficulty())
        {
            Ok(pos) if board.is_empty(pos) => Some(pos),
            Ok(pos) => {
                warn!(%pos, "strategy picked an unplayable cell, using first empty cell");
                board.empty_cells().next()
            }
            Err(err) => {
                warn!(%err, "AI has no legal move");
                None
            }
        };
        let Some(pos) = choice else {
            self.end_game(GameResult::Draw);
            return TaskResult::NoMove;
        };

        debug!(%pos, difficulty = %self.session.difficulty(), "AI move");
        match self.commit(pos, Player::Ai, scheduler) {
            Ok(outcome) => TaskResult::Moved(outcome),
            Err(err) => {
                warn!(%err, "AI move rejected");
                self.end_game(GameResult::Draw);
                TaskResult::NoMove
            }
        }
    }

    fn finish_removal(&mut self, scheduler: &mut dyn Scheduler) -> TaskResult {
        if !self.session.turn_state().is_removing() {
            return TaskResult::Stale;
        }
        let (board, removal) = self.session.board_and_removal_mut();
        match removal.complete(board) {
            Ok(Some((mover, placed, removed))) => {
                let resolution = self.resolve(mover, placed, scheduler);
                TaskResult::Removed(MoveOutcome {
                    placed,
                    mover,
                    removal: Some(removed),
                    resolution,
                })
            }
            Ok(None) => TaskResult::Stale,
            Err(err) => {
                warn!(%err, "pending removal could not be applied");
                TaskResult::Stale
            }
        }
    }

    /// Places a stone and either starts a removal or resolves the move.
    fn commit(
        &mut self,
        pos: Pos,
        mover: Player,
        scheduler: &mut dyn Scheduler,
    ) -> Result<MoveOutcome, InvalidMove> {
        let generation = self.session.generation();
        let (board, removal) = self.session.board_and_removal_mut();
        board.place(pos, mover)?;
        let target = removal.after_placement(board, mover, pos, self.rng.as_mut());
        self.session.record_placement(pos);

        if let Some(target) = target {
            self.session.enter_removing();
            scheduler.schedule(ScheduledTask::new(
                generation,
                TaskKind::FinishRemoval,
                self.rules.removal_delay(),
            ));
            return Ok(MoveOutcome {
                placed: pos,
                mover,
                removal: Some(target),
                resolution: Resolution::Pending,
            });
        }

        let resolution = self.resolve(mover, pos, scheduler);
        Ok(MoveOutcome {
            placed: pos,
            mover,
            removal: None,
            resolution,
        })
    }

    /// Checks for a win or draw after `mover` played `placed`, then passes the turn.
    fn resolve(&mut self, mover: Player, placed: Pos, scheduler: &mut dyn Scheduler) -> Resolution {
        let board = self.session.board();
        if check_win(board, placed, mover, self.rules.run_length()) {
            self.end_game(GameResult::Won(mover));
            return Resolution::Won(mover);
        }
        if board.is_full() {
            self.end_game(GameResult::Draw);
            return Resolution::Draw;
        }

        let next = mover.opponent();
        match next {
            Player::Human => self.session.set_turn(next, TurnState::WaitingForHuman),
            Player::Ai => {
                self.session.set_turn(next, TurnState::AiThinking);
                scheduler.schedule(ScheduledTask::new(
                    self.session.generation(),
                    TaskKind::AiTurn,
                    self.rules.ai_delay(),
                ));
            }
        }
        Resolution::Continue { next }
    }

    fn end_game(&mut self, result: GameResult) {
        self.session.finish(result);
        info!(
            ?result,
            moves = self.session.total_moves(),
            generation = %self.session.generation(),
            "game over"
        );
    }
}
