use std::mem;

use rand::Rng as _;
use rowline_ai::strategy_for;
use rowline_engine::{
    Difficulty, GameController, GameKind, GameResult, GameSeed, MoveStrategy, Player,
    RandomStream, ScheduledTask, SeededRandom, TurnState,
};
use tracing::{debug, info, warn};

use crate::{command::new_controller, config::SettingsArg, logging};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Game to simulate: gomoku or tic-tac-toe
    #[clap(default_value_t)]
    pub(super) game: GameKind,
    /// Number of games to play
    #[clap(long, default_value_t = 10)]
    pub(super) games: usize,
    /// Difficulty of the AI playing the human seat
    #[clap(long, default_value_t = Difficulty::Easy)]
    pub(super) human_difficulty: Difficulty,
    /// Moves after which a game is abandoned as unfinished
    #[clap(long, default_value_t = 400)]
    pub(super) max_moves: usize,
    #[clap(flatten)]
    pub(super) settings: SettingsArg,
}

/// Results over a series of games, seen from the human seat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    human_wins: usize,
    ai_wins: usize,
    draws: usize,
    unfinished: usize,
}

impl Tally {
    fn record(&mut self, result: Option<GameResult>) {
        match result {
            Some(GameResult::Won(Player::Human)) => self.human_wins += 1,
            Some(GameResult::Won(Player::Ai)) => self.ai_wins += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }

    fn games(&self) -> usize {
        self.human_wins + self.ai_wins + self.draws + self.unfinished
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    logging::init_stderr()?;

    let settings = arg.settings.resolve()?;
    let seed: GameSeed = settings.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        game = %arg.game,
        %seed,
        difficulty = %settings.difficulty,
        human_difficulty = %arg.human_difficulty,
        "starting simulation"
    );

    let tally = simulate(arg, new_controller(arg.game, &settings, seed), seed);

    println!("{} games of {}", tally.games(), arg.game);
    println!("  human seat ({}): {}", arg.human_difficulty, tally.human_wins);
    println!("  AI ({}): {}", settings.difficulty, tally.ai_wins);
    println!("  draws: {}", tally.draws);
    if tally.unfinished > 0 {
        println!("  unfinished after {} moves: {}", arg.max_moves, tally.unfinished);
    }
    Ok(())
}

fn simulate(arg: &SimulateArg, mut controller: GameController, seed: GameSeed) -> Tally {
    let mut human = strategy_for(
        arg.game,
        Box::new(SeededRandom::from_seed(seed, RandomStream::HumanSeat)),
    );
    let mut tally = Tally::default();
    for game in 0..arg.games {
        if game > 0 {
            controller.new_game(None);
        }
        let result = play_one(
            &mut controller,
            human.as_mut(),
            arg.human_difficulty,
            arg.max_moves,
        );
        debug!(game, ?result, moves = controller.session().total_moves(), "game finished");
        tally.record(result);
    }
    tally
}

/// Plays the current game to the end with `human` in the human seat.
///
/// Scheduled tasks run immediately. Returns `None` if the game is still
/// going after `max_moves` moves.
fn play_one(
    controller: &mut GameController,
    human: &mut dyn MoveStrategy,
    difficulty: Difficulty,
    max_moves: usize,
) -> Option<GameResult> {
    let mut tasks: Vec<ScheduledTask> = vec![];
    while controller.session().total_moves() < max_moves {
        match controller.turn_state() {
            TurnState::GameOver => return controller.session().result(),
            TurnState::WaitingForHuman => {
                let board = controller.session().board();
                let Ok(pos) = human.select_move(board, Player::Human, difficulty) else {
                    warn!("human seat has no legal move");
                    return None;
                };
                if let Err(e) = controller.player_move(pos, &mut tasks) {
                    warn!(%pos, "human seat move rejected: {e}");
                    return None;
                }
            }
            TurnState::AiThinking | TurnState::Removing => {
                if tasks.is_empty() {
                    warn!(state = %controller.turn_state(), "no task pending");
                    return None;
                }
                for task in mem::take(&mut tasks) {
                    controller.run_task(task, &mut tasks);
                }
            }
        }
    }
    controller.session().result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(game: GameKind, games: usize, max_moves: usize) -> SimulateArg {
        SimulateArg {
            game,
            games,
            human_difficulty: Difficulty::Easy,
            max_moves,
            settings: SettingsArg {
                difficulty: Some(Difficulty::Medium),
                ..SettingsArg::default()
            },
        }
    }

    fn run_with_seed(arg: &SimulateArg, seed: GameSeed) -> Tally {
        let settings = arg.settings.resolve().unwrap();
        simulate(arg, new_controller(arg.game, &settings, seed), seed)
    }

    #[test]
    fn test_same_seed_same_results() {
        let arg = arg(GameKind::Gomoku, 3, 400);
        let seed = GameSeed::from_bytes([42; 16]);
        let first = run_with_seed(&arg, seed);
        let second = run_with_seed(&arg, seed);
        assert_eq!(first, second);
        assert_eq!(first.games(), 3);
    }

    #[test]
    fn test_tic_tac_toe_stops_at_move_limit() {
        let arg = arg(GameKind::TicTacToe, 4, 30);
        let tally = run_with_seed(&arg, GameSeed::from_bytes([1; 16]));
        assert_eq!(tally.games(), 4);
        assert_eq!(tally.draws, 0);
    }

    #[test]
    fn test_zero_move_limit_leaves_games_unfinished() {
        let arg = arg(GameKind::Gomoku, 2, 0);
        let tally = run_with_seed(&arg, GameSeed::from_bytes([0; 16]));
        assert_eq!(
            tally,
            Tally {
                unfinished: 2,
                ..Tally::default()
            }
        );
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(Some(GameResult::Won(Player::Human)));
        tally.record(Some(GameResult::Won(Player::Ai)));
        tally.record(Some(GameResult::Won(Player::Ai)));
        tally.record(None);
        assert_eq!(tally.human_wins, 1);
        assert_eq!(tally.ai_wins, 2);
        assert_eq!(tally.unfinished, 1);
        assert_eq!(tally.games(), 4);
    }
}
