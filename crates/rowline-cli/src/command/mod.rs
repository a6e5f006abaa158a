use clap::{Parser, Subcommand};
use rowline_ai::strategy_for;
use rowline_engine::{GameController, GameKind, GameSeed, RandomStream, SeededRandom};

use crate::config::Settings;

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the computer in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Let two AIs play each other and report the results
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

/// Controller for `kind` whose AI and removal draw from separate streams of `seed`.
fn new_controller(kind: GameKind, settings: &Settings, seed: GameSeed) -> GameController {
    let ai = strategy_for(
        kind,
        Box::new(SeededRandom::from_seed(seed, RandomStream::Ai)),
    );
    GameController::new(
        settings.rules(kind),
        settings.difficulty,
        ai,
        Box::new(SeededRandom::from_seed(seed, RandomStream::Removal)),
    )
}
